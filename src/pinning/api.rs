use serde::Serialize;

use crate::utils::{
    fetch::{send_http_request, Fetcher, RequestParams},
    jsonrpc::{JsonRpcRequest, JsonRpcResponse, Method},
};

use super::schemas::PinReceipt;

/// Pins a strategy document and returns where it landed.
pub async fn pin_strategy(
    fetcher: &impl Fetcher,
    pin_url: &str,
    strategy: &impl Serialize,
) -> eyre::Result<PinReceipt> {
    let body = JsonRpcRequest::new(Method::Pin, strategy).to_value()?;

    let response =
        send_http_request::<JsonRpcResponse<PinReceipt>>(fetcher, RequestParams::new(pin_url, body))
            .await?;

    let receipt = response
        .into_result(Method::Pin)?
        .ok_or_else(|| eyre::eyre!("Pinning service returned no receipt"))?;

    tracing::info!(
        "Pinned strategy: {} ({})",
        receipt.uri(),
        receipt.provider.as_deref().unwrap_or("unknown provider")
    );

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::utils::fetch::mock::MockFetcher;

    #[tokio::test]
    async fn pins_document_as_params() {
        let fetcher = MockFetcher::new(|_| {
            Ok(json!({
                "jsonrpc": "2.0",
                "result": { "provider": "fleek", "ipfsHash": "bafkreistrategy" },
                "id": null
            }))
        });
        let strategy = json!({ "name": "boost", "params": { "eligibility": "incentive" } });

        let receipt = pin_strategy(&fetcher, "https://pin.test", &strategy)
            .await
            .unwrap();

        assert_eq!(receipt.uri(), "ipfs://bafkreistrategy");
        let request = &fetcher.requests()[0];
        assert_eq!(request.url, "https://pin.test");
        assert_eq!(request.body["method"], "pin");
        assert_eq!(request.body["params"], strategy);
    }

    #[tokio::test]
    async fn service_error_propagates() {
        let fetcher = MockFetcher::new(|_| {
            Ok(json!({ "error": { "code": 500, "message": "quota" }, "id": null }))
        });

        let err = pin_strategy(&fetcher, "https://pin.test", &json!({}))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "`pin` failed: quota (code 500)");
    }
}
