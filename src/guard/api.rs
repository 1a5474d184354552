use serde_json::Value;

use crate::utils::{
    fetch::{send_http_request, Fetcher, RequestParams},
    jsonrpc::{JsonRpcRequest, JsonRpcResponse, Method},
};

use super::typedefs::{Receipt, ReceiptParams};

/// Asks the guard to sign a claim. `Ok(None)` means the guard declined for now.
///
/// Application error objects are declines. Reserved JSON-RPC codes, transport failures and
/// results with a non-string `sig` are errors.
pub async fn get_receipt(
    fetcher: &impl Fetcher,
    guard_url: &str,
    boost_id: &str,
    recipient: &str,
    amount: &str,
) -> eyre::Result<Option<Receipt>> {
    let params = ReceiptParams {
        boost_id: boost_id.to_string(),
        recipient: recipient.to_string(),
        amount: amount.to_string(),
    };

    let body = JsonRpcRequest::new(Method::GetReceipt, params).to_value()?;

    let response =
        send_http_request::<JsonRpcResponse<Value>>(fetcher, RequestParams::new(guard_url, body))
            .await?;

    if let Some(error) = response.error {
        if error.is_protocol_error() {
            eyre::bail!("Guard error for boost {}: {}", boost_id, error);
        }

        tracing::info!("Guard declined receipt for boost {}: {}", boost_id, error);
        return Ok(None);
    }

    let Some(result) = response.result else {
        return Ok(None);
    };

    let signed = match result.get("sig") {
        Some(Value::String(sig)) => !sig.is_empty(),
        Some(Value::Null) | None => false,
        Some(other) => eyre::bail!(
            "Malformed receipt for boost {}: sig is not a string ({})",
            boost_id,
            other
        ),
    };

    if !signed {
        tracing::debug!("No receipt for boost {} yet", boost_id);
        return Ok(None);
    }

    let receipt = serde_json::from_value::<Receipt>(result)
        .map_err(|e| eyre::eyre!("Malformed receipt for boost {}: {}", boost_id, e))?;

    Ok(Some(receipt))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::utils::fetch::mock::MockFetcher;

    const GUARD: &str = "https://guard.test";

    #[tokio::test]
    async fn returns_result_when_signed() {
        let fetcher = MockFetcher::new(|_| {
            Ok(json!({
                "jsonrpc": "2.0",
                "result": {
                    "sig": "0xsig",
                    "data": {
                        "domain": { "name": "boost" },
                        "message": { "boostId": 1, "recipient": "0xABC", "amount": "1000" }
                    }
                },
                "id": null
            }))
        });

        let receipt = get_receipt(&fetcher, GUARD, "1", "0xABC", "1000")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(receipt.sig, "0xsig");
        let message = receipt.message().unwrap();
        assert_eq!(message.boost_id, "1");
        assert_eq!(message.amount, "1000");
        assert!(receipt.data.unwrap().typed_data.contains_key("domain"));

        let request = &fetcher.requests()[0];
        assert_eq!(request.url, GUARD);
        assert_eq!(
            request.body,
            json!({
                "jsonrpc": "2.0",
                "method": "get_receipt",
                "params": { "boostId": "1", "recipient": "0xABC", "amount": "1000" },
                "id": null
            })
        );
    }

    #[tokio::test]
    async fn returns_none_without_signature() {
        for body in [
            json!({ "result": {} }),
            json!({ "result": { "sig": null } }),
            json!({ "result": { "sig": "" } }),
            json!({}),
            json!({ "error": { "code": 1, "message": "already claimed" } }),
            json!({ "error": { "code": -32000, "message": "boost has ended" } }),
        ] {
            let fetcher = MockFetcher::new(move |_| Ok(body.clone()));

            let receipt = get_receipt(&fetcher, GUARD, "1", "0xABC", "1").await.unwrap();

            assert!(receipt.is_none());
        }
    }

    #[tokio::test]
    async fn reserved_error_codes_are_errors() {
        for (code, message) in [
            (-32603, "Internal error"),
            (-32700, "Parse error"),
            (-32601, "Method not found"),
        ] {
            let fetcher = MockFetcher::new(move |_| {
                Ok(json!({ "error": { "code": code, "message": message } }))
            });

            let err = get_receipt(&fetcher, GUARD, "7", "0xABC", "1")
                .await
                .unwrap_err();

            assert_eq!(
                err.to_string(),
                format!("Guard error for boost 7: {} (code {})", message, code)
            );
        }
    }

    #[tokio::test]
    async fn non_string_signature_is_an_error() {
        for sig in [json!(123), json!({ "r": "0x1" }), json!(["0x1"])] {
            let fetcher = MockFetcher::new(move |_| Ok(json!({ "result": { "sig": sig.clone() } })));

            let err = get_receipt(&fetcher, GUARD, "1", "0xABC", "1")
                .await
                .unwrap_err();

            assert!(err
                .to_string()
                .starts_with("Malformed receipt for boost 1: sig is not a string"));
        }
    }

    #[tokio::test]
    async fn transport_failure_is_an_error() {
        let fetcher = MockFetcher::new(|_| Err(eyre::eyre!("connection reset")));

        let err = get_receipt(&fetcher, GUARD, "1", "0xABC", "1")
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "connection reset");
    }

    #[tokio::test]
    async fn non_object_body_is_an_error() {
        let fetcher = MockFetcher::new(|_| Ok(json!("<html>")));

        assert!(get_receipt(&fetcher, GUARD, "1", "0xABC", "1").await.is_err());
    }

    #[tokio::test]
    async fn signature_without_data_is_still_a_receipt() {
        let fetcher = MockFetcher::new(|_| Ok(json!({ "result": { "sig": "s" } })));

        let receipt = get_receipt(&fetcher, GUARD, "1", "0xABC", "1")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(receipt.sig, "s");
        assert!(receipt.message().is_err());
    }
}
