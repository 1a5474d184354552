use std::future::Future;

use reqwest::{header::ACCEPT, Proxy};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Clone, Debug, PartialEq)]
pub struct RequestParams {
    pub url: String,
    pub body: Value,
    pub headers: Vec<(&'static str, &'static str)>,
}

impl RequestParams {
    pub fn new(url: impl Into<String>, body: Value) -> Self {
        Self {
            url: url.into(),
            body,
            headers: Vec::new(),
        }
    }

    pub fn with_header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }
}

/// Every outgoing JSON POST goes through this seam.
pub trait Fetcher: Send + Sync {
    fn post_json(&self, params: RequestParams) -> impl Future<Output = eyre::Result<Value>> + Send;
}

#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(proxy: Option<&str>) -> eyre::Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(proxy) = proxy {
            builder = builder.proxy(Proxy::all(proxy)?);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn post_json(&self, params: RequestParams) -> eyre::Result<Value> {
        let mut request = self
            .client
            .post(&params.url)
            .header(ACCEPT, "application/json")
            .json(&params.body);

        for (name, value) in &params.headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            eyre::bail!("Request to `{}` failed with {}: {}", params.url, status, text);
        }

        let body = response.json::<Value>().await?;

        Ok(body)
    }
}

pub async fn send_http_request<R: DeserializeOwned>(
    fetcher: &impl Fetcher,
    request_params: RequestParams,
) -> eyre::Result<R> {
    let url = request_params.url.clone();
    let body = fetcher.post_json(request_params).await?;

    serde_json::from_value(body)
        .map_err(|e| eyre::eyre!("Unexpected response body from `{}`: {}", url, e))
}
