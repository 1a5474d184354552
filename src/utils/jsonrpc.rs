use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub enum Method {
    #[serde(rename = "get_receipt")]
    GetReceipt,
    #[serde(rename = "pin")]
    Pin,
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Method::GetReceipt => "get_receipt",
            Method::Pin => "pin",
        };

        write!(f, "{}", s)
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct JsonRpcRequest<P> {
    jsonrpc: &'static str,
    pub method: Method,
    pub params: P,
    id: Option<u64>,
}

impl<P: Serialize> JsonRpcRequest<P> {
    pub fn new(method: Method, params: P) -> Self {
        Self {
            jsonrpc: "2.0",
            method,
            params,
            id: None,
        }
    }

    pub fn to_value(&self) -> eyre::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[derive(Deserialize, Debug)]
pub struct JsonRpcResponse<R> {
    pub result: Option<R>,
    pub error: Option<JsonRpcError>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct JsonRpcError {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

impl JsonRpcError {
    /// Parse error (-32700) or one of the reserved request errors (-32600 to -32603).
    /// These mean the call itself failed, not that the service answered no.
    pub fn is_protocol_error(&self) -> bool {
        self.code == -32700 || (-32603..=-32600).contains(&self.code)
    }
}

impl Display for JsonRpcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl<R> JsonRpcResponse<R> {
    /// Result for calls where an error object means failure.
    pub fn into_result(self, method: Method) -> eyre::Result<Option<R>> {
        if let Some(error) = self.error {
            eyre::bail!("`{}` failed: {}", method, error);
        }

        Ok(self.result)
    }
}
