use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::utils::de::string_or_number;

#[derive(Serialize, Debug, Clone)]
pub struct ReceiptParams {
    #[serde(rename = "boostId")]
    pub boost_id: String,
    pub recipient: String,
    pub amount: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ClaimMessage {
    #[serde(rename = "boostId", deserialize_with = "string_or_number")]
    pub boost_id: String,
    pub recipient: String,
    #[serde(deserialize_with = "string_or_number")]
    pub amount: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ReceiptData {
    pub message: Option<ClaimMessage>,
    // eip-712 domain and types, kept opaque
    #[serde(flatten)]
    pub typed_data: HashMap<String, serde_json::Value>,
}

/// Signed authorization issued by the guard for one (boost, recipient, amount).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Receipt {
    pub sig: String,
    pub data: Option<ReceiptData>,
}

impl Receipt {
    pub fn message(&self) -> eyre::Result<&ClaimMessage> {
        self.data
            .as_ref()
            .ok_or_else(|| eyre::eyre!("Receipt data is missing"))?
            .message
            .as_ref()
            .ok_or_else(|| eyre::eyre!("Claim message is missing in the receipt data"))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReceiptStatus {
    /// No account was given when the boost was loaded.
    #[default]
    NotRequested,
    /// The guard answered without a signature.
    Declined,
    Issued(Receipt),
}

impl ReceiptStatus {
    pub fn issued(&self) -> Option<&Receipt> {
        match self {
            ReceiptStatus::Issued(receipt) => Some(receipt),
            _ => None,
        }
    }
}

impl From<Option<Receipt>> for ReceiptStatus {
    fn from(receipt: Option<Receipt>) -> Self {
        match receipt {
            Some(receipt) => ReceiptStatus::Issued(receipt),
            None => ReceiptStatus::Declined,
        }
    }
}
