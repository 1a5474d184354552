use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct PinReceipt {
    pub provider: Option<String>,
    #[serde(rename = "ipfsHash")]
    pub ipfs_hash: String,
}

impl PinReceipt {
    pub fn uri(&self) -> String {
        format!("ipfs://{}", self.ipfs_hash)
    }
}
