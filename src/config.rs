use std::{collections::HashMap, path::Path, str::FromStr, time::Duration};

use serde::Deserialize;

const CONFIG_FILE_PATH: &str = "data/config.toml";

#[derive(Deserialize, Debug, Clone)]
pub struct ChainConfig {
    #[serde(rename = "SUBGRAPH_URL")]
    pub subgraph_url: String,
    #[serde(rename = "EXPLORER_URL")]
    pub explorer_url: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(rename = "GUARD_URL")]
    pub guard_url: String,
    #[serde(rename = "PIN_URL")]
    pub pin_url: String,
    #[serde(rename = "CONTRACT_ADDRESS")]
    pub contract_address: String,
    #[serde(rename = "WALLET_RPC_URL")]
    pub wallet_rpc_url: String,
    #[serde(rename = "ACCOUNT", default)]
    pub account: String,
    #[serde(rename = "CONFIRM_TIMEOUT_SECS", default = "default_confirm_timeout")]
    pub confirm_timeout_secs: u64,
    #[serde(rename = "CONFIRM_POLL_SECS", default = "default_confirm_poll")]
    pub confirm_poll_secs: u64,
    #[serde(rename = "PROXY", default)]
    pub proxy: Option<String>,
    #[serde(rename = "CLAIM_AMOUNT", default)]
    pub claim_amount: Option<String>,
    #[serde(rename = "CHAINS", default)]
    pub chains: HashMap<String, ChainConfig>,
}

fn default_confirm_timeout() -> u64 {
    300
}

fn default_confirm_poll() -> u64 {
    4
}

impl Config {
    pub async fn read_default() -> eyre::Result<Self> {
        Self::read_from_path(CONFIG_FILE_PATH).await
    }

    pub async fn read_from_path<P: AsRef<Path>>(path: P) -> eyre::Result<Self> {
        let path = path.as_ref();
        let cfg_str = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| eyre::eyre!("Failed to read config `{}`: {}", path.display(), e))?;

        cfg_str.parse()
    }

    pub fn confirm_timeout(&self) -> Duration {
        Duration::from_secs(self.confirm_timeout_secs)
    }

    pub fn confirm_poll_interval(&self) -> Duration {
        Duration::from_secs(self.confirm_poll_secs)
    }
}

impl FromStr for Config {
    type Err = eyre::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s).map_err(|e| eyre::eyre!("Failed to parse config: {}", e))
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    r#"
GUARD_URL = "https://guard.test"
PIN_URL = "https://pin.test"
CONTRACT_ADDRESS = "0xaf8b6af86044821eed74e49057de62fb5c48e061"
WALLET_RPC_URL = "http://wallet.test"
ACCOUNT = "0xABC"

[CHAINS.1]
SUBGRAPH_URL = "https://mainnet.subgraph.test"
EXPLORER_URL = "https://etherscan.io"

[CHAINS.4]
SUBGRAPH_URL = "https://rinkeby.subgraph.test"
EXPLORER_URL = "https://rinkeby.etherscan.io"
"#
    .parse()
    .unwrap()
}
