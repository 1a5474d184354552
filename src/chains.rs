use std::collections::BTreeMap;

use crate::config::{ChainConfig, Config};

/// Immutable per-chain endpoints. Unlisted chains are rejected instead of
/// falling back to some default endpoint.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: BTreeMap<u64, ChainConfig>,
}

impl ChainRegistry {
    pub fn new(chains: BTreeMap<u64, ChainConfig>) -> Self {
        Self { chains }
    }

    pub fn from_config(config: &Config) -> eyre::Result<Self> {
        let chains = config
            .chains
            .iter()
            .map(|(id, chain)| {
                let id = id
                    .parse::<u64>()
                    .map_err(|_| eyre::eyre!("Invalid chain id in config: `{}`", id))?;
                Ok((id, chain.clone()))
            })
            .collect::<eyre::Result<BTreeMap<_, _>>>()?;

        Ok(Self::new(chains))
    }

    pub fn get(&self, chain_id: u64) -> eyre::Result<&ChainConfig> {
        self.chains
            .get(&chain_id)
            .ok_or_else(|| eyre::eyre!("Unsupported chain id: {}", chain_id))
    }

    pub fn chain_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.chains.keys().copied()
    }

    pub fn tx_link(&self, chain_id: u64, tx_hash: &str) -> eyre::Result<String> {
        let chain = self.get(chain_id)?;

        Ok(format!(
            "{}/tx/{}",
            chain.explorer_url.trim_end_matches('/'),
            tx_hash
        ))
    }
}
