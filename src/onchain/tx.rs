use std::{future::Future, time::Duration};

use alloy::{
    network::{Ethereum, ReceiptResponse, TransactionBuilder},
    providers::{Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
};
use alloy_primitives::{Address, Bytes, B256};
use tokio::time;

use super::{pending::PendingTxCounter, typedefs::TxReceipt};

/// Signs and broadcasts transactions on behalf of the configured account.
pub trait WalletBridge: Send + Sync {
    fn send_transaction(
        &self,
        to: Address,
        data: Bytes,
    ) -> impl Future<Output = eyre::Result<B256>> + Send;

    fn wait_for_receipt(
        &self,
        tx_hash: B256,
    ) -> impl Future<Output = eyre::Result<TxReceipt>> + Send;
}

/// Wallet reached through an alloy provider. The endpoint signs for `from`
/// (a local signer such as Frame, or a node with an unlocked account).
pub struct ProviderWallet {
    provider: Box<dyn Provider<Ethereum>>,
    from: Option<Address>,
    timeout: Duration,
    poll_interval: Duration,
}

impl ProviderWallet {
    pub fn connect(
        rpc_url: &str,
        from: &str,
        timeout: Duration,
        poll_interval: Duration,
    ) -> eyre::Result<Self> {
        let url: reqwest::Url = rpc_url
            .parse()
            .map_err(|e| eyre::eyre!("Invalid wallet rpc url `{}`: {}", rpc_url, e))?;
        let provider = ProviderBuilder::new().connect_http(url);

        let from = match from.trim() {
            "" => None,
            address => Some(
                address
                    .parse::<Address>()
                    .map_err(|e| eyre::eyre!("Invalid ACCOUNT `{}`: {}", address, e))?,
            ),
        };

        Ok(Self {
            provider: Box::new(provider),
            from,
            timeout,
            poll_interval,
        })
    }

    async fn poll_receipt(&self, tx_hash: B256) -> eyre::Result<TxReceipt> {
        loop {
            if let Some(receipt) = self.provider.get_transaction_receipt(tx_hash).await? {
                return Ok(TxReceipt {
                    transaction_hash: receipt.transaction_hash(),
                    block_number: receipt.block_number(),
                    success: receipt.status(),
                });
            }

            time::sleep(self.poll_interval).await;
        }
    }
}

impl WalletBridge for ProviderWallet {
    async fn send_transaction(&self, to: Address, data: Bytes) -> eyre::Result<B256> {
        let from = self
            .from
            .ok_or_else(|| eyre::eyre!("No account configured to send transactions from"))?;

        let tx = TransactionRequest::default()
            .with_from(from)
            .with_to(to)
            .with_input(data);

        let pending = self.provider.send_transaction(tx).await?;

        Ok(*pending.tx_hash())
    }

    async fn wait_for_receipt(&self, tx_hash: B256) -> eyre::Result<TxReceipt> {
        match time::timeout(self.timeout, self.poll_receipt(tx_hash)).await {
            Ok(result) => result,
            Err(_) => eyre::bail!("Timeout exceeded while confirming transaction {}", tx_hash),
        }
    }
}

pub async fn send_and_confirm_tx(
    wallet: &impl WalletBridge,
    pending: &PendingTxCounter,
    to: Address,
    call_data: Vec<u8>,
) -> eyre::Result<TxReceipt> {
    let tx_hash = wallet.send_transaction(to, call_data.into()).await?;
    tracing::info!("Transaction sent: `{}`", tx_hash);

    let _pending = pending.acquire();
    let receipt = wallet.wait_for_receipt(tx_hash).await?;

    if !receipt.success {
        eyre::bail!("Transaction {} reverted", receipt.transaction_hash);
    }

    tracing::info!(
        "Transaction confirmed: `{}` in block {}",
        receipt.transaction_hash,
        receipt
            .block_number
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string())
    );

    Ok(receipt)
}
