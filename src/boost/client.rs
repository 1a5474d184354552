use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex, MutexGuard,
};

use alloy::sol_types::SolCall;
use alloy_primitives::Address;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    chains::ChainRegistry,
    config::Config,
    guard::{api::get_receipt, typedefs::Receipt},
    onchain::{
        abi::{claim_tokens_call, deposit_tokens_call},
        pending::PendingTxCounter,
        tx::{send_and_confirm_tx, ProviderWallet, WalletBridge},
        typedefs::{parse_address, TxReceipt},
    },
    pinning::{api::pin_strategy, schemas::PinReceipt},
    subgraph::{
        api::query_boost_subgraph,
        constants::BOOSTS_QUERY,
        schemas::{Boost, BoostsData, Claim, GraphQlResponse},
        typedefs::BoostsVariables,
    },
    utils::fetch::{Fetcher, HttpFetcher},
};

use super::typedefs::ClaimAmount;

/// Loads boosts for a proposal and submits deposits and claims against the boost contract.
///
/// `boosts`, `is_loading` and `pending_count` expose shared state that other tasks may poll.
pub struct BoostClient<F, W> {
    fetcher: Arc<F>,
    wallet: W,
    chains: ChainRegistry,
    guard_url: String,
    pin_url: String,
    contract_address: Address,
    claim_amount: ClaimAmount,
    pending: PendingTxCounter,
    boosts: Arc<Mutex<Vec<Boost>>>,
    loading: Arc<AtomicBool>,
    /// Bumped by every `load_boosts`; only the latest load may write `boosts`.
    generation: Arc<AtomicU64>,
}

impl BoostClient<HttpFetcher, ProviderWallet> {
    pub fn from_config(config: &Config, pending: PendingTxCounter) -> eyre::Result<Self> {
        let fetcher = Arc::new(HttpFetcher::new(config.proxy.as_deref())?);

        let wallet = ProviderWallet::connect(
            &config.wallet_rpc_url,
            &config.account,
            config.confirm_timeout(),
            config.confirm_poll_interval(),
        )?;

        Self::new(config, fetcher, wallet, pending)
    }
}

impl<F: Fetcher, W: WalletBridge> BoostClient<F, W> {
    pub fn new(
        config: &Config,
        fetcher: Arc<F>,
        wallet: W,
        pending: PendingTxCounter,
    ) -> eyre::Result<Self> {
        Ok(Self {
            fetcher,
            wallet,
            chains: ChainRegistry::from_config(config)?,
            guard_url: config.guard_url.clone(),
            pin_url: config.pin_url.clone(),
            contract_address: parse_address(&config.contract_address)?,
            claim_amount: ClaimAmount::from_config(config.claim_amount.as_deref()),
            pending,
            boosts: Arc::new(Mutex::new(Vec::new())),
            // nothing has been loaded yet
            loading: Arc::new(AtomicBool::new(true)),
            generation: Arc::new(AtomicU64::new(0)),
        })
    }

    pub fn boosts(&self) -> Vec<Boost> {
        self.lock_boosts().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.get()
    }

    pub fn chains(&self) -> &ChainRegistry {
        &self.chains
    }

    fn lock_boosts(&self) -> MutexGuard<'_, Vec<Boost>> {
        self.boosts.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }

    /// Replaces the boost list with the subgraph's boosts tagged `proposal_id`. With a
    /// non-empty `account`, asks the guard for a receipt per boost, one at a time.
    ///
    /// On error the loading flag stays set. A load overtaken by a newer one stops writing
    /// and returns `Ok(())`.
    pub async fn load_boosts(
        &self,
        proposal_id: &str,
        chain_id: u64,
        account: &str,
    ) -> eyre::Result<()> {
        let generation = {
            let _boosts = self.lock_boosts();
            self.loading.store(true, Ordering::SeqCst);
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let boosts = self
            .query_boost_subgraph::<BoostsData, _>(
                BOOSTS_QUERY,
                BoostsVariables::new(proposal_id),
                chain_id,
            )
            .await?
            .into_boosts()?;
        tracing::info!("Loaded {} boosts for `{}`", boosts.len(), proposal_id);

        let requests = boosts
            .iter()
            .map(|b| (b.id.clone(), self.claim_amount.for_token(&b.token)))
            .collect::<Vec<_>>();

        {
            let mut current = self.lock_boosts();
            if !self.is_current(generation) {
                tracing::debug!("Load for `{}` superseded, dropping results", proposal_id);
                return Ok(());
            }
            *current = boosts;
        }

        if !account.is_empty() {
            for (index, (boost_id, amount)) in requests.into_iter().enumerate() {
                let receipt = self.request_claim_receipt(&boost_id, account, &amount).await?;

                let mut current = self.lock_boosts();
                if !self.is_current(generation) {
                    tracing::debug!("Load for `{}` superseded, dropping receipts", proposal_id);
                    return Ok(());
                }
                match current.get_mut(index) {
                    Some(boost) if boost.id == boost_id => boost.receipt = receipt.into(),
                    _ => eyre::bail!("Boost list changed while attaching receipt for {}", boost_id),
                }
            }
        }

        let _boosts = self.lock_boosts();
        if self.is_current(generation) {
            self.loading.store(false, Ordering::SeqCst);
        }

        Ok(())
    }

    pub async fn request_claim_receipt(
        &self,
        boost_id: &str,
        recipient: &str,
        amount: &str,
    ) -> eyre::Result<Option<Receipt>> {
        get_receipt(
            self.fetcher.as_ref(),
            &self.guard_url,
            boost_id,
            recipient,
            amount,
        )
        .await
    }

    pub async fn deposit_tokens(&self, boost_id: &str, amount: &str) -> eyre::Result<TxReceipt> {
        let call = deposit_tokens_call(boost_id, amount)?;

        tracing::info!("Depositing {} into boost {}", amount, boost_id);

        send_and_confirm_tx(
            &self.wallet,
            &self.pending,
            self.contract_address,
            call.abi_encode(),
        )
        .await
    }

    /// Submits the receipt attached to `boost` by the last `load_boosts`.
    pub async fn claim_tokens(&self, boost: &Boost) -> eyre::Result<TxReceipt> {
        let receipt = boost
            .receipt
            .issued()
            .ok_or_else(|| eyre::eyre!("Boost {} has no claim receipt", boost.id))?;
        let message = receipt.message()?;

        let call = claim_tokens_call(message, &receipt.sig)?;

        tracing::info!("Claiming {} from boost {}", message.amount, message.boost_id);

        send_and_confirm_tx(
            &self.wallet,
            &self.pending,
            self.contract_address,
            call.abi_encode(),
        )
        .await
    }

    pub fn get_claim<'a>(&self, boost: &'a Boost, account: &str) -> Option<&'a Claim> {
        boost.claim_for(account)
    }

    pub fn get_claim_tx_link(&self, claim: &Claim, chain_id: u64) -> eyre::Result<String> {
        self.chains.tx_link(chain_id, claim.tx_hash())
    }

    pub async fn pin_strategy(&self, strategy: &impl Serialize) -> eyre::Result<PinReceipt> {
        pin_strategy(self.fetcher.as_ref(), &self.pin_url, strategy).await
    }

    pub async fn query_boost_subgraph<T, V>(
        &self,
        query: &str,
        variables: V,
        chain_id: u64,
    ) -> eyre::Result<GraphQlResponse<T>>
    where
        T: DeserializeOwned,
        V: Serialize,
    {
        query_boost_subgraph(self.fetcher.as_ref(), &self.chains, query, variables, chain_id).await
    }
}
