use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::{
    boost::client::BoostClient,
    guard::typedefs::ReceiptStatus,
    onchain::tx::WalletBridge,
    utils::{fetch::Fetcher, misc::pretty_spinner},
};

pub async fn load_and_show<F: Fetcher, W: WalletBridge>(
    client: &BoostClient<F, W>,
    account: &str,
) -> eyre::Result<()> {
    let proposal_id: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Proposal id")
        .interact_text()?;

    let chain_ids = client.chains().chain_ids().collect::<Vec<_>>();
    if chain_ids.is_empty() {
        eyre::bail!("No chains configured");
    }

    let labels = chain_ids.iter().map(|id| id.to_string()).collect::<Vec<_>>();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Chain id:")
        .items(&labels)
        .default(0)
        .interact()?;
    let chain_id = chain_ids[selection];

    if account.is_empty() {
        tracing::warn!("No ACCOUNT configured, skipping claim receipts");
    }

    let pb = pretty_spinner("Loading boosts");
    let loaded = client.load_boosts(&proposal_id, chain_id, account).await;
    pb.finish_and_clear();
    loaded?;

    let boosts = client.boosts();
    if boosts.is_empty() {
        tracing::info!("No boosts for this proposal");
        return Ok(());
    }

    for boost in &boosts {
        tracing::info!(
            "Boost {} | {} {} ({} decimals) | balance {} | {} -> {}",
            boost.id,
            boost.token.name,
            boost.token.symbol,
            boost.token.decimals,
            boost.balance,
            boost.start,
            boost.end
        );
        tracing::info!("  strategy: {}", boost.strategy_uri);

        match &boost.receipt {
            ReceiptStatus::Issued(_) => tracing::info!("  receipt: ready to claim"),
            ReceiptStatus::Declined => tracing::info!("  receipt: not eligible right now"),
            ReceiptStatus::NotRequested => {}
        }

        if let Some(claim) = client.get_claim(boost, account) {
            match client.get_claim_tx_link(claim, chain_id) {
                Ok(link) => tracing::info!("  claimed {} | {}", claim.amount, link),
                Err(e) => tracing::info!("  claimed {} | {}", claim.amount, e),
            }
        }
    }

    Ok(())
}
