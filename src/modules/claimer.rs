use dialoguer::{theme::ColorfulTheme, Select};

use crate::{
    boost::client::BoostClient,
    onchain::tx::WalletBridge,
    utils::{fetch::Fetcher, misc::pretty_spinner},
};

pub async fn claim_boost<F: Fetcher, W: WalletBridge>(
    client: &BoostClient<F, W>,
) -> eyre::Result<()> {
    let claimable = client
        .boosts()
        .into_iter()
        .filter(|b| b.receipt.issued().is_some())
        .collect::<Vec<_>>();

    if claimable.is_empty() {
        tracing::warn!("Nothing to claim, load boosts with an ACCOUNT first");
        return Ok(());
    }

    let labels = claimable
        .iter()
        .map(|b| format!("Boost {} ({})", b.id, b.token.symbol))
        .collect::<Vec<_>>();

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Boost to claim from:")
        .items(&labels)
        .default(0)
        .interact()?;

    let pb = pretty_spinner("Waiting for the claim to be included");
    let receipt = client.claim_tokens(&claimable[selection]).await;
    pb.finish_and_clear();

    let receipt = receipt?;
    tracing::info!("Claim confirmed: `{}`", receipt.transaction_hash);

    Ok(())
}
