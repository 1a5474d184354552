use dialoguer::{theme::ColorfulTheme, Input};

use crate::{
    boost::client::BoostClient,
    onchain::tx::WalletBridge,
    utils::{fetch::Fetcher, misc::pretty_spinner},
};

pub async fn deposit_into_boost<F: Fetcher, W: WalletBridge>(
    client: &BoostClient<F, W>,
) -> eyre::Result<()> {
    let boost_id: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Boost id")
        .interact_text()?;

    let amount: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Amount (smallest token unit)")
        .interact_text()?;

    let pb = pretty_spinner("Waiting for the deposit to be included");
    let receipt = client.deposit_tokens(&boost_id, &amount).await;
    pb.finish_and_clear();

    let receipt = receipt?;
    tracing::info!("Deposit confirmed: `{}`", receipt.transaction_hash);

    Ok(())
}
