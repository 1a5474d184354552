use dialoguer::{theme::ColorfulTheme, Input};

use crate::{boost::client::BoostClient, onchain::tx::WalletBridge, utils::fetch::Fetcher};

pub async fn pin_strategy_file<F: Fetcher, W: WalletBridge>(
    client: &BoostClient<F, W>,
) -> eyre::Result<()> {
    let path: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Path to strategy JSON")
        .interact_text()?;

    let raw = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| eyre::eyre!("Failed to read `{}`: {}", path, e))?;

    let strategy: serde_json::Value = serde_json::from_str(&raw)?;

    client.pin_strategy(&strategy).await?;

    Ok(())
}
