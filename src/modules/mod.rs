mod claimer;
mod depositor;
mod loader;
mod pinner;

use dialoguer::{theme::ColorfulTheme, Select};

use crate::{boost::client::BoostClient, config::Config, onchain::pending::PendingTxCounter};

use claimer::claim_boost;
use depositor::deposit_into_boost;
use loader::load_and_show;
use pinner::pin_strategy_file;

pub async fn menu() -> eyre::Result<()> {
    let config = Config::read_default().await?;
    let client = BoostClient::from_config(&config, PendingTxCounter::new())?;

    println!("boost-client | contract {}", config.contract_address);

    loop {
        let options = vec![
            "Load boosts for a proposal",
            "Deposit tokens into a boost",
            "Claim tokens from a boost",
            "Pin a strategy document",
            "Exit",
        ];

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Choice:")
            .items(&options)
            .default(0)
            .interact()?;

        let result = match selection {
            0 => load_and_show(&client, &config.account).await,
            1 => deposit_into_boost(&client).await,
            2 => claim_boost(&client).await,
            3 => pin_strategy_file(&client).await,
            4 => return Ok(()),
            _ => {
                tracing::error!("Invalid selection");
                Ok(())
            }
        };

        if let Err(e) = result {
            tracing::error!("{}", e);
        }
    }
}
