use clap::{Parser, Subcommand};
use color_eyre::{Result, eyre::bail};

mod client;
mod commands;
mod constants;
mod domain;
mod logging;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::client::{WalletApi, WalletClient};
use crate::domain::WalletError;
use crate::state::{App, AppConfig};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// offerdesk - Terminal UI for peer-to-peer wallet offers
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    /// Wallet RPC URL, overriding the config file
    #[arg(long, global = true)]
    rpc_url: Option<String>,

    /// Decimals to assume until the wallet reports its unit
    #[arg(long, global = true)]
    decimals: Option<u8>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the wallet's offers and exit
    Offers,
    /// Import an offer into the wallet without starting the UI
    Import {
        /// The serialized offer
        offer: String,
    },
    /// Print the config file location
    Config {
        /// Write the effective settings, flags included, to the config file
        #[arg(long)]
        save: bool,
    },
}

impl Cli {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(rpc_url) = &self.rpc_url {
            config.rpc_url.clone_from(rpc_url);
        }
        if let Some(decimals) = self.decimals {
            config.fallback_decimals = decimals;
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Err(err) = logging::init() {
        eprintln!("logging disabled: {err}");
    }

    let config = cli.apply(AppConfig::load());

    match cli.command {
        Some(Commands::Offers) => print_offers(&config).await,
        Some(Commands::Import { offer }) => import_offer(&config, &offer).await,
        Some(Commands::Config { save }) => {
            if save {
                config.save()?;
                tracing::info!(rpc_url = %config.rpc_url, "config saved");
            }
            println!("{}", AppConfig::config_path()?.display());
            Ok(())
        }
        None => run_tui(config).await,
    }
}

async fn run_tui(config: AppConfig) -> Result<()> {
    let mut app = App::from_config(config)?;
    let mut terminal = tui::init()?;
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

fn client(config: &AppConfig) -> Result<WalletClient> {
    WalletClient::new(config.rpc_url.clone(), config.request_timeout())
        .map_err(WalletError::into_report)
}

async fn print_offers(config: &AppConfig) -> Result<()> {
    let offers = client(config)?
        .get_offers()
        .await
        .map_err(WalletError::into_report)?;

    if offers.is_empty() {
        println!("No offers yet");
    }
    for record in offers {
        println!(
            "{:<10} {}  {}",
            record.status.label(),
            record.creation_date,
            record.offer
        );
    }
    Ok(())
}

async fn import_offer(config: &AppConfig, offer: &str) -> Result<()> {
    let offer = offer.trim();
    if offer.is_empty() {
        bail!("offer is empty");
    }
    client(config)?
        .import_offer(offer.to_string())
        .await
        .map_err(WalletError::into_report)?;
    println!("Offer imported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from(["offerdesk", "--rpc-url", "http://wallet:1234", "--decimals", "6"]);
        let config = cli.apply(AppConfig::default());
        assert_eq!(config.rpc_url, "http://wallet:1234");
        assert_eq!(config.fallback_decimals, 6);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_import_subcommand() {
        let cli = Cli::parse_from(["offerdesk", "import", "offer1abc"]);
        assert!(matches!(&cli.command, Some(Commands::Import { offer }) if offer == "offer1abc"));
        assert_eq!(cli.apply(AppConfig::default()), AppConfig::default());
    }

    #[test]
    fn test_config_save_flag() {
        let cli = Cli::parse_from(["offerdesk", "config"]);
        assert!(matches!(cli.command, Some(Commands::Config { save: false })));

        let cli = Cli::parse_from(["offerdesk", "--rpc-url", "http://wallet:1234", "config", "--save"]);
        assert!(matches!(cli.command, Some(Commands::Config { save: true })));
        assert_eq!(cli.apply(AppConfig::default()).rpc_url, "http://wallet:1234");
    }
}
