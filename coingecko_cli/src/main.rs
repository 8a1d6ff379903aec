mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use coingecko_api::Client;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "coingecko")]
#[command(about = "Query cryptocurrency market data from CoinGecko")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value = "pretty", global = true)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check API server status
    Ping,
    /// Spot prices for one or more coins
    Price(commands::price::PriceArgs),
    /// List coins with market data
    Markets(commands::markets::MarketsArgs),
    /// Look up a single coin
    Coin(commands::coin::CoinArgs),
    /// Global cryptocurrency statistics
    Global,
    /// BTC-to-currency exchange rates
    Rates,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("coingecko_api=warn".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let format = cli.output;

    // A pro key switches the client to the paid host automatically.
    let client = match std::env::var("COINGECKO_API_KEY") {
        Ok(key) if !key.is_empty() => Client::with_api_key(&key),
        _ => Client::new(),
    };

    match &cli.command {
        Commands::Ping => commands::misc::ping(&client, &format).await?,
        Commands::Price(args) => commands::price::run(args, &client, &format).await?,
        Commands::Markets(args) => commands::markets::run(args, &client, &format).await?,
        Commands::Coin(args) => commands::coin::run(args, &client, &format).await?,
        Commands::Global => commands::misc::global(&client, &format).await?,
        Commands::Rates => commands::misc::rates(&client, &format).await?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn unknown_output_format_is_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["coingecko", "--output", "yaml", "ping"]).is_err());
        assert!(Cli::try_parse_from(["coingecko", "--output", "compact", "ping"]).is_ok());
    }
}
