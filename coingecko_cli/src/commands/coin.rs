use anyhow::Result;
use clap::Args;
use coingecko_api::{Client, CoinQuery, MarketChartQuery};

use crate::output::{print_data, OutputFormat};

#[derive(Args)]
pub struct CoinArgs {
    /// Coin ID (e.g. bitcoin)
    pub id: String,

    /// Include exchange tickers in the payload
    #[arg(long)]
    pub tickers: bool,

    /// Fetch a price chart over this many days instead of the detail payload
    #[arg(long)]
    pub chart_days: Option<i64>,

    /// Chart currency (only with --chart-days)
    #[arg(long, default_value = "usd")]
    pub vs_currency: String,
}

pub async fn run(args: &CoinArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = match args.chart_days {
        Some(days) => {
            let query = MarketChartQuery::default()
                .with_vs_currency(&args.vs_currency)
                .with_days(days);
            client.coin_market_chart(&args.id, &query).await?
        }
        None => {
            let query = CoinQuery::default()
                .with_localization(false)
                .with_tickers(args.tickers);
            client.coin(&args.id, &query).await?
        }
    };
    print_data(&resp, format)
}
