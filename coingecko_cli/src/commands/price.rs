use anyhow::Result;
use clap::Args;
use coingecko_api::{Client, PriceQuery};

use crate::output::{print_data, OutputFormat};

#[derive(Args)]
pub struct PriceArgs {
    /// Coin IDs to price (e.g. bitcoin ethereum)
    #[arg(required = true)]
    pub ids: Vec<String>,

    /// Target currencies, comma-separated (defaults to usd)
    #[arg(long = "vs", value_delimiter = ',')]
    pub vs_currencies: Vec<String>,

    /// Include market cap in the payload
    #[arg(long)]
    pub market_cap: bool,

    /// Include 24h volume in the payload
    #[arg(long)]
    pub vol: bool,

    /// Include 24h change in the payload
    #[arg(long)]
    pub change: bool,
}

pub async fn run(args: &PriceArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = PriceQuery::default()
        .with_ids(&args.ids)
        .with_vs_currencies(&args.vs_currencies);

    if args.market_cap {
        query = query.with_include_market_cap(true);
    }
    if args.vol {
        query = query.with_include_24hr_vol(true);
    }
    if args.change {
        query = query.with_include_24hr_change(true);
    }

    let resp = client.simple_price(&query).await?;
    print_data(&resp, format)
}
