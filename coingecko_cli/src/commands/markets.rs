use std::str::FromStr;

use anyhow::Result;
use clap::Args;
use coingecko_api::types::Order;
use coingecko_api::{Client, MarketsQuery, Query};

use crate::output::{print_data, OutputFormat};

#[derive(Args)]
pub struct MarketsArgs {
    /// Target currency
    #[arg(long, default_value = "usd")]
    pub vs_currency: String,

    /// Restrict to these coin IDs, comma-separated
    #[arg(long, value_delimiter = ',')]
    pub ids: Vec<String>,

    /// Sort order (e.g. market_cap_desc, volume_asc, price_desc)
    #[arg(long)]
    pub order: Option<String>,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: i64,

    /// Results per page
    #[arg(long, default_value = "100")]
    pub per_page: i64,
}

pub async fn run(args: &MarketsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = MarketsQuery::default()
        .with_vs_currency(&args.vs_currency)
        .with_ids(&args.ids)
        .with_page(args.page)
        .with_per_page(args.per_page);

    if let Some(order) = &args.order {
        let order = Order::from_str(order)
            .map_err(|_| anyhow::anyhow!("unknown sort order `{}`", order))?;
        query = query.with_order(order);
    }

    let resp = client.coins_markets(&query).await?;
    print_data(&resp, format)
}
