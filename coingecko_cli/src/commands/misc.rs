use anyhow::Result;
use coingecko_api::Client;

use crate::output::{print_data, OutputFormat};

pub async fn ping(client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.ping().await?;
    print_data(&resp, format)
}

pub async fn global(client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.global().await?;
    print_data(&resp, format)
}

pub async fn rates(client: &Client, format: &OutputFormat) -> Result<()> {
    let resp = client.exchange_rates().await?;
    print_data(&resp, format)
}
