//! Contract-address lookups under `/coins/{asset_platform}/contract`.

use crate::{
    query::{MarketChartQuery, MarketChartRangeQuery},
    types::Envelope,
    Client, Error,
};

use super::{platform_or_default, require, require_range};

impl Client {
    /// Fetches coin info from a token contract address
    /// (`/coins/{asset_platform}/contract/{contract_address}`). An empty
    /// platform falls back to `ethereum`.
    pub async fn contract_info(
        &self,
        asset_platform: &str,
        contract_address: &str,
    ) -> Result<Envelope, Error> {
        require("contract_address", contract_address)?;
        let path = format!(
            "/coins/{}/contract/{}",
            platform_or_default(asset_platform),
            contract_address
        );
        self.get(&path, None).await
    }

    /// Fetches chart series for a token contract
    /// (`…/contract/{contract_address}/market_chart`).
    pub async fn contract_market_chart(
        &self,
        asset_platform: &str,
        contract_address: &str,
        query: &MarketChartQuery,
    ) -> Result<Envelope, Error> {
        require("contract_address", contract_address)?;
        let path = format!(
            "/coins/{}/contract/{}/market_chart",
            platform_or_default(asset_platform),
            contract_address
        );
        self.get(&path, Some(query)).await
    }

    /// Fetches chart series for a token contract within a timestamp range
    /// (`…/contract/{contract_address}/market_chart/range`).
    pub async fn contract_market_chart_range(
        &self,
        asset_platform: &str,
        contract_address: &str,
        query: &MarketChartRangeQuery,
    ) -> Result<Envelope, Error> {
        require("contract_address", contract_address)?;
        require_range(query)?;
        let path = format!(
            "/coins/{}/contract/{}/market_chart/range",
            platform_or_default(asset_platform),
            contract_address
        );
        self.get(&path, Some(query)).await
    }
}
