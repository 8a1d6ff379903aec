use crate::{
    query::{PriceQuery, TokenPriceQuery},
    types::Envelope,
    Client, Error,
};

use super::{platform_or_default, require_list};

impl Client {
    /// Fetches spot prices for one or more coins (`/simple/price`).
    /// `query.ids` must not be empty.
    pub async fn simple_price(&self, query: &PriceQuery) -> Result<Envelope, Error> {
        require_list("ids", &query.ids)?;
        self.get("/simple/price", Some(query)).await
    }

    /// Fetches token prices by contract address
    /// (`/simple/token_price/{asset_platform}`). An empty platform falls back
    /// to `ethereum`; `query.contract_addresses` must not be empty.
    pub async fn simple_token_price(
        &self,
        asset_platform: &str,
        query: &TokenPriceQuery,
    ) -> Result<Envelope, Error> {
        require_list("contract_addresses", &query.contract_addresses)?;
        let path = format!("/simple/token_price/{}", platform_or_default(asset_platform));
        self.get(&path, Some(query)).await
    }

    /// Lists the currencies usable as `vs_currency`
    /// (`/simple/supported_vs_currencies`).
    pub async fn simple_supported_vs_currencies(&self) -> Result<Envelope, Error> {
        self.get("/simple/supported_vs_currencies", None).await
    }
}
