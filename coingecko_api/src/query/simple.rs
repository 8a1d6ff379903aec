//! Query builders for the `/simple` endpoints.

use url::Url;

use super::common::{
    append_currencies, append_joined, append_param, Query, QueryCommon,
};

/// Query for `/simple/price`: spot prices for one or more coins.
///
/// `ids` is required; `vs_currencies` defaults to `usd` when left empty.
#[derive(Default)]
pub struct PriceQuery {
    pub common: QueryCommon,
    /// Coin IDs to price, e.g. `bitcoin`. Comma-joined on the wire.
    pub ids: Vec<String>,
    /// Target currencies, e.g. `usd`, `eur`. Comma-joined on the wire.
    pub vs_currencies: Vec<String>,
    pub include_market_cap: Option<bool>,
    pub include_24hr_vol: Option<bool>,
    pub include_24hr_change: Option<bool>,
    pub include_last_updated_at: Option<bool>,
}

impl Query for PriceQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_joined(&mut url, "ids", &self.ids);
        append_currencies(&mut url, "vs_currencies", &self.vs_currencies);
        append_param(&mut url, "include_market_cap", &self.include_market_cap);
        append_param(&mut url, "include_24hr_vol", &self.include_24hr_vol);
        append_param(&mut url, "include_24hr_change", &self.include_24hr_change);
        append_param(
            &mut url,
            "include_last_updated_at",
            &self.include_last_updated_at,
        );
        url
    }
}

impl PriceQuery {
    pub fn with_id(mut self, id: &str) -> Self {
        self.ids.push(id.to_string());
        self
    }
    pub fn with_ids(mut self, ids: &[String]) -> Self {
        self.ids.extend_from_slice(ids);
        self
    }
    pub fn with_vs_currency(mut self, currency: &str) -> Self {
        self.vs_currencies.push(currency.to_string());
        self
    }
    pub fn with_vs_currencies(mut self, currencies: &[String]) -> Self {
        self.vs_currencies.extend_from_slice(currencies);
        self
    }
    pub fn with_include_market_cap(mut self, include: bool) -> Self {
        self.include_market_cap = Some(include);
        self
    }
    pub fn with_include_24hr_vol(mut self, include: bool) -> Self {
        self.include_24hr_vol = Some(include);
        self
    }
    pub fn with_include_24hr_change(mut self, include: bool) -> Self {
        self.include_24hr_change = Some(include);
        self
    }
    pub fn with_include_last_updated_at(mut self, include: bool) -> Self {
        self.include_last_updated_at = Some(include);
        self
    }
}

/// Query for `/simple/token_price/{asset_platform}`: prices by contract
/// address.
///
/// `contract_addresses` is required; `vs_currencies` defaults to `usd`.
#[derive(Default)]
pub struct TokenPriceQuery {
    pub common: QueryCommon,
    /// Token contract addresses. Comma-joined on the wire.
    pub contract_addresses: Vec<String>,
    /// Target currencies. Comma-joined on the wire.
    pub vs_currencies: Vec<String>,
    pub include_market_cap: Option<bool>,
    pub include_24hr_vol: Option<bool>,
    pub include_24hr_change: Option<bool>,
    pub include_last_updated_at: Option<bool>,
}

impl Query for TokenPriceQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_joined(&mut url, "contract_addresses", &self.contract_addresses);
        append_currencies(&mut url, "vs_currencies", &self.vs_currencies);
        append_param(&mut url, "include_market_cap", &self.include_market_cap);
        append_param(&mut url, "include_24hr_vol", &self.include_24hr_vol);
        append_param(&mut url, "include_24hr_change", &self.include_24hr_change);
        append_param(
            &mut url,
            "include_last_updated_at",
            &self.include_last_updated_at,
        );
        url
    }
}

impl TokenPriceQuery {
    pub fn with_contract_address(mut self, address: &str) -> Self {
        self.contract_addresses.push(address.to_string());
        self
    }
    pub fn with_contract_addresses(mut self, addresses: &[String]) -> Self {
        self.contract_addresses.extend_from_slice(addresses);
        self
    }
    pub fn with_vs_currency(mut self, currency: &str) -> Self {
        self.vs_currencies.push(currency.to_string());
        self
    }
    pub fn with_vs_currencies(mut self, currencies: &[String]) -> Self {
        self.vs_currencies.extend_from_slice(currencies);
        self
    }
    pub fn with_include_market_cap(mut self, include: bool) -> Self {
        self.include_market_cap = Some(include);
        self
    }
    pub fn with_include_24hr_vol(mut self, include: bool) -> Self {
        self.include_24hr_vol = Some(include);
        self
    }
    pub fn with_include_24hr_change(mut self, include: bool) -> Self {
        self.include_24hr_change = Some(include);
        self
    }
    pub fn with_include_last_updated_at(mut self, include: bool) -> Self {
        self.include_last_updated_at = Some(include);
        self
    }
}
