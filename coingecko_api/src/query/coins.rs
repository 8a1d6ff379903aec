//! Query builders for the `/coins` endpoints.

use url::Url;

use crate::types::Order;

use super::common::{
    append_currency, append_days, append_joined, append_param, Query, QueryCommon,
};

/// Query for `/coins`: the full coin listing with market data.
#[derive(Default)]
pub struct CoinsQuery {
    pub common: QueryCommon,
    pub order: Option<Order>,
    pub localization: Option<bool>,
    pub sparkline: Option<bool>,
}

impl Query for CoinsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_param(&mut url, "order", &self.order);
        append_param(&mut url, "localization", &self.localization);
        append_param(&mut url, "sparkline", &self.sparkline);
        url
    }
}

impl CoinsQuery {
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }
    pub fn with_localization(mut self, localization: bool) -> Self {
        self.localization = Some(localization);
        self
    }
    pub fn with_sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = Some(sparkline);
        self
    }
}

/// Query for `/coins/markets`: paginated market data in a target currency.
///
/// `vs_currency` defaults to `usd` when unset.
#[derive(Default)]
pub struct MarketsQuery {
    pub common: QueryCommon,
    pub vs_currency: Option<String>,
    /// Restrict to these coin IDs. Comma-joined on the wire.
    pub ids: Vec<String>,
    pub order: Option<Order>,
    pub sparkline: Option<bool>,
    /// Price-change windows to include, e.g. `1h`, `24h`, `7d`. Comma-joined.
    pub price_change_percentage: Vec<String>,
}

impl Query for MarketsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_currency(&mut url, "vs_currency", &self.vs_currency);
        append_joined(&mut url, "ids", &self.ids);
        append_param(&mut url, "order", &self.order);
        append_param(&mut url, "sparkline", &self.sparkline);
        append_joined(
            &mut url,
            "price_change_percentage",
            &self.price_change_percentage,
        );
        url
    }
}

impl MarketsQuery {
    pub fn with_vs_currency(mut self, currency: &str) -> Self {
        self.vs_currency = Some(currency.to_string());
        self
    }
    pub fn with_id(mut self, id: &str) -> Self {
        self.ids.push(id.to_string());
        self
    }
    pub fn with_ids(mut self, ids: &[String]) -> Self {
        self.ids.extend_from_slice(ids);
        self
    }
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }
    pub fn with_sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = Some(sparkline);
        self
    }
    pub fn with_price_change_percentage(mut self, window: &str) -> Self {
        self.price_change_percentage.push(window.to_string());
        self
    }
}

/// Query for `/coins/{id}`: toggles for the per-coin detail payload.
#[derive(Default)]
pub struct CoinQuery {
    pub common: QueryCommon,
    pub localization: Option<bool>,
    pub tickers: Option<bool>,
    pub market_data: Option<bool>,
    pub community_data: Option<bool>,
    pub developer_data: Option<bool>,
    pub sparkline: Option<bool>,
}

impl Query for CoinQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_param(&mut url, "localization", &self.localization);
        append_param(&mut url, "tickers", &self.tickers);
        append_param(&mut url, "market_data", &self.market_data);
        append_param(&mut url, "community_data", &self.community_data);
        append_param(&mut url, "developer_data", &self.developer_data);
        append_param(&mut url, "sparkline", &self.sparkline);
        url
    }
}

impl CoinQuery {
    pub fn with_localization(mut self, localization: bool) -> Self {
        self.localization = Some(localization);
        self
    }
    pub fn with_tickers(mut self, tickers: bool) -> Self {
        self.tickers = Some(tickers);
        self
    }
    pub fn with_market_data(mut self, market_data: bool) -> Self {
        self.market_data = Some(market_data);
        self
    }
    pub fn with_community_data(mut self, community_data: bool) -> Self {
        self.community_data = Some(community_data);
        self
    }
    pub fn with_developer_data(mut self, developer_data: bool) -> Self {
        self.developer_data = Some(developer_data);
        self
    }
    pub fn with_sparkline(mut self, sparkline: bool) -> Self {
        self.sparkline = Some(sparkline);
        self
    }
}

/// Query for `/coins/{id}/tickers`.
#[derive(Default)]
pub struct TickersQuery {
    pub common: QueryCommon,
    /// Restrict to these exchange IDs. Comma-joined on the wire.
    pub exchange_ids: Vec<String>,
    pub include_exchange_logo: Option<bool>,
    pub order: Option<Order>,
}

impl Query for TickersQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_joined(&mut url, "exchange_ids", &self.exchange_ids);
        append_param(&mut url, "include_exchange_logo", &self.include_exchange_logo);
        append_param(&mut url, "order", &self.order);
        url
    }
}

impl TickersQuery {
    pub fn with_exchange_id(mut self, exchange_id: &str) -> Self {
        self.exchange_ids.push(exchange_id.to_string());
        self
    }
    pub fn with_exchange_ids(mut self, exchange_ids: &[String]) -> Self {
        self.exchange_ids.extend_from_slice(exchange_ids);
        self
    }
    pub fn with_include_exchange_logo(mut self, include: bool) -> Self {
        self.include_exchange_logo = Some(include);
        self
    }
    pub fn with_order(mut self, order: Order) -> Self {
        self.order = Some(order);
        self
    }
}

/// Query for `/coins/{id}/history`: a snapshot on a given date.
///
/// `date` is required, formatted `dd-mm-yyyy`.
#[derive(Default)]
pub struct HistoryQuery {
    pub common: QueryCommon,
    /// Snapshot date, `dd-mm-yyyy`.
    pub date: Option<String>,
    pub localization: Option<bool>,
}

impl Query for HistoryQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_param(&mut url, "date", &self.date);
        append_param(&mut url, "localization", &self.localization);
        url
    }
}

impl HistoryQuery {
    pub fn with_date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self
    }
    pub fn with_localization(mut self, localization: bool) -> Self {
        self.localization = Some(localization);
        self
    }
}

/// Query for the market-chart endpoints (per coin and per contract).
///
/// `vs_currency` defaults to `usd`, `days` defaults to `1`.
#[derive(Default)]
pub struct MarketChartQuery {
    pub common: QueryCommon,
    pub vs_currency: Option<String>,
    /// Data window in days back from now.
    pub days: Option<i64>,
}

impl Query for MarketChartQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_currency(&mut url, "vs_currency", &self.vs_currency);
        append_days(&mut url, &self.days);
        url
    }
}

impl MarketChartQuery {
    pub fn with_vs_currency(mut self, currency: &str) -> Self {
        self.vs_currency = Some(currency.to_string());
        self
    }
    pub fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }
}

/// Query for the ranged market-chart endpoints.
///
/// `from` and `to` are required UNIX timestamps; `vs_currency` defaults to
/// `usd`.
#[derive(Default)]
pub struct MarketChartRangeQuery {
    pub common: QueryCommon,
    pub vs_currency: Option<String>,
    /// Range start, UNIX timestamp (seconds).
    pub from: Option<i64>,
    /// Range end, UNIX timestamp (seconds).
    pub to: Option<i64>,
}

impl Query for MarketChartRangeQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_currency(&mut url, "vs_currency", &self.vs_currency);
        append_param(&mut url, "from", &self.from);
        append_param(&mut url, "to", &self.to);
        url
    }
}

impl MarketChartRangeQuery {
    pub fn with_vs_currency(mut self, currency: &str) -> Self {
        self.vs_currency = Some(currency.to_string());
        self
    }
    pub fn with_range(mut self, from: i64, to: i64) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }
}
