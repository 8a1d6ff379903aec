//! Query builders for the `/exchanges` endpoints.

use url::Url;

use super::common::{append_days, append_joined, Query, QueryCommon};

/// Query for `/exchanges`: pagination only.
#[derive(Default)]
pub struct ExchangesQuery {
    pub common: QueryCommon,
}

impl Query for ExchangesQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}

/// Query for `/exchanges/{id}/tickers`.
#[derive(Default)]
pub struct ExchangeTickersQuery {
    pub common: QueryCommon,
    /// Restrict to these coin IDs. Comma-joined on the wire.
    pub coin_ids: Vec<String>,
}

impl Query for ExchangeTickersQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_joined(&mut url, "coin_ids", &self.coin_ids);
        url
    }
}

impl ExchangeTickersQuery {
    pub fn with_coin_id(mut self, coin_id: &str) -> Self {
        self.coin_ids.push(coin_id.to_string());
        self
    }
    pub fn with_coin_ids(mut self, coin_ids: &[String]) -> Self {
        self.coin_ids.extend_from_slice(coin_ids);
        self
    }
}

/// Query for `/exchanges/{id}/volume_chart`. `days` defaults to `1`.
#[derive(Default)]
pub struct VolumeChartQuery {
    pub common: QueryCommon,
    /// Data window in days back from now.
    pub days: Option<i64>,
}

impl Query for VolumeChartQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_days(&mut url, &self.days);
        url
    }
}

impl VolumeChartQuery {
    pub fn with_days(mut self, days: i64) -> Self {
        self.days = Some(days);
        self
    }
}
