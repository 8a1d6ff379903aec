use crate::{
    query::{
        CoinQuery, CoinsQuery, HistoryQuery, MarketChartQuery, MarketChartRangeQuery,
        MarketsQuery, StatusUpdatesQuery, TickersQuery,
    },
    types::Envelope,
    Client, Error,
};

use super::{require, require_range};

impl Client {
    /// Lists all coins with market data (`/coins`).
    pub async fn coins_all(&self, query: &CoinsQuery) -> Result<Envelope, Error> {
        self.get("/coins", Some(query)).await
    }

    /// Lists all coin IDs, names, and symbols (`/coins/list`).
    pub async fn coins_list(&self) -> Result<Envelope, Error> {
        self.get("/coins/list", None).await
    }

    /// Fetches paginated market data in a target currency (`/coins/markets`).
    pub async fn coins_markets(&self, query: &MarketsQuery) -> Result<Envelope, Error> {
        self.get("/coins/markets", Some(query)).await
    }

    /// Fetches a single coin's detail payload (`/coins/{id}`).
    pub async fn coin(&self, coin_id: &str, query: &CoinQuery) -> Result<Envelope, Error> {
        require("coin_id", coin_id)?;
        self.get(format!("/coins/{}", coin_id).as_str(), Some(query))
            .await
    }

    /// Fetches a coin's tickers across exchanges (`/coins/{id}/tickers`).
    pub async fn coin_tickers(
        &self,
        coin_id: &str,
        query: &TickersQuery,
    ) -> Result<Envelope, Error> {
        require("coin_id", coin_id)?;
        self.get(format!("/coins/{}/tickers", coin_id).as_str(), Some(query))
            .await
    }

    /// Fetches a historical snapshot of a coin (`/coins/{id}/history`).
    /// `query.date` is required, formatted `dd-mm-yyyy`.
    pub async fn coin_history(
        &self,
        coin_id: &str,
        query: &HistoryQuery,
    ) -> Result<Envelope, Error> {
        require("coin_id", coin_id)?;
        match &query.date {
            Some(date) if !date.trim().is_empty() => {}
            _ => return Err(Error::MissingParameter("date")),
        }
        self.get(format!("/coins/{}/history", coin_id).as_str(), Some(query))
            .await
    }

    /// Fetches price/market-cap/volume series for a coin
    /// (`/coins/{id}/market_chart`).
    pub async fn coin_market_chart(
        &self,
        coin_id: &str,
        query: &MarketChartQuery,
    ) -> Result<Envelope, Error> {
        require("coin_id", coin_id)?;
        self.get(
            format!("/coins/{}/market_chart", coin_id).as_str(),
            Some(query),
        )
        .await
    }

    /// Fetches chart series within a timestamp range
    /// (`/coins/{id}/market_chart/range`).
    pub async fn coin_market_chart_range(
        &self,
        coin_id: &str,
        query: &MarketChartRangeQuery,
    ) -> Result<Envelope, Error> {
        require("coin_id", coin_id)?;
        require_range(query)?;
        self.get(
            format!("/coins/{}/market_chart/range", coin_id).as_str(),
            Some(query),
        )
        .await
    }

    /// Fetches a coin's status-update feed (`/coins/{id}/status_updates`).
    pub async fn coin_status_updates(
        &self,
        coin_id: &str,
        query: &StatusUpdatesQuery,
    ) -> Result<Envelope, Error> {
        require("coin_id", coin_id)?;
        self.get(
            format!("/coins/{}/status_updates", coin_id).as_str(),
            Some(query),
        )
        .await
    }
}
