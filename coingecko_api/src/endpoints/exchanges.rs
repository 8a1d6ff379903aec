use crate::{
    query::{ExchangeTickersQuery, ExchangesQuery, StatusUpdatesQuery, VolumeChartQuery},
    types::Envelope,
    Client, Error,
};

use super::require;

impl Client {
    /// Lists exchanges with volume data (`/exchanges`).
    pub async fn exchanges_all(&self, query: &ExchangesQuery) -> Result<Envelope, Error> {
        self.get("/exchanges", Some(query)).await
    }

    /// Lists all exchange IDs and names (`/exchanges/list`).
    pub async fn exchanges_list(&self) -> Result<Envelope, Error> {
        self.get("/exchanges/list", None).await
    }

    /// Fetches a single exchange (`/exchanges/{id}`).
    pub async fn exchange(&self, exchange_id: &str) -> Result<Envelope, Error> {
        require("exchange_id", exchange_id)?;
        self.get(format!("/exchanges/{}", exchange_id).as_str(), None)
            .await
    }

    /// Fetches an exchange's tickers (`/exchanges/{id}/tickers`).
    pub async fn exchange_tickers(
        &self,
        exchange_id: &str,
        query: &ExchangeTickersQuery,
    ) -> Result<Envelope, Error> {
        require("exchange_id", exchange_id)?;
        self.get(
            format!("/exchanges/{}/tickers", exchange_id).as_str(),
            Some(query),
        )
        .await
    }

    /// Fetches an exchange's status-update feed
    /// (`/exchanges/{id}/status_updates`).
    pub async fn exchange_status_updates(
        &self,
        exchange_id: &str,
        query: &StatusUpdatesQuery,
    ) -> Result<Envelope, Error> {
        require("exchange_id", exchange_id)?;
        self.get(
            format!("/exchanges/{}/status_updates", exchange_id).as_str(),
            Some(query),
        )
        .await
    }

    /// Fetches an exchange's volume history
    /// (`/exchanges/{id}/volume_chart`).
    pub async fn exchange_volume_chart(
        &self,
        exchange_id: &str,
        query: &VolumeChartQuery,
    ) -> Result<Envelope, Error> {
        require("exchange_id", exchange_id)?;
        self.get(
            format!("/exchanges/{}/volume_chart", exchange_id).as_str(),
            Some(query),
        )
        .await
    }
}
