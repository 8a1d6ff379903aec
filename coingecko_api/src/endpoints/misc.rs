use crate::{types::Envelope, Client, Error};

impl Client {
    /// Checks API server status (`/ping`).
    pub async fn ping(&self) -> Result<Envelope, Error> {
        self.get("/ping", None).await
    }

    /// Fetches global cryptocurrency statistics (`/global`).
    pub async fn global(&self) -> Result<Envelope, Error> {
        self.get("/global", None).await
    }

    /// Fetches BTC-to-currency exchange rates (`/exchange_rates`).
    pub async fn exchange_rates(&self) -> Result<Envelope, Error> {
        self.get("/exchange_rates", None).await
    }
}
