use crate::{query::EventsQuery, types::Envelope, Client, Error};

impl Client {
    /// Lists crypto events (`/events`).
    pub async fn events(&self, query: &EventsQuery) -> Result<Envelope, Error> {
        self.get("/events", Some(query)).await
    }

    /// Lists the known event types (`/events/types`).
    pub async fn event_types(&self) -> Result<Envelope, Error> {
        self.get("/events/types", None).await
    }

    /// Lists the countries events are held in (`/events/countries`).
    pub async fn event_countries(&self) -> Result<Envelope, Error> {
        self.get("/events/countries", None).await
    }
}
