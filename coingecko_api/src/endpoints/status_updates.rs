use crate::{query::GlobalStatusUpdatesQuery, types::Envelope, Client, Error};

impl Client {
    /// Fetches the global status-update feed (`/status_updates`), optionally
    /// filtered by category and project type.
    pub async fn status_updates(
        &self,
        query: &GlobalStatusUpdatesQuery,
    ) -> Result<Envelope, Error> {
        self.get("/status_updates", Some(query)).await
    }
}
