//! Query builder for `/events`.

use url::Url;

use crate::types::EventType;

use super::common::{append_param, Query, QueryCommon};

/// Query for `/events`: crypto conferences, meetups, and other events.
#[derive(Default)]
pub struct EventsQuery {
    pub common: QueryCommon,
    /// Two-letter country code, e.g. `US`.
    pub country_code: Option<String>,
    pub event_type: Option<EventType>,
    pub upcoming_events_only: Option<bool>,
    /// Range start, `yyyy-mm-dd`.
    pub from_date: Option<String>,
    /// Range end, `yyyy-mm-dd`.
    pub to_date: Option<String>,
}

impl Query for EventsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_param(&mut url, "country_code", &self.country_code);
        append_param(&mut url, "type", &self.event_type);
        append_param(&mut url, "upcoming_events_only", &self.upcoming_events_only);
        append_param(&mut url, "from_date", &self.from_date);
        append_param(&mut url, "to_date", &self.to_date);
        url
    }
}

impl EventsQuery {
    pub fn with_country_code(mut self, country_code: &str) -> Self {
        self.country_code = Some(country_code.to_string());
        self
    }
    pub fn with_event_type(mut self, event_type: EventType) -> Self {
        self.event_type = Some(event_type);
        self
    }
    pub fn with_upcoming_events_only(mut self, upcoming_only: bool) -> Self {
        self.upcoming_events_only = Some(upcoming_only);
        self
    }
    pub fn with_from_date(mut self, from_date: &str) -> Self {
        self.from_date = Some(from_date.to_string());
        self
    }
    pub fn with_to_date(mut self, to_date: &str) -> Self {
        self.to_date = Some(to_date.to_string());
        self
    }
}
