//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields,
//! and serialization helpers.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
///
/// Serialization never mutates the builder; defaults (`usd` currency, 1-day
/// windows) are applied while writing the query string, so a builder can be
/// reused across calls.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the
    /// modified URL. List-valued parameters are joined with `,` into a single
    /// value; absent optional parameters are omitted entirely.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = Some(page);
        self
    }

    /// Sets the number of results per page.
    fn with_per_page(mut self, per_page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().per_page = Some(per_page);
        self
    }
}

/// Pagination fields shared by the list endpoints. Endpoints that do not
/// paginate simply leave both unset.
#[derive(Clone, Copy, Default)]
pub struct QueryCommon {
    /// Page number (1-indexed). `None` uses the API default.
    pub page: Option<i64>,
    /// Results per page. `None` uses the API default.
    pub per_page: Option<i64>,
}

impl QueryCommon {
    /// Appends the pagination parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        append_param(&mut url, "page", &self.page);
        append_param(&mut url, "per_page", &self.per_page);
        url
    }
}

/// Appends `key=value` when the value is present.
pub(crate) fn append_param<T: ToString>(url: &mut Url, key: &str, value: &Option<T>) {
    if let Some(value) = value {
        url.query_pairs_mut().append_pair(key, &value.to_string());
    }
}

/// Appends a list-coercible parameter as a single comma-joined value,
/// preserving the original order. Empty lists are omitted.
pub(crate) fn append_joined(url: &mut Url, key: &str, values: &[String]) {
    if !values.is_empty() {
        url.query_pairs_mut().append_pair(key, &values.join(","));
    }
}

/// Appends a currency parameter, defaulting to `usd` when unset or empty.
pub(crate) fn append_currency(url: &mut Url, key: &str, value: &Option<String>) {
    let currency = match value {
        Some(c) if !c.trim().is_empty() => c.as_str(),
        _ => "usd",
    };
    url.query_pairs_mut().append_pair(key, currency);
}

/// Appends a list of currencies, defaulting to `usd` when the list is empty.
pub(crate) fn append_currencies(url: &mut Url, key: &str, values: &[String]) {
    if values.is_empty() {
        url.query_pairs_mut().append_pair(key, "usd");
    } else {
        append_joined(url, key, values);
    }
}

/// Appends a day-window parameter, defaulting to `1` when unset.
pub(crate) fn append_days(url: &mut Url, value: &Option<i64>) {
    let days = value.unwrap_or(1);
    url.query_pairs_mut().append_pair("days", &days.to_string());
}
