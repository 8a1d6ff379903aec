mod client;
mod endpoints;
mod errors;
mod query;
pub mod types;

pub use self::client::{host_for, Client};
pub use self::errors::Error;
pub use self::query::{
    CoinQuery, CoinsQuery, EventsQuery, ExchangeTickersQuery, ExchangesQuery,
    GlobalStatusUpdatesQuery, HistoryQuery, MarketChartQuery, MarketChartRangeQuery, MarketsQuery,
    PriceQuery, Query, QueryCommon, StatusUpdatesQuery, TickersQuery, TokenPriceQuery,
    VolumeChartQuery,
};

/// Version segment of the upstream API, used in every request path.
pub const API_VERSION: &str = "3";

/// Hostname served to unauthenticated (free-tier) clients.
pub const PUBLIC_HOST: &str = "api.coingecko.com";

/// Hostname served to clients configured with a pro API key.
pub const PRO_HOST: &str = "pro-api.coingecko.com";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Advertised request ceiling of the public tier. Informational only; the
/// client performs no rate limiting of its own.
pub const REQUESTS_PER_SECOND: u32 = 10;
