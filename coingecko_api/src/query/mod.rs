mod common;
pub use self::common::{Query, QueryCommon};

mod simple;
pub use self::simple::{PriceQuery, TokenPriceQuery};

mod coins;
pub use self::coins::{
    CoinQuery, CoinsQuery, HistoryQuery, MarketChartQuery, MarketChartRangeQuery, MarketsQuery,
    TickersQuery,
};

mod exchanges;
pub use self::exchanges::{ExchangeTickersQuery, ExchangesQuery, VolumeChartQuery};

mod status_updates;
pub use self::status_updates::{GlobalStatusUpdatesQuery, StatusUpdatesQuery};

mod events;
pub use self::events::EventsQuery;
