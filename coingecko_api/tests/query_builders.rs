use std::str::FromStr;

use coingecko_api::types::{EventType, Order, StatusUpdateCategory, StatusUpdateProjectType};
use coingecko_api::{
    CoinQuery, EventsQuery, GlobalStatusUpdatesQuery, MarketChartQuery, MarketChartRangeQuery,
    MarketsQuery, PriceQuery, Query, TickersQuery, TokenPriceQuery, VolumeChartQuery,
};
use url::Url;

fn base_url() -> Url {
    Url::parse("https://example.com").unwrap()
}

/// Decoded value of the first query pair with the given key.
fn query_value(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

#[test]
fn price_query_joins_ids_in_order() {
    let url = PriceQuery::default()
        .with_id("bitcoin")
        .with_id("ethereum")
        .add_to_url(&base_url());
    assert_eq!(query_value(&url, "ids").as_deref(), Some("bitcoin,ethereum"));
}

#[test]
fn price_query_defaults_vs_currencies_to_usd() {
    let url = PriceQuery::default().with_id("bitcoin").add_to_url(&base_url());
    assert_eq!(query_value(&url, "vs_currencies").as_deref(), Some("usd"));
}

#[test]
fn price_query_keeps_explicit_currencies() {
    let url = PriceQuery::default()
        .with_id("bitcoin")
        .with_vs_currency("eur")
        .with_vs_currency("btc")
        .add_to_url(&base_url());
    assert_eq!(query_value(&url, "vs_currencies").as_deref(), Some("eur,btc"));
}

#[test]
fn price_query_include_flags() {
    let url = PriceQuery::default()
        .with_id("bitcoin")
        .with_include_market_cap(true)
        .with_include_24hr_vol(true)
        .with_include_24hr_change(false)
        .with_include_last_updated_at(true)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("include_market_cap=true"));
    assert!(query.contains("include_24hr_vol=true"));
    assert!(query.contains("include_24hr_change=false"));
    assert!(query.contains("include_last_updated_at=true"));
}

#[test]
fn token_price_query_joins_addresses() {
    let url = TokenPriceQuery::default()
        .with_contract_address("0xaaa")
        .with_contract_address("0xbbb")
        .add_to_url(&base_url());
    assert_eq!(
        query_value(&url, "contract_addresses").as_deref(),
        Some("0xaaa,0xbbb")
    );
    assert_eq!(query_value(&url, "vs_currencies").as_deref(), Some("usd"));
}

#[test]
fn markets_query_defaults_currency() {
    let url = MarketsQuery::default().add_to_url(&base_url());
    assert_eq!(query_value(&url, "vs_currency").as_deref(), Some("usd"));
}

#[test]
fn markets_query_with_order_and_pagination() {
    let url = MarketsQuery::default()
        .with_vs_currency("eur")
        .with_order(Order::MarketCapDesc)
        .with_page(2)
        .with_per_page(50)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("vs_currency=eur"));
    assert!(query.contains("order=market_cap_desc"));
    assert!(query.contains("page=2"));
    assert!(query.contains("per_page=50"));
}

#[test]
fn markets_query_joins_price_change_windows() {
    let url = MarketsQuery::default()
        .with_price_change_percentage("1h")
        .with_price_change_percentage("24h")
        .with_price_change_percentage("7d")
        .add_to_url(&base_url());
    assert_eq!(
        query_value(&url, "price_change_percentage").as_deref(),
        Some("1h,24h,7d")
    );
}

#[test]
fn coin_query_detail_toggles() {
    let url = CoinQuery::default()
        .with_localization(false)
        .with_tickers(false)
        .with_market_data(true)
        .with_community_data(false)
        .with_developer_data(false)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("localization=false"));
    assert!(query.contains("tickers=false"));
    assert!(query.contains("market_data=true"));
    assert!(query.contains("community_data=false"));
    assert!(query.contains("developer_data=false"));
}

#[test]
fn tickers_query_joins_exchange_ids() {
    let url = TickersQuery::default()
        .with_exchange_id("binance")
        .with_exchange_id("kraken")
        .with_order(Order::TrustScoreDesc)
        .add_to_url(&base_url());
    assert_eq!(
        query_value(&url, "exchange_ids").as_deref(),
        Some("binance,kraken")
    );
    assert_eq!(query_value(&url, "order").as_deref(), Some("trust_score_desc"));
}

#[test]
fn market_chart_query_defaults() {
    let url = MarketChartQuery::default().add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("vs_currency=usd"));
    assert!(query.contains("days=1"));
}

#[test]
fn market_chart_query_explicit_window() {
    let url = MarketChartQuery::default()
        .with_vs_currency("eur")
        .with_days(90)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("vs_currency=eur"));
    assert!(query.contains("days=90"));
}

#[test]
fn market_chart_range_query_timestamps() {
    let url = MarketChartRangeQuery::default()
        .with_range(1_392_577_232, 1_422_577_232)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("from=1392577232"));
    assert!(query.contains("to=1422577232"));
    assert!(query.contains("vs_currency=usd"));
}

#[test]
fn volume_chart_query_defaults_days() {
    let url = VolumeChartQuery::default().add_to_url(&base_url());
    assert_eq!(query_value(&url, "days").as_deref(), Some("1"));
}

#[test]
fn events_query_filters() {
    let url = EventsQuery::default()
        .with_country_code("US")
        .with_event_type(EventType::Conference)
        .with_upcoming_events_only(true)
        .with_from_date("2019-01-01")
        .with_to_date("2019-12-31")
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("country_code=US"));
    assert!(query.contains("type=Conference"));
    assert!(query.contains("upcoming_events_only=true"));
    assert!(query.contains("from_date=2019-01-01"));
    assert!(query.contains("to_date=2019-12-31"));
}

#[test]
fn global_status_updates_query_filters() {
    let url = GlobalStatusUpdatesQuery::default()
        .with_category(StatusUpdateCategory::Milestone)
        .with_project_type(StatusUpdateProjectType::Coin)
        .with_page(3)
        .add_to_url(&base_url());
    let query = url.query().unwrap();
    assert!(query.contains("category=milestone"));
    assert!(query.contains("project_type=coin"));
    assert!(query.contains("page=3"));
}

#[test]
fn order_wire_strings_round_trip() {
    for order in [
        Order::GeckoDesc,
        Order::MarketCapAsc,
        Order::CoinNameDesc,
        Order::H24ChangeAsc,
        Order::TradeVolume24hBtcDesc,
    ] {
        assert_eq!(Order::from_str(order.as_str()), Ok(order));
    }
    assert!(Order::from_str("bogus").is_err());
}

#[test]
fn enum_wire_strings() {
    assert_eq!(StatusUpdateCategory::ExchangeListing.to_string(), "exchange_listing");
    assert_eq!(StatusUpdateProjectType::Market.to_string(), "market");
    assert_eq!(EventType::Meetup.to_string(), "Meetup");
    assert_eq!(EventType::from_str("conference"), Ok(EventType::Conference));
}
