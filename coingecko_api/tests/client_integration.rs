use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use coingecko_api::{Client, Error, HistoryQuery, MarketsQuery, PriceQuery};
use serde_json::json;
use tracing::{span, Event, Level, Metadata, Subscriber};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Counts WARN events emitted on the current thread while installed as the
/// default subscriber.
#[derive(Clone)]
struct WarnCounter(Arc<AtomicUsize>);

impl Subscriber for WarnCounter {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        *metadata.level() == Level::WARN
    }
    fn new_span(&self, _: &span::Attributes<'_>) -> span::Id {
        span::Id::from_u64(1)
    }
    fn record(&self, _: &span::Id, _: &span::Record<'_>) {}
    fn record_follows_from(&self, _: &span::Id, _: &span::Id) {}
    fn event(&self, _: &Event<'_>) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
    fn enter(&self, _: &span::Id) {}
    fn exit(&self, _: &span::Id) {}
}

#[tokio::test]
async fn ping_resolves_success_envelope() {
    let mock_server = MockServer::start().await;
    let body = json!({ "gecko_says": "(V3) To the Moon!" });

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.ping().await.unwrap();
    assert!(resp.success);
    assert_eq!(resp.code, 200);
    assert_eq!(resp.message, "OK");
    assert_eq!(resp.data, body);
}

#[tokio::test]
async fn no_key_means_no_key_parameter() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .and(query_param_is_missing("x_cg_pro_api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    assert!(client.ping().await.is_ok());
}

#[tokio::test]
async fn configured_key_is_sent_in_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .and(query_param("x_cg_pro_api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url_and_key(&mock_server.uri(), "test-key");
    assert!(client.ping().await.is_ok());
}

#[tokio::test]
async fn simple_price_defaults_currency_to_usd() {
    let mock_server = MockServer::start().await;
    let body = json!({ "bitcoin": { "usd": 170.0 } });

    Mock::given(method("GET"))
        .and(path("/api/v3/simple/price"))
        .and(query_param("ids", "bitcoin"))
        .and(query_param("vs_currencies", "usd"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = PriceQuery::default().with_id("bitcoin");
    let resp = client.simple_price(&query).await.unwrap();
    assert_eq!(resp.data, body);
}

#[tokio::test]
async fn simple_price_requires_ids_before_any_request() {
    // No mocks mounted: reaching the server would fail the parse instead.
    let mock_server = MockServer::start().await;
    let client = Client::with_base_url(&mock_server.uri());

    let result = client.simple_price(&PriceQuery::default()).await;
    assert!(matches!(result, Err(Error::MissingParameter("ids"))));
}

#[tokio::test]
async fn coin_history_requires_date() {
    let mock_server = MockServer::start().await;
    let client = Client::with_base_url(&mock_server.uri());

    let result = client.coin_history("bitcoin", &HistoryQuery::default()).await;
    assert!(matches!(result, Err(Error::MissingParameter("date"))));
}

#[tokio::test]
async fn non_success_status_resolves_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/coins/markets"))
        .respond_with(
            ResponseTemplate::new(429).set_body_json(json!({ "error": "rate limited" })),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.coins_markets(&MarketsQuery::default()).await.unwrap();
    assert!(!resp.success);
    assert_eq!(resp.code, 429);
    assert_eq!(resp.message, "Too Many Requests");
    assert_eq!(resp.data, json!({ "error": "rate limited" }));
}

#[tokio::test]
async fn payload_round_trips_unmodified() {
    let mock_server = MockServer::start().await;
    let body = json!({
        "prices": [[1_392_577_232_000_i64, 122.1], [1_392_577_532_000_i64, 123.9]],
        "market_caps": [[1_392_577_232_000_i64, 1_500_000_000.0]],
        "total_volumes": []
    });

    Mock::given(method("GET"))
        .and(path("/api/v3/coins/bitcoin/market_chart"))
        .and(query_param("vs_currency", "usd"))
        .and(query_param("days", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client
        .coin_market_chart("bitcoin", &Default::default())
        .await
        .unwrap();
    assert_eq!(resp.data, body);
}

#[tokio::test]
async fn throttled_plaintext_warns_then_rejects_with_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Throttled"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let warnings = Arc::new(AtomicUsize::new(0));
    let result = {
        // Current-thread runtime, so the client's warning lands on this
        // thread-local subscriber.
        let _guard = tracing::subscriber::set_default(WarnCounter(warnings.clone()));
        client.ping().await
    };
    assert!(matches!(result, Err(Error::Parse { .. })));
    assert!(warnings.load(Ordering::SeqCst) >= 1);
}

#[tokio::test]
async fn html_error_page_rejects_with_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<!DOCTYPE html><html><body>nope</body></html>"),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.ping().await;
    assert!(matches!(result, Err(Error::Parse { .. })));
}

#[tokio::test]
async fn oversized_multibyte_body_rejects_with_parse_error() {
    let mock_server = MockServer::start().await;

    // Long enough that the diagnostic snippet must cut inside the body,
    // with a two-byte character straddling the cut point.
    let body = format!("a{}", "é".repeat(3000));
    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client.ping().await;
    assert!(matches!(result, Err(Error::Parse { .. })));
}

#[tokio::test]
async fn timeout_error_names_the_configured_value() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/ping"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&mock_server)
        .await;

    let client =
        Client::with_base_url(&mock_server.uri()).with_timeout(Duration::from_millis(100));
    let err = client.ping().await.unwrap_err();
    assert!(matches!(err, Error::Timeout { timeout_ms: 100 }));
    assert!(err.to_string().contains("100 ms"));
}

#[tokio::test]
async fn exchange_endpoints_hit_versioned_paths() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/exchanges/binance/volume_chart"))
        .and(query_param("days", "7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = coingecko_api::VolumeChartQuery::default().with_days(7);
    let resp = client.exchange_volume_chart("binance", &query).await.unwrap();
    assert!(resp.success);
}
