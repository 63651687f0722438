use httpmock::Method::POST;
use marketpulse::{PulseError, RecommendationsBuilder, RiskLevel, Sector};
use serde_json::json;

use crate::common;

fn sample_picks() -> serde_json::Value {
    json!([
        {
            "symbol": "RELIANCE",
            "name": "Reliance Industries",
            "price": "₹2,450.00",
            "change": "+1.2%",
            "changePercent": 1.2,
            "reason": "Refining margins improving after a strong quarterly update.",
            "sector": "Energy",
            "riskLevel": "Medium"
        },
        {
            "symbol": "TCS",
            "name": "Tata Consultancy Services",
            "price": "₹3,890.50",
            "change": "-0.5%",
            "changePercent": -0.5,
            "reason": "Large deal wins offset weak discretionary spending.",
            "sector": "Technology",
            "riskLevel": "Low"
        }
    ])
}

#[tokio::test]
async fn offline_recommendations_parse_fenced_reply_and_sources() {
    let server = common::setup_server();

    let chunks = json!([
        { "web": { "title": "moneycontrol.com", "uri": "https://www.moneycontrol.com/a" } },
        { "retrievedContext": { "uri": "internal://doc" } },
        { "web": { "title": "nseindia.com", "uri": "https://www.nseindia.com/b" } }
    ]);

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(common::generate_path())
            .header("x-goog-api-key", "test-key")
            // sector = All must prompt for diverse sectors, and the
            // grounding tool must be requested
            .body_includes("diverse sectors")
            .body_includes("googleSearch");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(common::gemini_grounded_reply(
                &common::fenced(&sample_picks()),
                chunks,
            ));
    });

    let client = common::client_for(&server);
    let result = RecommendationsBuilder::new(&client, Sector::All, RiskLevel::Medium)
        .fetch()
        .await
        .unwrap();

    mock.assert();

    assert_eq!(result.stocks.len(), 2);
    assert_eq!(result.stocks[0].symbol, "RELIANCE");
    assert!((result.stocks[0].change_percent - 1.2).abs() < 1e-9);
    assert_eq!(result.stocks[1].risk_level, "Low");

    // non-web chunks skipped, order preserved
    let titles: Vec<_> = result.sources.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, ["moneycontrol.com", "nseindia.com"]);
    assert_eq!(result.sources[1].uri, "https://www.nseindia.com/b");
}

#[tokio::test]
async fn offline_sector_filter_embeds_exact_label() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(common::generate_path())
            .body_includes("the Consumer Goods sector")
            .body_includes("Find 5 currently trending stocks");
        then.status(200)
            .header("content-type", "application/json")
            .json_body(common::gemini_text_reply(&common::fenced(&json!([]))));
    });

    let client = common::client_for(&server);
    let result = RecommendationsBuilder::new(&client, Sector::ConsumerGoods, RiskLevel::High)
        .count(5)
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(result.stocks.is_empty());
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn offline_reply_without_json_is_an_error() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(POST).path(common::generate_path());
        then.status(200)
            .header("content-type", "application/json")
            .json_body(common::gemini_text_reply(
                "Markets were choppy today; I could not find reliable data.",
            ));
    });

    let client = common::client_for(&server);
    let err = RecommendationsBuilder::new(&client, Sector::Finance, RiskLevel::Low)
        .fetch()
        .await
        .unwrap_err();

    // no fallback object on this path
    assert!(matches!(err, PulseError::Parse(_)));
}

#[tokio::test]
async fn offline_unfenced_raw_json_still_parses() {
    let server = common::setup_server();

    // the model forgot the fence but sent a bare array
    let raw = serde_json::to_string(&sample_picks()).unwrap();
    server.mock(|when, then| {
        when.method(POST).path(common::generate_path());
        then.status(200)
            .header("content-type", "application/json")
            .json_body(common::gemini_text_reply(&raw));
    });

    let client = common::client_for(&server);
    let result = RecommendationsBuilder::new(&client, Sector::Energy, RiskLevel::Medium)
        .fetch()
        .await
        .unwrap();

    assert_eq!(result.stocks.len(), 2);
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn offline_quota_status_maps_to_status_error() {
    let server = common::setup_server();

    server.mock(|when, then| {
        when.method(POST).path(common::generate_path());
        then.status(429)
            .header("content-type", "application/json")
            .body(r#"{"error": {"code": 429, "status": "RESOURCE_EXHAUSTED"}}"#);
    });

    let client = common::client_for(&server);
    let err = RecommendationsBuilder::new(&client, Sector::All, RiskLevel::Medium)
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, PulseError::Status { status: 429, .. }));
}
