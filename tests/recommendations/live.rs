use marketpulse::{PulseClient, RiskLevel, Sector};

#[tokio::test]
#[ignore]
async fn live_recommendations_smoke() {
    if !crate::common::live_enabled() {
        return;
    }

    let client = PulseClient::builder().build().unwrap();
    let result = marketpulse::recommendations(&client, Sector::All, RiskLevel::Medium)
        .await
        .unwrap();

    assert!(
        !result.stocks.is_empty(),
        "expected the model to return at least one pick"
    );
    let first = &result.stocks[0];
    assert!(!first.symbol.is_empty());
    assert!(!first.reason.is_empty());
}
