//! Integration tests for rdio

use rdio::{NowPlayingMonitor, RadioClient, RenderModel};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Create a mock now-playing JSON response
fn mock_main_json(np: &str, listeners: u64) -> serde_json::Value {
    json!({
        "main": {
            "np": np,
            "listeners": listeners,
            "current": 100,
            "start_time": 0,
            "end_time": 200,
            "tags": "electronic",
            "dj": {
                "djname": "Hanyuu-sama",
                "djimage": "hanyuu.png"
            },
            "queue": [
                { "meta": "Track X", "timestamp": 160 }
            ],
            "lp": [
                { "meta": "Track Y", "timestamp": 40 }
            ]
        }
    })
}

async fn client_for(server: &MockServer) -> RadioClient {
    RadioClient::builder()
        .api_base(format!("{}/api", server.uri()))
        .build()
        .await
        .unwrap()
}

#[tokio::test]
async fn test_now_playing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_main_json("Kettel - Twinkle", 412)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let snapshot = client.now_playing().await.unwrap();

    assert_eq!(snapshot.now_playing, "Kettel - Twinkle");
    assert_eq!(snapshot.listeners, 412);
    assert_eq!(snapshot.current_time, 100);
    assert_eq!(snapshot.start_time, 0);
    assert_eq!(snapshot.end_time, 200);
    assert_eq!(snapshot.dj.name, "Hanyuu-sama");
    assert_eq!(snapshot.queue.len(), 1);
    assert_eq!(snapshot.history.len(), 1);
}

#[tokio::test]
async fn test_fetch_raw_accumulates_full_body() {
    let mock_server = MockServer::start().await;

    let body = mock_main_json("Kettel - Twinkle", 412).to_string();
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body.clone()))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let raw = client.fetch_raw().await.unwrap();

    assert_eq!(raw, body);
}

#[tokio::test]
async fn test_end_to_end_render() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_main_json("Kettel - Twinkle", 412)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let snapshot = client.now_playing().await.unwrap();
    let model = RenderModel::from_snapshot(&snapshot);

    assert_eq!(model.elapsed, "01:40");
    assert_eq!(model.total, "03:20");
    assert_eq!(model.progress, "01:40 / 03:20");
    assert_eq!(model.queue, vec!["Track X - in 01:00".to_string()]);
    assert_eq!(model.history, vec!["Track Y - 01:00 ago".to_string()]);
    assert_eq!(
        client.dj_image_url(&snapshot.dj),
        "https://r-a-d.io/api/dj-image/hanyuu.png"
    );
}

#[tokio::test]
async fn test_error_status_is_transport_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.now_playing().await.unwrap_err();

    assert!(err.is_transport(), "expected transport error, got {:?}", err);
}

#[tokio::test]
async fn test_connection_failure_is_transport_failure() {
    // Nothing listens on this address
    let client = RadioClient::builder()
        .api_base("http://127.0.0.1:1/api")
        .timeout(Duration::from_millis(500))
        .build()
        .await
        .unwrap();

    let err = client.now_playing().await.unwrap_err();
    assert!(err.is_transport(), "expected transport error, got {:?}", err);
}

#[tokio::test]
async fn test_malformed_body_is_parse_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{ not json"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.now_playing().await.unwrap_err();

    assert!(err.is_parse(), "expected parse error, got {:?}", err);
}

#[tokio::test]
async fn test_empty_body_is_parse_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.now_playing().await.unwrap_err();

    assert!(err.is_parse(), "expected parse error, got {:?}", err);
}

#[tokio::test]
async fn test_missing_field_is_parse_failure() {
    let mock_server = MockServer::start().await;

    // No `dj` object
    let body = json!({
        "main": {
            "np": "x", "listeners": 1, "current": 10,
            "start_time": 0, "end_time": 20,
            "queue": [], "lp": []
        }
    });

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let err = client.now_playing().await.unwrap_err();

    assert!(err.is_parse(), "expected parse error, got {:?}", err);
}

#[tokio::test]
async fn test_monitor_publishes_first_snapshot() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_main_json("Kettel - Twinkle", 412)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let monitor = NowPlayingMonitor::spawn(client, Duration::from_secs(60));

    let mut updates = monitor.subscribe();
    updates.changed().await.unwrap();

    let snapshot = updates.borrow().clone().unwrap();
    assert_eq!(snapshot.now_playing, "Kettel - Twinkle");

    monitor.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_monitor_retains_snapshot_across_failures() {
    let mock_server = MockServer::start().await;

    // One good response, then errors for every later poll
    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_main_json("Kettel - Twinkle", 412)))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;
    let monitor = NowPlayingMonitor::spawn(client, Duration::from_millis(50));

    let mut updates = monitor.subscribe();
    updates.changed().await.unwrap();
    let first = updates.borrow().clone().unwrap();

    // Let several failing refresh cycles go by
    tokio::time::sleep(Duration::from_millis(300)).await;

    let retained = monitor.snapshot().unwrap();
    assert_eq!(retained, first);

    monitor.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_monitor_refresh_now() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api"))
        .respond_with(ResponseTemplate::new(200).set_body_json(mock_main_json("Kettel - Twinkle", 412)))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server).await;

    // Long interval so only the initial tick and the explicit refresh run
    let monitor = NowPlayingMonitor::spawn(client, Duration::from_secs(60));

    let mut updates = monitor.subscribe();
    updates.changed().await.unwrap();

    monitor.refresh_now().await.unwrap();

    monitor.shutdown().await.unwrap();
}
