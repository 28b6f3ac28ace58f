//! Tests for `ForecastRequest::execute` against a mocked DarkSky API.
//!
//! The executor blocks, so it runs on tokio's blocking pool while the mock server answers on the
//! test runtime.

use darksky_client::{
    API_CALLS_HEADER, ForecastError, ForecastRequest, ForecastResponse, Lang, Units,
};
use reqwest::StatusCode;
use std::net::TcpListener;
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

const KEY: &str = "test_key";
const CHICAGO_FORECAST: &str = include_str!("testdata/chicago_forecast.json");

// =============================================================================
// Test Helpers
// =============================================================================

fn chicago(server: &MockServer) -> ForecastRequest {
    ForecastRequest::new(KEY, 41.8781, -87.6297).with_base_url(server.uri())
}

async fn execute(request: ForecastRequest) -> Result<ForecastResponse, ForecastError> {
    tokio::task::spawn_blocking(move || request.execute())
        .await
        .expect("executor thread panicked")
}

async fn mount_forecast(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/test_key/41.8781,-87.6297"))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

// =============================================================================
// Successful Responses
// =============================================================================

#[tokio::test]
async fn test_get_forecast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test_key/41.8781,-87.6297"))
        .and(query_param("lang", "en"))
        .and(query_param("units", "us"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header(API_CALLS_HEADER, "1")
                .set_body_string(CHICAGO_FORECAST),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = execute(chicago(&server)).await.expect("request should succeed");

    assert_eq!(resp.api_call_count, 1);

    let forecast = resp.forecast;
    assert_eq!(forecast.timezone, "America/Chicago");
    assert_eq!(forecast.offset, -5.0);
    assert_eq!(forecast.currently.summary, "Drizzle");
    assert_eq!(forecast.currently.wind_direction(), "SE");
    assert_eq!(forecast.minutely.data.len(), 3);
    assert_eq!(forecast.currently.nearest_storm_bearing, 0.0);
    assert_eq!(forecast.hourly.data[0].precip_type, "rain");
    assert_eq!(forecast.hourly.data[1].precip_type, "");
    assert_eq!(forecast.daily.data[0].sunrise_timestamp, 1_509_967_519);
    assert_eq!(forecast.flags.units, "us");
    assert_eq!(forecast.flags.isd_stations.len(), 3);
}

#[tokio::test]
async fn test_alerts_keep_source_order() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(200).set_body_string(CHICAGO_FORECAST),
    )
    .await;

    let forecast = execute(chicago(&server)).await.unwrap().forecast;

    let titles: Vec<&str> = forecast.alerts.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Flood Watch for Mason, WA",
            "Wind Advisory for Cook, IL",
            "Lakeshore Flood Warning for Lake, IN",
        ]
    );
    assert_eq!(forecast.alerts[0].expires_timestamp, 1_510_036_680);
    assert!(forecast.alerts[0].regions.is_empty());
    assert_eq!(forecast.alerts[2].severity, "warning");
}

#[tokio::test]
async fn test_hourly_data_keeps_source_order() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(200).set_body_string(CHICAGO_FORECAST),
    )
    .await;

    let hourly = execute(chicago(&server)).await.unwrap().forecast.hourly;

    let directions: Vec<String> = hourly.data.iter().map(|dp| dp.wind_direction()).collect();
    assert_eq!(directions, vec!["SW".to_string(), "NW".to_string()]);
    assert!(hourly.data[0].timestamp < hourly.data[1].timestamp);
}

#[tokio::test]
async fn test_time_machine_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/test_key/41.8781,-87.6297,1509993277"))
        .and(query_param("lang", "de"))
        .and(query_param("units", "si"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"timezone": "America/Chicago"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let request = chicago(&server)
        .with_time(1_509_993_277)
        .with_lang(Lang::German)
        .with_units(Units::Si);
    let resp = execute(request).await.expect("time machine request should succeed");

    assert_eq!(resp.forecast.timezone, "America/Chicago");
    assert!(resp.forecast.alerts.is_empty());
}

#[tokio::test]
async fn test_missing_call_count_header_is_zero() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(200).set_body_string(CHICAGO_FORECAST),
    )
    .await;

    let resp = execute(chicago(&server)).await.unwrap();

    assert_eq!(resp.api_call_count, 0);
}

#[tokio::test]
async fn test_unparsable_call_count_header_is_zero() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(200)
            .insert_header(API_CALLS_HEADER, "many")
            .set_body_string(CHICAGO_FORECAST),
    )
    .await;

    let resp = execute(chicago(&server)).await.expect("a bad header is not an error");

    assert_eq!(resp.api_call_count, 0);
    assert_eq!(resp.forecast.alerts.len(), 3);
}

#[tokio::test]
async fn test_custom_client() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(200)
            .insert_header(API_CALLS_HEADER, "7")
            .set_body_string(CHICAGO_FORECAST),
    )
    .await;

    let request = chicago(&server);
    let resp = tokio::task::spawn_blocking(move || {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("client should build");
        request.with_client(client).execute()
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(resp.api_call_count, 7);
}

// =============================================================================
// Error Responses
// =============================================================================

#[tokio::test]
async fn test_error_response() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(500).set_body_string("A Server Error Occurred."),
    )
    .await;

    let err = execute(chicago(&server))
        .await
        .expect_err("an HTTP error response should result in an error");

    assert_eq!(err.to_string(), "A Server Error Occurred.");
    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_error_body_with_invalid_utf8_is_replaced() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(502).set_body_bytes(vec![b'b', b'a', b'd', 0xff]),
    )
    .await;

    let err = execute(chicago(&server)).await.unwrap_err();

    assert_eq!(err.to_string(), "bad\u{FFFD}");
    assert_eq!(err.status(), Some(StatusCode::BAD_GATEWAY));
}

#[tokio::test]
async fn test_client_error_response_is_not_retryable() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(403)
            .insert_header(API_CALLS_HEADER, "1")
            .set_body_string("permissionDenied"),
    )
    .await;

    let err = execute(chicago(&server)).await.unwrap_err();

    match err {
        ForecastError::Api { status, ref body } => {
            assert_eq!(status, StatusCode::FORBIDDEN);
            assert_eq!(body, "permissionDenied");
        }
        other => panic!("expected an API error, got {other:?}"),
    }
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    mount_forecast(
        &server,
        ResponseTemplate::new(200).set_body_string(r#"{"latitude": "somewhere"}"#),
    )
    .await;

    let err = execute(chicago(&server)).await.unwrap_err();

    assert!(matches!(err, ForecastError::Decode(_)));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_unreachable_host_is_a_transport_error() {
    // Bind then drop a listener so its port is known to be closed.
    let uri = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    };

    let request = ForecastRequest::new(KEY, 41.8781, -87.6297).with_base_url(uri);
    let err = execute(request).await.unwrap_err();

    assert!(matches!(err, ForecastError::Transport(_)));
    assert!(err.is_retryable());
}
