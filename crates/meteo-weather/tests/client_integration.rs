//! Integration tests for WeatherClient against a mock provider.

use std::time::Duration;

use meteo_weather::{ClientOptions, WeatherClient, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> WeatherClient {
    WeatherClient::new(ClientOptions {
        api_key: "test-key".to_string(),
        base_url: base_url.to_string(),
        units: "metric".to_string(),
        lang: "fr".to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}

fn current_body(name: &str, temp: f64) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "dt": 1700000000,
        "timezone": 0,
        "main": {"temp": temp, "temp_min": temp - 3.0, "temp_max": temp + 3.0, "humidity": 55},
        "wind": {"speed": 4.0, "deg": 200},
        "weather": [{"main": "Clear", "description": "ciel dégagé", "icon": "01d"}],
        "sys": {"sunrise": 1699990000, "sunset": 1700030000}
    })
}

#[tokio::test]
async fn current_parses_success_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Casablanca"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .and(query_param("lang", "fr"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Casablanca", 21.0)))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resp = client.current("Casablanca").await.unwrap();
    assert_eq!(resp.name, "Casablanca");
    assert_eq!(resp.main.temp, 21.0);
}

#[tokio::test]
async fn unknown_city_becomes_upstream_error_with_provider_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"cod": "404", "message": "city not found"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.current("Nulleville").await.unwrap_err();
    match err {
        WeatherError::Upstream { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "city not found");
        }
        other => panic!("expected Upstream, got {:?}", other),
    }
}

#[tokio::test]
async fn server_error_without_body_still_reports_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.forecast("Casablanca").await.unwrap_err();
    match err {
        WeatherError::Upstream { status, message } => {
            assert_eq!(status, 500);
            assert!(!message.is_empty());
        }
        other => panic!("expected Upstream, got {:?}", other),
    }
}

#[tokio::test]
async fn malformed_success_body_is_malformed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"list": 42})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.current("Casablanca").await.unwrap_err();
    assert!(matches!(err, WeatherError::MalformedPayload(_)));
}

#[tokio::test]
async fn hung_request_times_out_with_a_distinct_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(current_body("Casablanca", 21.0))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let client = WeatherClient::new(ClientOptions {
        api_key: "test-key".to_string(),
        base_url: server.uri(),
        units: "metric".to_string(),
        lang: "fr".to_string(),
        timeout: Duration::from_millis(200),
    })
    .unwrap();

    let err = client.current("Casablanca").await.unwrap_err();
    assert!(matches!(err, WeatherError::Timeout));
}

#[tokio::test]
async fn daily_forecast_requests_the_configured_day_count() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast/daily"))
        .and(query_param("cnt", "15"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "list": [
                {
                    "dt": 1700000000,
                    "temp": {"day": 20.0, "min": 14.0, "max": 24.0},
                    "weather": [{"main": "Clear", "description": "ciel dégagé", "icon": "01d"}],
                    "pop": 0.2,
                    "speed": 4.5
                }
            ],
            "city": {"name": "Casablanca", "timezone": 0}
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resp = client.daily_forecast("Casablanca", 15).await.unwrap();
    assert_eq!(resp.list.len(), 1);
    assert_eq!(resp.list[0].temp.max, 24.0);
}
