//! Integration tests for the OpenWeatherMap client against a mock server.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use weatherdeck::adapters::openweather::{OpenWeatherClient, OpenWeatherConfig};
use weatherdeck::ports::{ProviderError, WeatherProvider};

async fn client_for(server: &MockServer) -> OpenWeatherClient {
    OpenWeatherClient::new(
        OpenWeatherConfig::new("test-key")
            .with_base_url(server.uri())
            .with_history_base_url(server.uri()),
    )
}

#[tokio::test]
async fn fetch_current_returns_numeric_celsius_temp() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .and(query_param("q", "Delhi"))
        .and(query_param("units", "metric"))
        .and(query_param("appid", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "weather": [{"id": 721, "main": "Haze", "description": "haze"}],
                "main": {"temp": 31.2, "feels_like": 33.8, "humidity": 44},
                "dt": 1729425600,
                "name": "Delhi"
            }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let current = client.fetch_current("Delhi").await.unwrap();

    assert_eq!(current.condition, "Haze");
    assert!(current.temp.is_finite());
    assert_eq!(current.temp, 31.2);
    assert_eq!(current.feels_like, 33.8);
    assert_eq!(current.observed_at.timestamp(), 1_729_425_600);
}

#[tokio::test]
async fn fetch_current_maps_upstream_404_to_city_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_raw(
            r#"{"cod": "404", "message": "city not found"}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.fetch_current("Atlantis").await.unwrap_err();

    assert!(matches!(error, ProviderError::CityNotFound { .. }));
}

#[tokio::test]
async fn fetch_current_maps_upstream_500_to_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.fetch_current("Delhi").await.unwrap_err();

    assert!(matches!(error, ProviderError::Network(_)));
}

#[tokio::test]
async fn fetch_coordinates_resolves_first_match() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .and(query_param("q", "Delhi"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"[{"name": "Delhi", "lat": 28.6517, "lon": 77.2219, "country": "IN"}]"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let coords = client.fetch_coordinates("Delhi").await.unwrap();

    assert_eq!(coords.lat, 28.6517);
    assert_eq!(coords.lon, 77.2219);
}

#[tokio::test]
async fn fetch_coordinates_with_no_match_is_city_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/geo/1.0/direct"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client.fetch_coordinates("Nowhere").await.unwrap_err();

    assert!(matches!(error, ProviderError::CityNotFound { .. }));
}

#[tokio::test]
async fn fetch_historical_aggregate_reads_all_blocks() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/aggregated/day"))
        .and(query_param("month", "10"))
        .and(query_param("day", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "temp": {"mean": 303.4, "record_min": 294.1, "record_max": 311.9},
                "pressure": {"mean": 1009.2},
                "humidity": {"mean": 52.0},
                "wind": {"mean": 3.4},
                "precipitation": {"mean": 0.2},
                "clouds": {"mean": 21.0}
            }"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let aggregate = client
        .fetch_historical_aggregate(28.65, 77.22, 10, 20)
        .await
        .unwrap();

    assert_eq!(aggregate.mean_temp, 303.4);
    assert_eq!(aggregate.record_min_temp, 294.1);
    assert_eq!(aggregate.record_max_temp, 311.9);
    assert_eq!(aggregate.mean_pressure, Some(1009.2));
    assert_eq!(aggregate.mean_cloud_cover, Some(21.0));
}

#[tokio::test]
async fn fetch_historical_aggregate_without_temp_block_is_data_unavailable() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/data/2.5/aggregated/day"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"clouds": {"mean": 10.0}}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let error = client
        .fetch_historical_aggregate(28.65, 77.22, 10, 20)
        .await
        .unwrap_err();

    assert!(matches!(error, ProviderError::DataUnavailable(_)));
}
