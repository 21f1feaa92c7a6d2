//! End-to-end handler tests driving the router with `tower::ServiceExt`.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use http_body_util::BodyExt;
use katottg_server::app;
use katottg_server::state::AppState;
use katottg_core::{CityDirectory, RawEntry, RegistryError, RegistryFetch, Result};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt;

struct StubFetcher;

#[async_trait]
impl RegistryFetch for StubFetcher {
    async fn fetch(&self) -> Result<Vec<RawEntry>> {
        Ok(vec![
            RawEntry {
                category: "O".into(),
                name: "Київська".into(),
                level1: Some("01".into()),
                ..Default::default()
            },
            RawEntry {
                category: "C".into(),
                name: "Іванівка".into(),
                level1: Some("01".into()),
                level3: Some("010203".into()),
                ..Default::default()
            },
        ])
    }
}

struct FailingFetcher;

#[async_trait]
impl RegistryFetch for FailingFetcher {
    async fn fetch(&self) -> Result<Vec<RawEntry>> {
        Err(RegistryError::Status(404))
    }
}

fn test_app(fetcher: Arc<dyn RegistryFetch>) -> axum::Router {
    app(AppState::with_directory(Arc::new(CityDirectory::new(
        fetcher,
    ))))
}

fn cities_request(body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/cities")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn search_returns_matching_cities() {
    let response = test_app(Arc::new(StubFetcher))
        .oneshot(cities_request(r#"{"query":"іван"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let cities = json["cities"].as_array().unwrap();
    assert_eq!(cities.len(), 1);
    assert_eq!(cities[0]["fullName"], "с. Іванівка, Київська");
    assert_eq!(cities[0]["type"], "с.");
    assert_eq!(cities[0]["code"], "010203");
}

#[tokio::test]
async fn short_or_missing_query_is_empty_but_valid() {
    let app = test_app(Arc::new(StubFetcher));

    for body in [r#"{"query":"і"}"#, r#"{"query":""}"#, "{}", "not json"] {
        let response = app.clone().oneshot(cities_request(body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "body {body:?}");
        let json = body_json(response).await;
        assert_eq!(json["cities"].as_array().unwrap().len(), 0);
    }
}

#[tokio::test]
async fn failed_registry_load_maps_to_stable_error_shape() {
    let response = test_app(Arc::new(FailingFetcher))
        .oneshot(cities_request(r#"{"query":"київ"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert!(!json["error"].as_str().unwrap().is_empty());
    assert_eq!(json["cities"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn failed_load_does_not_poison_the_directory() {
    // 500 on the failing fetch, but the service retries on the next request
    // because the cache was never marked populated.
    let directory = Arc::new(CityDirectory::new(Arc::new(FailingFetcher)));
    let app = app(AppState::with_directory(directory));

    let first = app
        .clone()
        .oneshot(cities_request(r#"{"query":"київ"}"#))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let second = app
        .oneshot(cities_request(r#"{"query":"київ"}"#))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn preflight_gets_permissive_cors_headers() {
    let response = test_app(Arc::new(StubFetcher))
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/cities")
                .header(header::ORIGIN, "https://novado.example")
                .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "apikey")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
    let allowed = headers
        .get(header::ACCESS_CONTROL_ALLOW_HEADERS)
        .unwrap()
        .to_str()
        .unwrap()
        .to_lowercase();
    assert!(allowed.contains("apikey"));
    assert!(allowed.contains("authorization"));
}
