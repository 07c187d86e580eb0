use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use wayfare_core::{loader::sample_catalog, Catalog};
use wayfare_server::{config::Config, router, state::AppState};

fn app() -> Router {
    router(AppState::with_catalog(sample_catalog(), Config::default()))
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(req).await.expect("app should handle request");
    let status = resp.status();
    let body = to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("response body should be readable");
    let value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed");
    send(app, req).await
}

async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .expect("request build should succeed");
    send(app, req).await
}

#[tokio::test]
async fn collections_are_served_in_catalog_order() {
    let (status, body) = get(app(), "/api/destinations").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().map(Vec::len), Some(6));
    assert_eq!(body[0]["name"], "Tokyo");
    assert!(body[0].get("imageUrl").is_some());
    assert!(body[0].get("dateRange").is_some());

    let (_, hotels) = get(app(), "/api/hotels").await;
    assert_eq!(hotels.as_array().map(Vec::len), Some(6));
    assert!(hotels[0].get("pricePerNight").is_some());
    assert!(hotels[0]["amenities"].is_array());

    let (_, activities) = get(app(), "/api/activities").await;
    assert_eq!(activities.as_array().map(Vec::len), Some(3));
    assert!(activities[0]["highlights"].is_array());
    assert!(activities[0].get("bestTime").is_some());
}

#[tokio::test]
async fn preferences_are_echoed_with_201() {
    let (status, body) = post_raw(
        app(),
        "/api/travel-preferences",
        r#"{"destination":"Kyoto","duration":"short","travelingWith":"solo"}"#,
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "message": "Travel preferences saved successfully",
            "data": {"destination": "Kyoto", "duration": "short", "travelingWith": "solo"}
        })
    );
}

#[tokio::test]
async fn missing_preferences_are_rejected() {
    for payload in [
        r#"{"destination":"Kyoto"}"#,
        r#"{"destination":"Kyoto","duration":"","travelingWith":"solo"}"#,
        r#"[]"#,
        r#"not json"#,
    ] {
        let (status, body) = post_raw(app(), "/api/travel-preferences", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body, json!({"message": "Missing required fields"}));
    }
}

#[tokio::test]
async fn search_endpoint_projects_and_filters() {
    let (status, body) = get(app(), "/api/search?q=tokyo").await;
    assert_eq!(status, StatusCode::OK);
    let results = body.as_array().expect("array");
    assert_eq!(results.len(), 8);
    assert_eq!(results[0]["icon"], "map");
    assert_eq!(results[0]["details"], json!({"date": results[0]["details"]["date"]}));

    let (_, hotels) = get(app(), "/api/search?q=tokyo&kind=hotel").await;
    let hotels = hotels.as_array().expect("array");
    assert_eq!(hotels.len(), 4);
    assert!(hotels.iter().all(|h| h["icon"] == "map-pin"));
    assert!(hotels.iter().all(|h| h["details"].get("duration").is_none()));

    let (_, nothing) = get(app(), "/api/search?q=tokyo&kind=cruise").await;
    assert_eq!(nothing, json!([]));

    let (_, blank) = get(app(), "/api/search?q=%20%20").await;
    assert_eq!(blank, json!([]));
}

#[tokio::test]
async fn empty_catalog_serves_empty_lists() {
    let app = router(AppState::with_catalog(Catalog::empty(), Config::default()));
    let (status, body) = get(app.clone(), "/api/hotels").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (_, results) = get(app, "/api/search?q=tokyo").await;
    assert_eq!(results, json!([]));
}

#[tokio::test]
async fn health_is_ok() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request build should succeed"),
        )
        .await
        .expect("app should handle request");
    assert_eq!(resp.status(), StatusCode::OK);
}
