use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use paddock::{db, seed, server};
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_routes_are_mounted_under_api() {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    seed::seed_demo_data(&db).await.expect("Failed to seed");
    let app = server::build_router(db, &[]);

    let (status, teams) = get_json(app.clone(), "/api/team/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(teams.as_array().map(Vec::len), Some(4));
    assert_eq!(teams[0]["name"], "Red Bull");

    let (status, drivers) = get_json(app, "/api/driver/all").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(drivers[0]["name"], "Max Verstappen");
    assert_eq!(drivers[0]["teamId"], 1);
}

#[tokio::test]
async fn test_health_reports_database() {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let app = server::build_router(db, &["http://localhost:3000".to_string()]);

    let (status, body) = get_json(app, "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "paddock");
    assert_eq!(body["database"], "ok");
}

#[tokio::test]
async fn test_openapi_document_lists_resources() {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let app = server::build_router(db, &[]);

    let (status, doc) = get_json(app, "/api-docs/openapi.json").await;
    assert_eq!(status, StatusCode::OK);

    let paths = doc["paths"].as_object().expect("paths missing");
    for path in [
        "/api/team/all",
        "/api/team",
        "/api/team/{id}",
        "/api/driver/all",
        "/api/driver",
        "/api/driver/{id}",
        "/api/health",
    ] {
        assert!(paths.contains_key(path), "missing {}", path);
    }
    assert!(doc["components"]["schemas"]["DriverDto"].is_object());
}
