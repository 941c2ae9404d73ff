use automobile_api::database::{MemoryStore, MongoStore};
use automobile_api::routes::create_app;
use automobile_api::state::AppState;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

// Función helper para crear la app de test
fn create_test_app() -> Router {
    create_app(AppState::new(Arc::new(MemoryStore::new())))
}

fn create_unavailable_app() -> Router {
    create_app(AppState::new(Arc::new(MongoStore::unavailable("automobile", false))))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

fn is_object_id(value: &Value) -> bool {
    value
        .as_str()
        .map(|id| id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}

#[tokio::test]
async fn test_root_message() {
    let app = create_test_app();
    let (status, body) = get(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Automobile API running" }));
}

#[tokio::test]
async fn test_create_then_get_vehicle() {
    let app = create_test_app();
    let (status, created) = post_json(
        &app,
        "/api/vehicles",
        json!({ "make": "Toyota", "model": "Camry", "year": 2022, "price": 25000 }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(is_object_id(&created["id"]), "unexpected id: {}", created);
    assert_eq!(created.as_object().unwrap().len(), 1);

    let id = created["id"].as_str().unwrap();
    let (status, vehicle) = get(&app, &format!("/api/vehicles/{}", id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(vehicle["id"], id);
    assert_eq!(vehicle["make"], "Toyota");
    assert_eq!(vehicle["model"], "Camry");
    assert_eq!(vehicle["year"], 2022);
    assert_eq!(vehicle["price"].as_f64(), Some(25000.0));
    assert_eq!(vehicle["images"], json!([]));
    assert_eq!(vehicle["features"], json!([]));
    assert_eq!(vehicle["in_stock"], true);
    assert!(vehicle.get("_id").is_none());
}

#[tokio::test]
async fn test_invalid_vehicle_is_not_persisted() {
    let app = create_test_app();
    let invalid = [
        json!({ "make": "Ford", "model": "T", "year": 1949, "price": 100 }),
        json!({ "make": "Ford", "model": "T", "year": 2101, "price": 100 }),
        json!({ "make": "Ford", "model": "T", "year": 2000, "price": -1 }),
        json!({ "make": "Ford", "model": "T", "year": 2000, "price": 1, "mileage": -5 }),
        json!({ "model": "T", "year": 2000, "price": 1 }),
    ];

    for payload in invalid {
        let (status, body) = post_json(&app, "/api/vehicles", payload.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    let (status, vehicles) = get(&app, "/api/vehicles").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(vehicles, json!([]));
}

#[tokio::test]
async fn test_validation_error_lists_offending_fields() {
    let app = create_test_app();
    let (status, body) = post_json(
        &app,
        "/api/vehicles",
        json!({ "make": "Ford", "year": 3000, "price": -1 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let details = body["details"].as_object().unwrap();
    assert!(details.contains_key("model"));
    assert!(details.contains_key("year"));
    assert!(details.contains_key("price"));
    assert!(!details.contains_key("make"));
}

#[tokio::test]
async fn test_wrong_type_is_listed_with_other_offending_fields() {
    let app = create_test_app();
    let (status, body) = post_json(
        &app,
        "/api/vehicles",
        json!({ "make": "Toyota", "model": "Camry", "year": "2022", "price": -5 }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
    let details = body["details"].as_object().unwrap();
    assert!(details.contains_key("year"));
    assert!(details.contains_key("price"));
    assert!(!details.contains_key("payload"));

    let (_, vehicles) = get(&app, "/api/vehicles").await;
    assert_eq!(vehicles, json!([]));
}

#[tokio::test]
async fn test_large_mileage_and_float_year_are_accepted() {
    let app = create_test_app();
    let (status, created) = post_json(
        &app,
        "/api/vehicles",
        json!({ "make": "Volvo", "model": "240", "year": 1990.0, "price": 3000, "mileage": 3000000000u64 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "body {}", created);

    let id = created["id"].as_str().unwrap();
    let (_, vehicle) = get(&app, &format!("/api/vehicles/{}", id)).await;
    assert_eq!(vehicle["year"], 1990);
    assert_eq!(vehicle["mileage"], 3000000000u64);
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = create_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/vehicles")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_list_vehicles_returns_every_insert() {
    let app = create_test_app();
    let mut ids = Vec::new();
    for n in 0..4 {
        let (status, created) = post_json(
            &app,
            "/api/vehicles",
            json!({ "make": "Mazda", "model": format!("MX-{}", n), "year": 2010 + n, "price": 9000 }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        ids.push(created["id"].as_str().unwrap().to_string());
    }

    let (status, vehicles) = get(&app, "/api/vehicles").await;
    assert_eq!(status, StatusCode::OK);

    let listed: Vec<String> = vehicles
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(listed, ids);
    assert_eq!(vehicles[3]["model"], "MX-3");
}

#[tokio::test]
async fn test_get_unknown_or_malformed_vehicle_is_404() {
    let app = create_test_app();

    let (status, body) = get(&app, "/api/vehicles/000000000000000000000000").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Vehicle not found");

    let (status, _) = get(&app, "/api/vehicles/not-an-object-id").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_and_list_leads() {
    let app = create_test_app();
    let (status, created) = post_json(
        &app,
        "/api/leads",
        json!({ "name": "Jane", "email": "jane@example.com", "vehicle_id": "000000000000000000000000" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(is_object_id(&created["id"]));

    let (status, leads) = get(&app, "/api/leads").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(leads.as_array().unwrap().len(), 1);
    assert_eq!(leads[0]["id"], created["id"]);
    assert_eq!(leads[0]["type"], "test_drive");
    assert_eq!(leads[0]["vehicle_id"], "000000000000000000000000");
    assert!(leads[0]["phone"].is_null());
}

#[tokio::test]
async fn test_lead_with_invalid_email_is_rejected() {
    let app = create_test_app();
    let (status, body) = post_json(&app, "/api/leads", json!({ "name": "Jane", "email": "not-an-email" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"].get("email").is_some());

    let (_, leads) = get(&app, "/api/leads").await;
    assert_eq!(leads, json!([]));
}

#[tokio::test]
async fn test_diagnostics_with_memory_store() {
    let app = create_test_app();
    post_json(&app, "/api/leads", json!({ "name": "Jane", "email": "jane@example.com" })).await;

    let (status, body) = get(&app, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["connection_status"], "Connected");
    assert_eq!(body["collections"], json!(["lead"]));
}

#[tokio::test]
async fn test_unavailable_database_is_service_error() {
    let app = create_unavailable_app();

    let (status, body) = get(&app, "/api/vehicles").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "SERVICE_UNAVAILABLE");

    let (status, _) = post_json(
        &app,
        "/api/vehicles",
        json!({ "make": "Toyota", "model": "Camry", "year": 2022, "price": 25000 }),
    )
    .await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    let (status, _) = get(&app, "/api/vehicles/000000000000000000000000").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // La validación ocurre antes de tocar el almacén
    let (status, _) = post_json(&app, "/api/leads", json!({ "name": "Jane", "email": "nope" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = get(&app, "/test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["connection_status"], "Not Connected");
    assert_eq!(body["database"], "❌ Not Available");
}

#[tokio::test]
async fn test_cors_is_fully_permissive() {
    let app = create_test_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/vehicles")
        .header(header::ORIGIN, "https://dealer.example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,x-custom")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let headers = response.headers();

    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "https://dealer.example.com"
    );
    assert_eq!(
        headers.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS).unwrap(),
        "true"
    );
}
