use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use ledger_db::{Database, DbConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::router;
use crate::AppState;

async fn test_app() -> (Router, Database) {
    let db = Database::new(DbConfig::in_memory()).await.unwrap();
    (router(AppState::new(db.clone())), db)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_shipment(app: &Router) -> i64 {
    let (status, json) = send(app, Method::POST, "/api/profit/shipments", None).await;
    assert_eq!(status, StatusCode::OK);
    json["id"].as_i64().unwrap()
}

fn assert_error(json: &Value, status: u16, error: &str, message: &str, path: &str) {
    assert_eq!(json["status"], status);
    assert_eq!(json["error"], error);
    assert_eq!(json["message"], message);
    assert_eq!(json["path"], format!("uri={path}"));
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_calculation_lifecycle() {
    let (app, _db) = test_app().await;
    let shipment_id = create_shipment(&app).await;

    let calculations = format!("/api/profit/shipments/{shipment_id}/calculations");
    let (status, created) = send(
        &app,
        Method::POST,
        &calculations,
        Some(json!({ "income": 100.0, "cost": 50.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["shipmentId"], shipment_id);
    assert_eq!(created["income"], 100.0);
    assert_eq!(created["cost"], 50.0);
    assert_eq!(created["profitOrLoss"], 50.0);

    let (status, listed) = send(&app, Method::GET, &calculations, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let calc_id = created["id"].as_i64().unwrap();
    let one = format!("{calculations}/{calc_id}");
    let (status, body) = send(&app, Method::DELETE, &one, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::Null);

    let (status, body) = send(&app, Method::DELETE, &one, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(
        &body,
        404,
        "Not Found",
        &format!("Calculation not found with id : '{calc_id}'"),
        &one,
    );
}

#[tokio::test]
async fn test_list_and_get_shipments() {
    let (app, _db) = test_app().await;

    let (status, empty) = send(&app, Method::GET, "/api/profit/shipments", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(empty, json!([]));

    let a = create_shipment(&app).await;
    let b = create_shipment(&app).await;

    let (_, listed) = send(&app, Method::GET, "/api/profit/shipments", None).await;
    assert_eq!(listed, json!([{ "id": a }, { "id": b }]));

    let (status, one) = send(&app, Method::GET, &format!("/api/profit/shipments/{b}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(one, json!({ "id": b }));
}

#[tokio::test]
async fn test_missing_shipment_is_404() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/profit/shipments/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(
        &body,
        404,
        "Not Found",
        "Shipment not found with id : '999'",
        "/api/profit/shipments/999",
    );
    assert_eq!(body["path"], "uri=/api/profit/shipments/999");
}

#[tokio::test]
async fn test_delete_missing_shipment_is_404() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, Method::DELETE, "/api/profit/shipments/5", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Shipment not found with id : '5'");
}

#[tokio::test]
async fn test_both_zero_is_400_even_without_shipment() {
    let (app, _db) = test_app().await;
    let uri = "/api/profit/shipments/999/calculations";

    let (status, body) = send(
        &app,
        Method::POST,
        uri,
        Some(json!({ "income": 0, "cost": 0 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error(&body, 400, "Bad Request", "Income and Cost cannot both be 0", uri);
}

#[tokio::test]
async fn test_empty_object_is_400() {
    let (app, _db) = test_app().await;
    let shipment_id = create_shipment(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/profit/shipments/{shipment_id}/calculations"),
        Some(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Income and Cost cannot both be 0");
}

#[tokio::test]
async fn test_create_for_missing_shipment_is_404() {
    let (app, _db) = test_app().await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/profit/shipments/999/calculations",
        Some(json!({ "income": 100.0, "cost": 50.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Shipment not found with id : '999'");
}

#[tokio::test]
async fn test_absent_income_serializes_as_null() {
    let (app, _db) = test_app().await;
    let shipment_id = create_shipment(&app).await;

    let (status, created) = send(
        &app,
        Method::POST,
        &format!("/api/profit/shipments/{shipment_id}/calculations"),
        Some(json!({ "cost": 20.0, "profitOrLoss": 999.0 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["income"], Value::Null);
    assert_eq!(created["profitOrLoss"], -20.0);
}

#[tokio::test]
async fn test_shipment_delete_cascades() {
    let (app, db) = test_app().await;
    let shipment_id = create_shipment(&app).await;
    let calculations = format!("/api/profit/shipments/{shipment_id}/calculations");
    send(
        &app,
        Method::POST,
        &calculations,
        Some(json!({ "income": 10.0, "cost": 1.0 })),
    )
    .await;

    let (status, _) = send(
        &app,
        Method::DELETE,
        &format!("/api/profit/shipments/{shipment_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &calculations, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(db.calculations().count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_profit_summary() {
    let (app, db) = test_app().await;
    let ledger = db.ledger();
    ledger.insert_income(7, 500.0).await.unwrap();
    ledger.insert_income(7, 250.0).await.unwrap();
    ledger.insert_cost(7, 300.0).await.unwrap();

    let (status, body) = send(&app, Method::GET, "/api/profit/profit/7", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "shipmentId": 7, "totalIncome": 750.0, "totalCosts": 300.0, "profit": 450.0 })
    );
}

#[tokio::test]
async fn test_profit_for_unknown_shipment_is_zero() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/profit/profit/12345", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalIncome"], 0.0);
    assert_eq!(body["totalCosts"], 0.0);
    assert_eq!(body["profit"], 0.0);
}

#[tokio::test]
async fn test_unknown_route_is_generic_404() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/profit/nothing-here", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error(
        &body,
        404,
        "Not Found",
        "The requested resource was not found",
        "/api/profit/nothing-here",
    );
}

#[tokio::test]
async fn test_unsupported_method_is_405_with_body() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, Method::PUT, "/api/profit/shipments", None).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_error(
        &body,
        405,
        "Method Not Allowed",
        "Request method 'PUT' is not supported",
        "/api/profit/shipments",
    );

    let (status, body) = send(&app, Method::POST, "/api/profit/profit/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["path"], "uri=/api/profit/profit/1");
}

#[tokio::test]
async fn test_non_numeric_id_is_400() {
    let (app, _db) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/api/profit/shipments/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["path"], "uri=/api/profit/shipments/abc");
}

#[tokio::test]
async fn test_malformed_json_is_400() {
    let (app, _db) = test_app().await;
    let shipment_id = create_shipment(&app).await;

    let req = Request::builder()
        .method(Method::POST)
        .uri(format!("/api/profit/shipments/{shipment_id}/calculations"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"income\": "))
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_storage_failure_is_generic_500() {
    let (app, db) = test_app().await;
    db.close().await;

    let (status, body) = send(&app, Method::GET, "/api/profit/shipments", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_error(
        &body,
        500,
        "Internal Server Error",
        "An unexpected error occurred",
        "/api/profit/shipments",
    );
}

#[tokio::test]
async fn test_health() {
    let (app, db) = test_app().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "SERVING");
    assert_eq!(body["database"], true);

    db.close().await;

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["status"], "NOT_SERVING");
}

#[tokio::test]
async fn test_cors_preflight() {
    let (app, _db) = test_app().await;

    let req = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/profit/shipments")
        .header(header::ORIGIN, "http://localhost:4200")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}
