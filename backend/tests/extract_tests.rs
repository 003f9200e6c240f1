//! Boundary tests for the validating extractor
//!
//! Drives small routers with `tower::ServiceExt::oneshot` and checks the
//! status codes and error envelopes a caller would see.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    response::Response,
    routing::post,
    Json, Router,
};
use farmer_registry_backend::{AppResult, ValidatedJson};
use serde_json::{json, Value};
use shared::{AdminLogin, FarmerOtpLogin, FarmerRegistration, RegisterSuccessResponse, SuccessResponse};
use tower::ServiceExt;

async fn register(
    ValidatedJson(input): ValidatedJson<FarmerRegistration>,
) -> AppResult<(StatusCode, Json<RegisterSuccessResponse>)> {
    Ok((
        StatusCode::CREATED,
        Json(RegisterSuccessResponse::registered(format!("farmer-{}", input.mobile))),
    ))
}

async fn login(ValidatedJson(input): ValidatedJson<FarmerOtpLogin>) -> Json<SuccessResponse> {
    Json(SuccessResponse::new("Success", format!("OTP accepted for {}", input.mobile)))
}

async fn admin_login(ValidatedJson(input): ValidatedJson<AdminLogin>) -> Json<SuccessResponse> {
    Json(SuccessResponse::new("Success", input.email))
}

fn app() -> Router {
    Router::new()
        .route("/farmers/register", post(register))
        .route("/farmers/login", post(login))
        .route("/admin/login", post(admin_login))
}

async fn send(uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app().oneshot(request).await.unwrap()
}

async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_registration_accepted() {
    let response = send(
        "/farmers/register",
        json!({
            "mobile": "9876543210",
            "otp": "123456",
            "fullName": "Lakshmi Devi",
            "pinCode": "",
            "geoLocation": {}
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(
        json_body(response).await,
        json!({"success": true, "farmer_id": "farmer-9876543210"})
    );
}

#[tokio::test]
async fn test_registration_errors_collected_in_envelope() {
    let response = send(
        "/farmers/register",
        json!({
            "mobile": "12345abcde",
            "fullName": "L",
            "geoLocation": [12.9, 77.5]
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

    let fields = body["error"]["fields"].as_array().unwrap();
    let codes: Vec<(&str, &str)> = fields
        .iter()
        .map(|f| (f["field"].as_str().unwrap(), f["code"].as_str().unwrap()))
        .collect();
    assert_eq!(
        codes,
        vec![
            ("mobile", "pattern_mismatch"),
            ("otp", "missing_required"),
            ("fullName", "length_out_of_range"),
            ("geoLocation", "malformed_structure"),
        ]
    );
}

#[tokio::test]
async fn test_otp_login_success_envelope() {
    let response = send("/farmers/login", json!({"mobile": "9876543210", "otp": "654321"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        json_body(response).await,
        json!({"Status": "Success", "Details": "OTP accepted for 9876543210"})
    );
}

#[tokio::test]
async fn test_admin_login_invalid_email() {
    let response = send("/admin/login", json!({"email": "admin.example.com", "password": "x"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"]["fields"][0]["field"], "email");
    assert_eq!(body["error"]["fields"][0]["code"], "invalid_email_syntax");
}

#[tokio::test]
async fn test_non_object_body_rejected() {
    let response = send("/farmers/login", json!(["9876543210", "123456"])).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = json_body(response).await;
    assert_eq!(body["error"]["fields"][0]["field"], "body");
    assert_eq!(body["error"]["fields"][0]["code"], "malformed_structure");
}

#[tokio::test]
async fn test_unparseable_body_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/farmers/login")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"mobile\": "))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "MALFORMED_BODY");
    assert!(body["error"].get("fields").is_none());
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/farmers/login")
        .body(Body::from(json!({"mobile": "9876543210", "otp": "123456"}).to_string()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
