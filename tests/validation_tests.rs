mod common;

use axum::http::{Method, StatusCode};
use common::{RequestBuilder, TestHarness};

#[tokio::test]
async fn test_missing_threshold_is_unprocessable() {
    let harness = TestHarness::new();

    let response = harness
        .make_request(RequestBuilder::analytics(r#"{"regions": ["apac"]}"#))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_fractional_threshold_is_unprocessable() {
    let harness = TestHarness::new();

    let response = harness
        .make_request(RequestBuilder::analytics(
            r#"{"regions": ["apac"], "threshold_ms": 183.5}"#,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_non_string_region_is_unprocessable() {
    let harness = TestHarness::new();

    let response = harness
        .make_request(RequestBuilder::analytics(
            r#"{"regions": ["apac", 7], "threshold_ms": 183}"#,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_regions_must_be_a_list() {
    let harness = TestHarness::new();

    let response = harness
        .make_request(RequestBuilder::analytics(
            r#"{"regions": "apac", "threshold_ms": 183}"#,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_malformed_json_is_rejected() {
    let harness = TestHarness::new();

    let response = harness
        .make_request(RequestBuilder::analytics(r#"{"regions": ["apac""#))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_is_rejected() {
    let harness = TestHarness::new();

    let response = harness
        .make_request(RequestBuilder::custom_request(
            "/analytics",
            Method::POST,
            &[],
            r#"{"regions": ["apac"], "threshold_ms": 183}"#,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let harness = TestHarness::new();

    let regions = vec!["\"x\""; 300_000].join(",");
    let body = format!(r#"{{"regions": [{}], "threshold_ms": 1}}"#, regions);

    let response = harness.make_request(RequestBuilder::analytics(&body)).await;

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn test_integral_float_threshold_is_accepted() {
    let harness = TestHarness::new();

    let (status, body) = harness
        .request_json(RequestBuilder::analytics(
            r#"{"regions": ["apac"], "threshold_ms": 183.0}"#,
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["apac"]["breaches"], 4);
}

#[tokio::test]
async fn test_numeric_string_threshold_is_accepted() {
    let harness = TestHarness::new();

    let (status, body) = harness
        .request_json(RequestBuilder::analytics(
            r#"{"regions": ["apac"], "threshold_ms": "183"}"#,
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["apac"]["breaches"], 4);
}

#[tokio::test]
async fn test_non_numeric_string_threshold_is_unprocessable() {
    let harness = TestHarness::new();

    let response = harness
        .make_request(RequestBuilder::analytics(
            r#"{"regions": ["apac"], "threshold_ms": "fast"}"#,
        ))
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
