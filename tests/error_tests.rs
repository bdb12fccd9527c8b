// Error handling tests
// Author: kelexine (https://github.com/kelexine)

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use img_alt_api::error::RelayError;

#[test]
fn test_error_display_messages() {
    let errors = vec![
        RelayError::MissingImage,
        RelayError::InvalidImageType,
        RelayError::ImageTooLarge,
        RelayError::GenerationFailed,
        RelayError::NotFound,
        RelayError::InvalidRequest("Bad request".to_string()),
        RelayError::Config("missing key".to_string()),
    ];

    for error in errors {
        let display = format!("{}", error);
        assert!(!display.is_empty(), "Error should have display message");
    }
}

#[test]
fn test_client_error_messages_are_fixed() {
    assert_eq!(format!("{}", RelayError::MissingImage), "No image provided");
    assert_eq!(
        format!("{}", RelayError::InvalidImageType),
        "Invalid image type"
    );
    assert_eq!(
        format!("{}", RelayError::ImageTooLarge),
        "Image size too large"
    );
    assert_eq!(
        format!("{}", RelayError::GenerationFailed),
        "Failed to generate description"
    );
    assert_eq!(format!("{}", RelayError::NotFound), "Not found");
}

#[test]
fn test_validation_errors_are_bad_requests() {
    for error in [
        RelayError::MissingImage,
        RelayError::InvalidImageType,
        RelayError::ImageTooLarge,
        RelayError::InvalidRequest("broken multipart".to_string()),
    ] {
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }
}

#[test]
fn test_not_found_status() {
    assert_eq!(
        RelayError::NotFound.into_response().status(),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn test_generation_failure_is_internal() {
    assert_eq!(
        RelayError::GenerationFailed.into_response().status(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[tokio::test]
async fn test_error_wire_shape() {
    let response = RelayError::NotFound.into_response();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json, serde_json::json!({ "error": "Not found" }));
}
