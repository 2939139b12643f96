//! エラーケーステスト
//!
//! エラー表示とHTTPレスポンスへの変換を検証

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use vibe_wallpapers::config::{Config, API_KEY_ENV};
use vibe_wallpapers::error::WallpaperError;
use vibe_wallpapers_common::ErrorResponse;

/// WallpaperErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        WallpaperError::Config("bad address".to_string()),
        WallpaperError::MissingApiKey,
        WallpaperError::InvalidRequest("prompt must not be empty".to_string()),
        WallpaperError::ApiCall("status 500".to_string()),
        WallpaperError::NoImagesGenerated,
        WallpaperError::IncompleteResult { expected: 4, actual: 2 },
        WallpaperError::GalleryNotFound("123".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "Error display should not be empty");
    }
}

#[test]
fn test_service_unavailable_message() {
    assert_eq!(
        WallpaperError::ServiceUnavailable.to_string(),
        "Failed to communicate with the image generation service."
    );
}

#[test]
fn test_missing_api_key_mentions_env() {
    assert!(WallpaperError::MissingApiKey.to_string().contains(API_KEY_ENV));
}

#[test]
fn test_status_codes() {
    assert_eq!(
        WallpaperError::InvalidRequest("x".into()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        WallpaperError::NoImagesGenerated.status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
    assert_eq!(
        WallpaperError::ApiCall("x".into()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

/// 生成失敗時は固定メッセージのみ返す
#[tokio::test]
async fn test_into_response_hides_cause() {
    let response = WallpaperError::ApiCall("status 403: API key invalid".into()).into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, ErrorResponse::generation_failed());
}

#[tokio::test]
async fn test_into_response_invalid_request_keeps_reason() {
    let response = WallpaperError::InvalidRequest("prompt must not be empty".into()).into_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body.error, "prompt must not be empty");
}

/// APIキー未設定なら起動できない
#[test]
fn test_api_key_required() {
    let previous = std::env::var(API_KEY_ENV).ok();

    std::env::remove_var(API_KEY_ENV);
    assert!(matches!(Config::api_key(), Err(WallpaperError::MissingApiKey)));

    std::env::set_var(API_KEY_ENV, "   ");
    assert!(matches!(Config::api_key(), Err(WallpaperError::MissingApiKey)));

    std::env::set_var(API_KEY_ENV, "test-key");
    assert_eq!(Config::api_key().unwrap(), "test-key");

    match previous {
        Some(value) => std::env::set_var(API_KEY_ENV, value),
        None => std::env::remove_var(API_KEY_ENV),
    }
}
