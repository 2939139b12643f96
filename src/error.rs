use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use vibe_wallpapers_common::ErrorResponse;

#[derive(Error, Debug)]
pub enum WallpaperError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("GEMINI_API_KEY is not set. Export it or add it to a .env file")]
    MissingApiKey,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("API call failed: {0}")]
    ApiCall(String),

    #[error("Failed to parse API response: {0}")]
    ApiParse(String),

    #[error("No images generated")]
    NoImagesGenerated,

    #[error("Expected {expected} images, got {actual}")]
    IncompleteResult { expected: usize, actual: usize },

    #[error("Failed to communicate with the image generation service.")]
    ServiceUnavailable,

    #[error("Wallpaper not found in gallery: {0}")]
    GalleryNotFound(String),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Gallery storage error: {0}")]
    Gallery(#[from] vibe_wallpapers_common::Error),
}

pub type Result<T> = std::result::Result<T, WallpaperError>;

impl WallpaperError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WallpaperError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// プロキシのエラーレスポンス
///
/// リクエスト不正以外は原因をログに残し、クライアントには固定メッセージのみ返す。
impl IntoResponse for WallpaperError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            WallpaperError::InvalidRequest(reason) => {
                tracing::warn!(%reason, "rejected generate request");
                ErrorResponse::new(reason.clone())
            }
            other => {
                tracing::error!(error = %other, "image generation failed");
                ErrorResponse::generation_failed()
            }
        };

        (status, Json(body)).into_response()
    }
}
