//! プロキシHTTPサーバー
//!
//! - POST /generate - プロンプトを組み立ててImagenで壁紙4枚を生成
//!
//! CORSは全オリジン許可、認証なし。リクエストごとに状態を持たない。

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, Method},
    routing::post,
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::cors::{Any, CorsLayer};
use vibe_wallpapers_common::{build_wallpaper_prompt, GenerateRequest, GenerateResponse};

use crate::error::{Result, WallpaperError};
use crate::generator::{generate_wallpapers, ImageGenerator};

/// 不正なリクエストボディへの応答文言（パース詳細はログのみ）
pub const INVALID_BODY_MESSAGE: &str = "invalid request body";
/// 空プロンプトへの応答文言
pub const EMPTY_PROMPT_MESSAGE: &str = "prompt must not be empty";

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<dyn ImageGenerator>,
    pub model: String,
}

impl AppState {
    pub fn new(generator: Arc<dyn ImageGenerator>, model: impl Into<String>) -> Self {
        Self {
            generator,
            model: model.into(),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/generate", post(generate_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn run(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

async fn generate_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!(detail = %e.body_text(), "malformed generate request");
        WallpaperError::InvalidRequest(INVALID_BODY_MESSAGE.into())
    })?;

    if request.prompt.trim().is_empty() {
        return Err(WallpaperError::InvalidRequest(EMPTY_PROMPT_MESSAGE.into()));
    }

    let prompt = build_wallpaper_prompt(&request.prompt, request.filter);
    tracing::info!(filter = ?request.filter, model = %state.model, "generating wallpapers");

    let images = generate_wallpapers(state.generator.as_ref(), &state.model, &prompt).await?;
    Ok(Json(GenerateResponse { images }))
}
