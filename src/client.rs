//! プロキシ呼び出しクライアント
//!
//! 失敗の詳細はログにのみ残し、呼び出し側には固定の `ServiceUnavailable` を返す。

use reqwest::Client;
use vibe_wallpapers_common::{GenerateRequest, GenerateResponse};

use crate::error::{Result, WallpaperError};

pub struct ProxyClient {
    client: Client,
    endpoint: String,
}

impl ProxyClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn generate(&self, request: &GenerateRequest) -> Result<Vec<String>> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, endpoint = %self.endpoint, "proxy request failed");
                WallpaperError::ServiceUnavailable
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(%status, "proxy returned an error");
            return Err(WallpaperError::ServiceUnavailable);
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "invalid proxy response");
            WallpaperError::ServiceUnavailable
        })?;

        if !body.is_complete() {
            tracing::error!(count = body.images.len(), "proxy returned an unexpected image count");
            return Err(WallpaperError::ServiceUnavailable);
        }

        Ok(body.images)
    }
}
