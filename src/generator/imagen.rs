//! Imagen API連携
//!
//! `POST {base_url}/{model}:predict` に1回だけリクエストし、
//! `predictions[].bytesBase64Encoded` を生成画像として返す。

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GeneratedImage, ImageGenerator, ImageRequest};
use crate::config::DEFAULT_PROVIDER_BASE_URL;
use crate::error::{Result, WallpaperError};

/// Imagen APIリクエスト
#[derive(Serialize)]
struct PredictRequest<'a> {
    instances: Vec<Instance<'a>>,
    parameters: Parameters<'a>,
}

#[derive(Serialize)]
struct Instance<'a> {
    prompt: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Parameters<'a> {
    sample_count: usize,
    aspect_ratio: &'a str,
    output_options: OutputOptions<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions<'a> {
    mime_type: &'a str,
}

/// Imagen APIレスポンス
#[derive(Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    #[serde(default)]
    bytes_base64_encoded: Option<String>,
    #[serde(default)]
    mime_type: Option<String>,
    /// 安全フィルタで除外された理由
    #[serde(default)]
    rai_filtered_reason: Option<String>,
}

pub struct ImagenGenerator {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ImagenGenerator {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_PROVIDER_BASE_URL)
    }

    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!("{}/{}:predict", self.base_url, model)
    }
}

#[async_trait]
impl ImageGenerator for ImagenGenerator {
    async fn generate(&self, request: &ImageRequest) -> Result<Vec<GeneratedImage>> {
        let body = PredictRequest {
            instances: vec![Instance { prompt: &request.prompt }],
            parameters: Parameters {
                sample_count: request.count,
                aspect_ratio: &request.aspect_ratio,
                output_options: OutputOptions {
                    mime_type: &request.mime_type,
                },
            },
        };

        tracing::debug!(model = %request.model, count = request.count, "calling imagen");

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(WallpaperError::ApiCall(format!("status {}: {}", status, text)));
        }

        let payload: PredictResponse = response
            .json()
            .await
            .map_err(|e| WallpaperError::ApiParse(e.to_string()))?;

        Ok(parse_predictions(payload, &request.mime_type))
    }
}

fn parse_predictions(payload: PredictResponse, fallback_mime: &str) -> Vec<GeneratedImage> {
    payload
        .predictions
        .into_iter()
        .filter_map(|prediction| match prediction.bytes_base64_encoded {
            Some(bytes) if !bytes.is_empty() => Some(GeneratedImage {
                bytes_base64: bytes,
                mime_type: prediction
                    .mime_type
                    .unwrap_or_else(|| fallback_mime.to_string()),
            }),
            _ => {
                tracing::debug!(reason = ?prediction.rai_filtered_reason, "prediction without image skipped");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_request_serialize() {
        let request = PredictRequest {
            instances: vec![Instance { prompt: "phone wallpaper, neon" }],
            parameters: Parameters {
                sample_count: 4,
                aspect_ratio: "9:16",
                output_options: OutputOptions { mime_type: "image/jpeg" },
            },
        };

        let json = serde_json::to_value(&request).expect("シリアライズ失敗");
        assert_eq!(json["instances"][0]["prompt"], "phone wallpaper, neon");
        assert_eq!(json["parameters"]["sampleCount"], 4);
        assert_eq!(json["parameters"]["aspectRatio"], "9:16");
        assert_eq!(json["parameters"]["outputOptions"]["mimeType"], "image/jpeg");
    }

    #[test]
    fn test_parse_predictions_skips_filtered() {
        let json = r#"{
            "predictions": [
                {"bytesBase64Encoded": "AAA", "mimeType": "image/jpeg"},
                {"raiFilteredReason": "blocked"},
                {"bytesBase64Encoded": "BBB"}
            ]
        }"#;
        let payload: PredictResponse = serde_json::from_str(json).expect("デシリアライズ失敗");
        let images = parse_predictions(payload, "image/jpeg");

        assert_eq!(images.len(), 2);
        assert_eq!(images[0].bytes_base64, "AAA");
        assert_eq!(images[1].mime_type, "image/jpeg");
    }

    #[test]
    fn test_parse_predictions_missing_field() {
        let payload: PredictResponse = serde_json::from_str("{}").expect("デシリアライズ失敗");
        assert!(parse_predictions(payload, "image/jpeg").is_empty());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let generator = ImagenGenerator::with_base_url("key", "http://localhost:9999/models/");
        assert_eq!(
            generator.endpoint("imagen-4.0-generate-001"),
            "http://localhost:9999/models/imagen-4.0-generate-001:predict"
        );
    }
}
