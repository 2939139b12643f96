//! リクエスト/レスポンス・保存データの型定義
//!
//! プロキシサーバーとクライアントで共有される型:
//! - GenerateRequest: `POST /generate` のリクエストボディ
//! - GenerateResponse / ErrorResponse: 同レスポンス
//! - SavedWallpaper: ギャラリーに保存された壁紙

use serde::{Deserialize, Serialize};

use crate::filter::StyleFilter;
use crate::prompts::IMAGE_COUNT;

/// 生成失敗時にクライアントへ返す固定メッセージ
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate images";

/// 壁紙生成リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    #[serde(default)]
    pub filter: Option<StyleFilter>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>, filter: Option<StyleFilter>) -> Self {
        Self {
            prompt: prompt.into(),
            filter,
        }
    }
}

/// 壁紙生成レスポンス（Data URLのリスト）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub images: Vec<String>,
}

impl GenerateResponse {
    /// 画像がちょうど IMAGE_COUNT 枚そろっているか
    pub fn is_complete(&self) -> bool {
        self.images.len() == IMAGE_COUNT
    }
}

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }

    pub fn generation_failed() -> Self {
        Self::new(GENERATION_FAILED_MESSAGE)
    }
}

/// ギャラリーに保存された壁紙
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedWallpaper {
    pub id: String,
    /// Data URL形式の画像
    pub image_url: String,
    /// 生成に使ったプロンプト（フィルタ適用前の入力）
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialize_without_filter() {
        let request = GenerateRequest::new("rainy cyberpunk lo-fi", None);
        let json = serde_json::to_string(&request).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"prompt":"rainy cyberpunk lo-fi","filter":null}"#);
    }

    #[test]
    fn test_request_deserialize_missing_filter() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"prompt":"serene magical forest"}"#).expect("デシリアライズ失敗");
        assert_eq!(request.prompt, "serene magical forest");
        assert_eq!(request.filter, None);
    }

    #[test]
    fn test_request_deserialize_with_filter() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"prompt":"city","filter":"Neon Punk"}"#).expect("デシリアライズ失敗");
        assert_eq!(request.filter, Some(StyleFilter::NeonPunk));
    }

    #[test]
    fn test_response_is_complete() {
        let mut response = GenerateResponse {
            images: vec!["a".into(), "b".into(), "c".into()],
        };
        assert!(!response.is_complete());
        response.images.push("d".into());
        assert!(response.is_complete());
    }

    #[test]
    fn test_error_response_generation_failed() {
        let json = serde_json::to_string(&ErrorResponse::generation_failed()).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"error":"Failed to generate images"}"#);
    }

    #[test]
    fn test_saved_wallpaper_storage_shape() {
        let wallpaper = SavedWallpaper {
            id: "1700000000000-0000abcd".to_string(),
            image_url: "data:image/jpeg;base64,AAAA".to_string(),
            prompt: "neon rain".to_string(),
        };
        let json = serde_json::to_string(&wallpaper).expect("シリアライズ失敗");
        assert!(json.contains("\"imageUrl\":\"data:image/jpeg;base64,AAAA\""));
        assert!(json.contains("\"prompt\":\"neon rain\""));
    }
}
