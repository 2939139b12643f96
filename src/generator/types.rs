use vibe_wallpapers_common::{ASPECT_RATIO, IMAGE_COUNT, OUTPUT_MIME_TYPE};

/// 画像生成プロバイダへのリクエスト
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRequest {
    pub model: String,
    pub prompt: String,
    pub count: usize,
    pub aspect_ratio: String,
    pub mime_type: String,
}

impl ImageRequest {
    /// 壁紙用の固定パラメータ（4枚・9:16・JPEG）
    pub fn wallpaper(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            count: IMAGE_COUNT,
            aspect_ratio: ASPECT_RATIO.into(),
            mime_type: OUTPUT_MIME_TYPE.into(),
        }
    }
}

/// 生成された画像（Base64）
///
/// `mime_type` はプロバイダの申告値。Data URLには使わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes_base64: String,
    pub mime_type: String,
}
