//! 画像生成プロバイダ
//!
//! プロキシはプロバイダを1リクエストにつき1回だけ呼び出す。
//! リトライ・キャッシュ・重複排除は行わない。

mod imagen;
mod types;

pub use imagen::ImagenGenerator;
pub use types::{GeneratedImage, ImageRequest};

use async_trait::async_trait;
use vibe_wallpapers_common::{to_data_url, IMAGE_COUNT};

use crate::error::{Result, WallpaperError};

#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, request: &ImageRequest) -> Result<Vec<GeneratedImage>>;
}

/// 最終プロンプトから壁紙4枚を生成し、Data URLで返す
///
/// 空の結果・枚数不足はエラー。多すぎる場合は先頭から IMAGE_COUNT 枚を使う。
/// Data URLのMIMEは常にリクエストした出力形式（JPEG）。
pub async fn generate_wallpapers(
    generator: &dyn ImageGenerator,
    model: &str,
    prompt: &str,
) -> Result<Vec<String>> {
    let request = ImageRequest::wallpaper(model, prompt);
    let images = generator.generate(&request).await?;

    match images.len() {
        0 => return Err(WallpaperError::NoImagesGenerated),
        n if n < IMAGE_COUNT => {
            return Err(WallpaperError::IncompleteResult {
                expected: IMAGE_COUNT,
                actual: n,
            })
        }
        n if n > IMAGE_COUNT => {
            tracing::debug!(received = n, "provider returned extra images, truncating");
        }
        _ => {}
    }

    Ok(images
        .iter()
        .take(IMAGE_COUNT)
        .map(|image| {
            if image.mime_type != request.mime_type {
                tracing::debug!(reported = %image.mime_type, "provider mime type ignored");
            }
            to_data_url(&request.mime_type, &image.bytes_base64)
        })
        .collect())
}
