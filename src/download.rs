//! 生成画像のファイル書き出し

use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::path::{Path, PathBuf};
use vibe_wallpapers_common::{
    extract_base64_from_data_url, extract_mime_type_from_data_url, file_extension_for_mime,
    wallpaper_id,
};

use crate::error::{Result, WallpaperError};

/// Data URLを画像バイト列に戻す
pub fn decode_data_url(data_url: &str) -> Result<Vec<u8>> {
    let payload = extract_base64_from_data_url(data_url)
        .ok_or_else(|| WallpaperError::ImageDecode("not a data URL".into()))?;
    STANDARD
        .decode(payload)
        .map_err(|e| WallpaperError::ImageDecode(e.to_string()))
}

/// `dir/vibe-wallpaper-<millis>-<index>.<ext>` に書き出す
pub fn write_image(dir: &Path, data_url: &str, millis: i64, index: usize) -> Result<PathBuf> {
    let bytes = decode_data_url(data_url)?;
    let ext = file_extension_for_mime(extract_mime_type_from_data_url(data_url));

    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("vibe-wallpaper-{}-{}.{}", millis, index, ext));
    std::fs::write(&path, bytes)?;
    Ok(path)
}

/// 現在時刻と乱数から壁紙IDを作る
pub fn new_wallpaper_id() -> String {
    wallpaper_id(chrono::Utc::now().timestamp_millis(), rand::random())
}
