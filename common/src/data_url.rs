//! Data URLユーティリティ
//!
//! 生成画像は `data:image/jpeg;base64,...` 形式でやり取りする。

/// MIMEタイプとBase64ペイロードからData URLを組み立てる
pub fn to_data_url(mime_type: &str, base64_data: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_data)
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// 抽出できない場合は "image/jpeg" を返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("image/jpeg")
}

/// ダウンロード用の拡張子
pub fn file_extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type {
        "image/jpeg" | "image/jpg" => "jpeg",
        "image/png" => "png",
        "image/webp" => "webp",
        _ => "img",
    }
}

/// ダウンロード時のファイル名 (`vibe-wallpaper-<millis>.<ext>`)
pub fn download_file_name(millis: u64, mime_type: &str) -> String {
    format!("vibe-wallpaper-{}.{}", millis, file_extension_for_mime(mime_type))
}
