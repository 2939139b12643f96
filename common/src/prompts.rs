//! プロンプト生成モジュール
//!
//! ユーザー入力（vibe）にスマホ壁紙向けの前置き・スタイル・品質指定を付加する。

use crate::filter::StyleFilter;

/// 先頭に付ける壁紙指定
pub const WALLPAPER_PREFIX: &str = "phone wallpaper";

/// 末尾に付けるアスペクト比・品質指定
pub const QUALITY_SUFFIX: &str = "9:16 aspect ratio, high detail, cinematic";

/// 1リクエストあたりの生成枚数
pub const IMAGE_COUNT: usize = 4;

pub const ASPECT_RATIO: &str = "9:16";

pub const OUTPUT_MIME_TYPE: &str = "image/jpeg";

pub const DEFAULT_MODEL: &str = "imagen-4.0-generate-001";

/// 最終プロンプトを組み立てる
///
/// `phone wallpaper, [<filter> style, ]<prompt>, 9:16 aspect ratio, high detail, cinematic`
///
/// 入力プロンプトは加工せずそのまま埋め込む。
pub fn build_wallpaper_prompt(prompt: &str, filter: Option<StyleFilter>) -> String {
    let style = filter
        .map(|f| format!("{} style, ", f.label()))
        .unwrap_or_default();

    format!("{WALLPAPER_PREFIX}, {style}{prompt}, {QUALITY_SUFFIX}")
}
