use crate::error::{Result, WallpaperError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vibe_wallpapers_common::{DEFAULT_MODEL, GALLERY_STORAGE_KEY};

/// APIキーを読む環境変数
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

pub const DEFAULT_PROVIDER_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub host: String,
    pub port: u16,
    pub provider_base_url: String,
    /// CLIクライアントが呼び出すプロキシのURL
    pub proxy_endpoint: String,
    /// 未指定ならデータディレクトリ配下
    pub gallery_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            host: "127.0.0.1".into(),
            port: 3002,
            provider_base_url: DEFAULT_PROVIDER_BASE_URL.into(),
            proxy_endpoint: "http://localhost:3002/generate".into(),
            gallery_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| WallpaperError::Config("home directory not found".into()))?;
        Ok(home.join(".config").join("vibe-wallpapers").join("config.json"))
    }

    /// ギャラリーの保存ファイル
    pub fn gallery_file(&self) -> Result<PathBuf> {
        if let Some(path) = &self.gallery_path {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| WallpaperError::Config("data directory not found".into()))?;
        Ok(data_dir
            .join("vibe-wallpapers")
            .join(format!("{}.json", GALLERY_STORAGE_KEY)))
    }

    /// サーバー専用のシークレット。設定ファイルには保存しない
    pub fn api_key() -> Result<String> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(WallpaperError::MissingApiKey),
        }
    }
}
