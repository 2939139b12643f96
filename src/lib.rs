//! VibeWallpapers - AIスマホ壁紙生成
//!
//! - server: Imagenへの単一エンドポイントプロキシ
//! - client / store / download: CLIクライアント側（プロキシ呼び出し・ギャラリー・画像書き出し）

pub mod cli;
pub mod client;
pub mod config;
pub mod download;
pub mod error;
pub mod generator;
pub mod server;
pub mod store;
