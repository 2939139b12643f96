use clap::{Parser, Subcommand};
use std::path::PathBuf;
use vibe_wallpapers_common::StyleFilter;

#[derive(Parser)]
#[command(name = "vibe-wallpapers")]
#[command(about = "AIスマホ壁紙生成 - プロキシサーバーとCLIクライアント", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 生成プロキシを起動（GEMINI_API_KEY必須）
    Serve {
        /// 待ち受けアドレス（省略時は設定ファイルの値）
        #[arg(long)]
        host: Option<String>,

        /// 待ち受けポート
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// プロキシ経由で壁紙を4枚生成
    Generate {
        /// vibeプロンプト
        #[arg(required = true)]
        prompt: String,

        /// スタイルフィルタ (Vintage/Minimalist/Psychedelic/Abstract/Neon Punk)
        #[arg(short, long)]
        filter: Option<StyleFilter>,

        /// プロキシのURL（省略時は設定ファイルの値）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 画像の保存先フォルダ
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// ギャラリーに保存する画像番号（1-4、複数指定可）
        #[arg(short, long, value_delimiter = ',')]
        save: Vec<usize>,
    },

    /// 保存済みギャラリーの管理
    Gallery {
        #[command(subcommand)]
        action: GalleryAction,
    },

    /// 設定を表示/編集
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 使用モデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// サーバーのポートを設定
        #[arg(long)]
        set_port: Option<u16>,

        /// CLIが呼び出すプロキシURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum GalleryAction {
    /// 一覧表示（新しい順）
    List,

    /// 削除
    Delete {
        #[arg(required = true)]
        id: String,
    },

    /// 画像ファイルとして書き出し
    Export {
        #[arg(required = true)]
        id: String,

        /// 出力ファイル（省略時はカレントに vibe-wallpaper-<時刻>.jpeg）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generate_with_filter_and_save() {
        let cli = Cli::try_parse_from([
            "vibe-wallpapers",
            "generate",
            "serene magical forest",
            "--filter",
            "neon-punk",
            "--save",
            "1,3",
        ])
        .expect("パース失敗");

        match cli.command {
            Commands::Generate { prompt, filter, save, .. } => {
                assert_eq!(prompt, "serene magical forest");
                assert_eq!(filter, Some(StyleFilter::NeonPunk));
                assert_eq!(save, vec![1, 3]);
            }
            _ => panic!("generate以外にパースされた"),
        }
    }

    #[test]
    fn test_parse_unknown_filter_fails() {
        let result = Cli::try_parse_from(["vibe-wallpapers", "generate", "x", "--filter", "sepia"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_gallery_delete() {
        let cli = Cli::try_parse_from(["vibe-wallpapers", "gallery", "delete", "123-abc"])
            .expect("パース失敗");
        assert!(matches!(
            cli.command,
            Commands::Gallery { action: GalleryAction::Delete { ref id } } if id == "123-abc"
        ));
    }
}
