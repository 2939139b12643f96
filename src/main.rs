use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{fmt, EnvFilter};
use vibe_wallpapers::{cli, client, config, download, error, generator, server, store};
use cli::{Cli, Commands, GalleryAction};
use config::Config;
use error::{Result, WallpaperError};
use vibe_wallpapers_common::{download_file_name, extract_mime_type_from_data_url, GenerationStatus, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .envがあれば読み込む
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    run(cli.command, config).await?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).init();
}

async fn run(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Serve { host, port } => {
            // APIキーがなければ起動しない
            let api_key = Config::api_key()?;

            let host = host.unwrap_or_else(|| config.host.clone());
            let port = port.unwrap_or(config.port);
            let addr: SocketAddr = format!("{}:{}", host, port)
                .parse()
                .map_err(|e| WallpaperError::Config(format!("invalid address {}:{}: {}", host, port, e)))?;

            let imagen = generator::ImagenGenerator::with_base_url(api_key, &config.provider_base_url);
            let state = server::AppState::new(Arc::new(imagen), &config.model);
            server::run(addr, state).await?;
        }

        Commands::Generate { prompt, filter, endpoint, output, save } => {
            println!("🎨 vibe-wallpapers - 壁紙生成\n");

            let endpoint = endpoint.unwrap_or_else(|| config.proxy_endpoint.clone());
            let proxy = client::ProxyClient::new(endpoint);

            let mut session = Session::new();
            session.set_filter(filter);
            let request = session
                .submit(&prompt)
                .ok_or_else(|| WallpaperError::InvalidRequest("prompt must not be empty".into()))?;

            println!("生成中... ({})", proxy.endpoint());
            let outcome = proxy.generate(&request).await;
            session.complete(outcome);

            if session.status() == GenerationStatus::Failed {
                let message = session.error().unwrap_or_default();
                eprintln!("✖ {}", message);
                return Err(WallpaperError::ServiceUnavailable);
            }
            println!("✔ {}枚の壁紙を生成\n", session.images().len());

            // 画像の書き出し
            if let Some(dir) = output {
                let millis = chrono::Utc::now().timestamp_millis();
                for (i, image) in session.images().iter().enumerate() {
                    let path = download::write_image(&dir, image, millis, i + 1)?;
                    println!("  [{}] {}", i + 1, path.display());
                }
            }

            // ギャラリーへ保存
            if !save.is_empty() {
                let mut gallery = store::FileStore::open_gallery(config.gallery_file()?);
                for index in save {
                    let Some(image) = index.checked_sub(1).and_then(|i| session.images().get(i)).cloned() else {
                        eprintln!("画像番号が範囲外です: {}", index);
                        continue;
                    };
                    session.select_image(&image);
                    if session.save_selected(&mut gallery, download::new_wallpaper_id())? {
                        println!("✔ [{}] をギャラリーに保存", index);
                    } else {
                        println!("- [{}] は保存済み", index);
                    }
                }
                session.close_image();
            }
        }

        Commands::Gallery { action } => {
            let path = config.gallery_file()?;
            let mut gallery = store::FileStore::open_gallery(&path);

            match action {
                GalleryAction::List => {
                    if gallery.gallery().is_empty() {
                        println!("ギャラリーは空です: {}", path.display());
                    }
                    for wallpaper in gallery.gallery().iter() {
                        println!("{}  {}", wallpaper.id, wallpaper.prompt);
                    }
                }
                GalleryAction::Delete { id } => {
                    if gallery.delete(&id)? {
                        println!("✔ 削除しました: {}", id);
                    } else {
                        println!("該当する壁紙がありません: {}", id);
                    }
                }
                GalleryAction::Export { id, output } => {
                    let wallpaper = gallery
                        .gallery()
                        .get(&id)
                        .ok_or_else(|| WallpaperError::GalleryNotFound(id.clone()))?;
                    let output = output.unwrap_or_else(|| {
                        let millis = chrono::Utc::now().timestamp_millis() as u64;
                        let mime = extract_mime_type_from_data_url(&wallpaper.image_url);
                        download_file_name(millis, mime).into()
                    });
                    let bytes = download::decode_data_url(&wallpaper.image_url)?;
                    std::fs::write(&output, bytes)?;
                    println!("✔ 書き出しました: {}", output.display());
                }
            }
        }

        Commands::Config { show, set_model, set_port, set_endpoint } => {
            let mut config = config;
            let changed = set_model.is_some() || set_port.is_some() || set_endpoint.is_some();

            if let Some(model) = set_model {
                config.model = model;
            }
            if let Some(port) = set_port {
                config.port = port;
            }
            if let Some(endpoint) = set_endpoint {
                config.proxy_endpoint = endpoint;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                println!("設定:");
                println!("  モデル: {}", config.model);
                println!("  待ち受け: {}:{}", config.host, config.port);
                println!("  プロキシURL: {}", config.proxy_endpoint);
                println!("  ギャラリー: {}", config.gallery_file()?.display());
                println!("  APIキー: {}", if Config::api_key().is_ok() { "設定済み" } else { "未設定" });
            }
        }
    }

    Ok(())
}
