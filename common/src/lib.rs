//! VibeWallpapers Common Library
//!
//! プロキシサーバー・CLI・Web(WASM)クライアントで共有される型とロジック

pub mod types;
pub mod filter;
pub mod prompts;
pub mod data_url;
pub mod error;
pub mod gallery;
pub mod session;

pub use types::{ErrorResponse, GenerateRequest, GenerateResponse, SavedWallpaper, GENERATION_FAILED_MESSAGE};
pub use filter::StyleFilter;
pub use prompts::{
    build_wallpaper_prompt, ASPECT_RATIO, DEFAULT_MODEL, IMAGE_COUNT, OUTPUT_MIME_TYPE,
};
pub use data_url::{
    download_file_name, extract_base64_from_data_url, extract_mime_type_from_data_url,
    file_extension_for_mime, to_data_url,
};
pub use error::{Error, Result};
pub use gallery::{
    wallpaper_id, Gallery, GalleryStore, MemoryStore, PersistentGallery, GALLERY_STORAGE_KEY,
};
pub use session::{GenerationStatus, Session, FAILURE_PREFIX};
