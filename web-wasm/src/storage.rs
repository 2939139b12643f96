//! localStorageによるギャラリー保存

use gloo::storage::{LocalStorage, Storage};
use vibe_wallpapers_common::{Error, Gallery, GalleryStore, PersistentGallery, Result, GALLERY_STORAGE_KEY};
use wasm_bindgen::JsValue;

/// `vibewallpapers_gallery` スロット
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl GalleryStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>> {
        LocalStorage::raw()
            .get_item(GALLERY_STORAGE_KEY)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        LocalStorage::raw()
            .set_item(GALLERY_STORAGE_KEY, contents)
            .map_err(|e| Error::Storage(format!("{:?}", e)))
    }
}

/// 起動時にギャラリーを復元する。破損・読込失敗時は空にしてコンソールに記録
pub fn load_gallery() -> PersistentGallery<LocalStorageStore> {
    let store = LocalStorageStore;
    let gallery = match Gallery::read_from(&store) {
        Ok(gallery) => gallery,
        Err(e) => {
            web_sys::console::error_1(&JsValue::from_str(&format!(
                "Failed to load wallpapers from localStorage: {}",
                e
            )));
            Gallery::default()
        }
    };

    PersistentGallery::with_gallery(store, gallery)
}
