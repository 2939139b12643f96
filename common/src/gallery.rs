//! ギャラリー（保存済み壁紙）モジュール
//!
//! ギャラリー全体を1つの名前付きスロットにJSONで保存する。
//! 変更のたびに全体を書き戻し、起動時に全体を読み込む。

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::SavedWallpaper;

/// 保存スロット名
pub const GALLERY_STORAGE_KEY: &str = "vibewallpapers_gallery";

/// ギャラリーの永続化先
///
/// スロット全体を文字列として読み書きする。未保存なら `read` は `Ok(None)`。
pub trait GalleryStore {
    fn read(&self) -> Result<Option<String>>;
    fn write(&mut self, contents: &str) -> Result<()>;
}

/// メモリ上のストア
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            slot: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl GalleryStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.slot.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        self.slot = Some(contents.to_string());
        Ok(())
    }
}

/// 壁紙ID (`<生成時刻ms>-<乱数8桁hex>`)
pub fn wallpaper_id(millis: i64, suffix: u32) -> String {
    format!("{}-{:08x}", millis, suffix)
}

/// 保存済み壁紙の一覧（新しい順）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallery {
    wallpapers: Vec<SavedWallpaper>,
}

impl Gallery {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// ストアから読み込む（破損時はエラー）
    pub fn read_from<S: GalleryStore + ?Sized>(store: &S) -> Result<Self> {
        match store.read()? {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }

    pub fn contains_image(&self, image_url: &str) -> bool {
        self.wallpapers.iter().any(|w| w.image_url == image_url)
    }

    /// 先頭に追加。同じ画像が既にあれば何もせず None
    pub fn insert(&mut self, image_url: &str, prompt: &str, id: String) -> Option<&SavedWallpaper> {
        if self.contains_image(image_url) {
            return None;
        }

        self.wallpapers.insert(
            0,
            SavedWallpaper {
                id,
                image_url: image_url.to_string(),
                prompt: prompt.to_string(),
            },
        );
        self.wallpapers.first()
    }

    pub fn remove(&mut self, id: &str) -> Option<SavedWallpaper> {
        let index = self.wallpapers.iter().position(|w| w.id == id)?;
        Some(self.wallpapers.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&SavedWallpaper> {
        self.wallpapers.iter().find(|w| w.id == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SavedWallpaper> {
        self.wallpapers.iter()
    }

    pub fn as_slice(&self) -> &[SavedWallpaper] {
        &self.wallpapers
    }

    pub fn len(&self) -> usize {
        self.wallpapers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.wallpapers.is_empty()
    }
}

/// ストアと同期されたギャラリー
#[derive(Debug, Clone)]
pub struct PersistentGallery<S> {
    store: S,
    gallery: Gallery,
}

impl<S: GalleryStore> PersistentGallery<S> {
    /// ストアから復元する
    ///
    /// 未保存なら空。読込失敗・破損時も空のギャラリーで起動し、警告ログのみ出す。
    pub fn open(store: S) -> Self {
        let gallery = match Gallery::read_from(&store) {
            Ok(gallery) => {
                tracing::debug!(count = gallery.len(), "gallery loaded");
                gallery
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to load gallery, starting empty");
                Gallery::default()
            }
        };

        Self { store, gallery }
    }

    /// 読込済みのギャラリーと組み合わせる
    pub fn with_gallery(store: S, gallery: Gallery) -> Self {
        Self { store, gallery }
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 壁紙を保存する。既に同じ画像があれば `Ok(false)`
    ///
    /// 書き込みに失敗してもメモリ上の追加は残る。
    pub fn save(&mut self, image_url: &str, prompt: &str, id: String) -> Result<bool> {
        if self.gallery.insert(image_url, prompt, id).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// 壁紙を削除する。該当IDがなければ `Ok(false)`
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if self.gallery.remove(id).is_none() {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    fn persist(&mut self) -> Result<()> {
        let json = self.gallery.to_json()?;
        self.store.write(&json)?;
        tracing::debug!(count = self.gallery.len(), "gallery persisted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const IMAGE_A: &str = "data:image/jpeg;base64,AAAA";
    const IMAGE_B: &str = "data:image/jpeg;base64,BBBB";

    /// 書き込みに必ず失敗するストア
    struct BrokenStore;

    impl GalleryStore for BrokenStore {
        fn read(&self) -> Result<Option<String>> {
            Err(Error::Storage("quota exceeded".to_string()))
        }

        fn write(&mut self, _contents: &str) -> Result<()> {
            Err(Error::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_wallpaper_id_format() {
        assert_eq!(wallpaper_id(1700000000000, 0xab), "1700000000000-000000ab");
    }

    #[test]
    fn test_insert_prepends_newest_first() {
        let mut gallery = Gallery::default();
        gallery.insert(IMAGE_A, "first", "1".into());
        gallery.insert(IMAGE_B, "second", "2".into());

        let ids: Vec<&str> = gallery.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_insert_same_image_twice_is_ignored() {
        let mut gallery = Gallery::default();
        assert!(gallery.insert(IMAGE_A, "first", "1".into()).is_some());
        let before = gallery.clone();

        assert!(gallery.insert(IMAGE_A, "other prompt", "2".into()).is_none());
        assert_eq!(gallery, before);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut gallery = Gallery::default();
        gallery.insert(IMAGE_A, "first", "1".into());
        let before = gallery.clone();

        assert!(gallery.remove("missing").is_none());
        assert_eq!(gallery, before);
    }

    #[test]
    fn test_json_is_plain_array() {
        let mut gallery = Gallery::default();
        gallery.insert(IMAGE_A, "first", "1".into());
        let json = gallery.to_json().expect("シリアライズ失敗");
        assert!(json.starts_with('['));
        assert!(json.contains("\"imageUrl\""));
    }

    #[test]
    fn test_open_empty_store() {
        let gallery = PersistentGallery::open(MemoryStore::default());
        assert!(gallery.gallery().is_empty());
    }

    #[test]
    fn test_open_corrupt_store_starts_empty() {
        let gallery = PersistentGallery::open(MemoryStore::with_contents("{not json"));
        assert!(gallery.gallery().is_empty());
    }

    #[test]
    fn test_open_unreadable_store_starts_empty() {
        let gallery = PersistentGallery::open(BrokenStore);
        assert!(gallery.gallery().is_empty());
    }

    #[test]
    fn test_save_persists_whole_gallery() {
        let mut gallery = PersistentGallery::open(MemoryStore::default());
        assert!(gallery.save(IMAGE_A, "neon rain", "1".into()).expect("保存失敗"));
        assert!(gallery.save(IMAGE_B, "desert dusk", "2".into()).expect("保存失敗"));

        let stored = gallery.store().contents().expect("未保存");
        assert_eq!(stored, gallery.gallery().to_json().expect("シリアライズ失敗"));
    }

    #[test]
    fn test_duplicate_save_does_not_write() {
        let mut gallery = PersistentGallery::open(MemoryStore::default());
        gallery.save(IMAGE_A, "neon rain", "1".into()).expect("保存失敗");
        let stored = gallery.store().contents().map(str::to_string);

        assert!(!gallery.save(IMAGE_A, "neon rain", "2".into()).expect("保存失敗"));
        assert_eq!(gallery.gallery().len(), 1);
        assert_eq!(gallery.store().contents().map(str::to_string), stored);
    }

    #[test]
    fn test_delete_missing_id_leaves_store_untouched() {
        let mut gallery = PersistentGallery::open(MemoryStore::default());
        assert!(!gallery.delete("missing").expect("削除失敗"));
        assert!(gallery.store().contents().is_none());
    }

    #[test]
    fn test_reopen_reproduces_order() {
        let mut gallery = PersistentGallery::open(MemoryStore::default());
        gallery.save(IMAGE_A, "first", "1".into()).expect("保存失敗");
        gallery.save(IMAGE_B, "second", "2".into()).expect("保存失敗");
        gallery.save("data:image/jpeg;base64,CCCC", "third", "3".into()).expect("保存失敗");
        gallery.delete("2").expect("削除失敗");

        let reopened = PersistentGallery::open(gallery.store().clone());
        assert_eq!(reopened.gallery(), gallery.gallery());
        let ids: Vec<&str> = reopened.gallery().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "1"]);
    }

    #[test]
    fn test_write_failure_keeps_memory_state() {
        let mut gallery = PersistentGallery::with_gallery(BrokenStore, Gallery::default());
        let result = gallery.save(IMAGE_A, "neon rain", "1".into());

        assert!(matches!(result, Err(Error::Storage(_))));
        assert!(gallery.gallery().contains_image(IMAGE_A));
    }
}
