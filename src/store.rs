//! ギャラリーのファイル保存
//!
//! 1つのJSONファイルをギャラリーの保存スロットとして扱う。

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use vibe_wallpapers_common::{GalleryStore, PersistentGallery};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルからギャラリーを復元（破損時は空）
    pub fn open_gallery(path: impl Into<PathBuf>) -> PersistentGallery<FileStore> {
        PersistentGallery::open(Self::new(path))
    }
}

impl GalleryStore for FileStore {
    fn read(&self) -> vibe_wallpapers_common::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// 一時ファイルに書いてからリネームする
    fn write(&mut self, contents: &str) -> vibe_wallpapers_common::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
