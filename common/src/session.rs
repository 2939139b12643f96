//! クライアントセッション（生成フローの状態機械）
//!
//! Idle → Loading → {Success, Failed}。通信そのものは呼び出し側が行い、
//! `submit` / `remix` で送るべきリクエストを受け取り、結果を `complete` で戻す。

use std::fmt::Display;

use crate::error::Result;
use crate::filter::StyleFilter;
use crate::gallery::{Gallery, GalleryStore, PersistentGallery};
use crate::types::GenerateRequest;

/// 失敗メッセージの接頭辞
pub const FAILURE_PREFIX: &str = "Failed to generate images.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenerationStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

impl GenerationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStatus::Idle => "idle",
            GenerationStatus::Loading => "loading",
            GenerationStatus::Success => "success",
            GenerationStatus::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    filter: Option<StyleFilter>,
    status: GenerationStatus,
    images: Vec<String>,
    error: Option<String>,
    selected_image: Option<String>,
    /// 直近に完了したリクエスト（リミックス用）
    last_request: Option<GenerateRequest>,
    in_flight: Option<GenerateRequest>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 入力プロンプトで生成を開始する
    ///
    /// 空白のみのプロンプト、または生成中なら何もせず None。
    pub fn submit(&mut self, prompt: &str) -> Option<GenerateRequest> {
        if prompt.trim().is_empty() || self.is_loading() {
            return None;
        }

        let request = GenerateRequest::new(prompt, self.filter);
        Some(self.start(request))
    }

    /// 直前のリクエストをそのまま再実行する（repeat last request）
    ///
    /// 入力欄ではなく記録済みのプロンプトとフィルタを使う。
    pub fn remix(&mut self) -> Option<GenerateRequest> {
        let request = self.last_request.clone()?;
        self.selected_image = None;

        if self.is_loading() {
            return None;
        }
        Some(self.start(request))
    }

    fn start(&mut self, request: GenerateRequest) -> GenerateRequest {
        self.status = GenerationStatus::Loading;
        self.error = None;
        self.images.clear();
        self.selected_image = None;
        self.in_flight = Some(request.clone());
        request
    }

    /// 生成結果を反映する。生成中でなければ無視
    pub fn complete<E: Display>(&mut self, outcome: std::result::Result<Vec<String>, E>) {
        let Some(request) = self.in_flight.take() else {
            return;
        };

        match outcome {
            Ok(images) => {
                self.images = images;
                self.error = None;
                self.status = GenerationStatus::Success;
            }
            Err(e) => {
                self.images.clear();
                self.error = Some(format!("{} {}", FAILURE_PREFIX, e));
                self.status = GenerationStatus::Failed;
            }
        }

        self.last_request = Some(request);
    }

    /// 全画面表示する画像を選ぶ（現在の結果に含まれる画像のみ）
    pub fn select_image(&mut self, image_url: &str) -> bool {
        if !self.images.iter().any(|img| img == image_url) {
            return false;
        }
        self.selected_image = Some(image_url.to_string());
        true
    }

    pub fn close_image(&mut self) {
        self.selected_image = None;
    }

    pub fn set_filter(&mut self, filter: Option<StyleFilter>) {
        self.filter = filter;
    }

    pub fn filter(&self) -> Option<StyleFilter> {
        self.filter
    }

    pub fn status(&self) -> GenerationStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == GenerationStatus::Loading
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_image(&self) -> Option<&str> {
        self.selected_image.as_deref()
    }

    pub fn last_request(&self) -> Option<&GenerateRequest> {
        self.last_request.as_ref()
    }

    pub fn can_remix(&self) -> bool {
        self.last_request.is_some() && !self.is_loading()
    }

    /// 選択中の画像をギャラリーに保存する
    ///
    /// 未選択、またはプロンプト未記録なら `Ok(false)`。
    pub fn save_selected<S: GalleryStore>(
        &self,
        gallery: &mut PersistentGallery<S>,
        id: String,
    ) -> Result<bool> {
        let (Some(image_url), Some(request)) = (self.selected_image(), self.last_request()) else {
            return Ok(false);
        };
        gallery.save(image_url, &request.prompt, id)
    }

    pub fn is_selected_saved(&self, gallery: &Gallery) -> bool {
        self.selected_image()
            .is_some_and(|image_url| gallery.contains_image(image_url))
    }
}
