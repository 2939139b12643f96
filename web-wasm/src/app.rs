//! メインアプリケーションコンポーネント

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;
use crate::api::proxy;
use crate::components::{
    filter_selector::FilterSelector,
    gallery_view::GalleryView,
    header::Header,
    image_grid::ImageGrid,
    image_modal::ImageModal,
    loader::Loader,
    prompt_form::PromptForm,
};
use crate::storage::{self, LocalStorageStore};
use vibe_wallpapers_common::{
    download_file_name, extract_mime_type_from_data_url, wallpaper_id, GenerateRequest,
    GenerationStatus, PersistentGallery, Session,
};

/// リミックス時にモーダルを閉じてから再生成するまでの待ち時間
const REMIX_DELAY_MS: u32 = 100;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let session = RwSignal::new(Session::new());
    let gallery: RwSignal<PersistentGallery<LocalStorageStore>> =
        RwSignal::new(storage::load_gallery());
    let (prompt, set_prompt) = signal(String::new());
    let (gallery_open, set_gallery_open) = signal(false);

    let status = Memo::new(move |_| session.with(|s| s.status()));
    let is_loading = Signal::derive(move || session.with(|s| s.is_loading()));
    let selected_filter = Signal::derive(move || session.with(|s| s.filter()));
    let images = Signal::derive(move || session.with(|s| s.images().to_vec()));
    let can_remix = Signal::derive(move || session.with(|s| s.can_remix()));
    let is_saved = Signal::derive(move || {
        session.with(|s| gallery.with(|g| s.is_selected_saved(g.gallery())))
    });
    let wallpapers = Signal::derive(move || gallery.with(|g| g.gallery().as_slice().to_vec()));

    // 生成リクエスト送信
    let run_request = move |request: GenerateRequest| {
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = proxy::generate_wallpapers(&request).await;
            session.update(|s| s.complete(outcome));
        });
    };

    let on_submit = move || {
        let input = prompt.get_untracked();
        let mut request = None;
        session.update(|s| request = s.submit(&input));
        if let Some(request) = request {
            run_request(request);
        }
    };

    // 直前のリクエストをそのまま再送する
    let on_remix = move || {
        session.update(|s| s.close_image());
        Timeout::new(REMIX_DELAY_MS, move || {
            let mut request = None;
            session.update(|s| request = s.remix());
            if let Some(request) = request {
                run_request(request);
            }
        })
        .forget();
    };

    let on_select_image = move |image_url: String| {
        session.update(|s| {
            s.select_image(&image_url);
        });
    };

    let on_close_image = move || session.update(|s| s.close_image());

    let on_download_selected = move || {
        if let Some(image_url) = session.with_untracked(|s| s.selected_image().map(str::to_string)) {
            download_image(&image_url);
        }
    };

    let on_save = move || {
        let id = wallpaper_id(
            js_sys::Date::now() as i64,
            (js_sys::Math::random() * u32::MAX as f64) as u32,
        );
        session.with_untracked(|s| {
            gallery.update(|g| {
                if let Err(e) = s.save_selected(g, id) {
                    log_error("Failed to save wallpaper:", &e.to_string());
                }
            });
        });
    };

    let on_delete = move |id: String| {
        gallery.update(|g| {
            if let Err(e) = g.delete(&id) {
                log_error("Failed to delete wallpaper:", &e.to_string());
            }
        });
    };

    let on_download_saved = move |image_url: String| download_image(&image_url);

    let main_content = move || match status.get() {
        GenerationStatus::Loading => view! { <Loader /> }.into_any(),
        GenerationStatus::Failed => {
            let message = session.with_untracked(|s| s.error().unwrap_or_default().to_string());
            view! {
                <div class="error-panel">
                    <h2>"Generation Failed"</h2>
                    <p>{message}</p>
                </div>
            }
            .into_any()
        }
        GenerationStatus::Success => view! {
            <ImageGrid images=images on_select=on_select_image />
        }
        .into_any(),
        GenerationStatus::Idle => view! {
            <div class="empty-state">
                <h2>"Create your next wallpaper"</h2>
                <p class="text-muted">"Describe a vibe and pick a style to get four phone wallpapers."</p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="container">
            <Header
                gallery_open=gallery_open
                on_toggle_gallery=move || set_gallery_open.update(|open| *open = !*open)
            />

            <Show
                when=move || gallery_open.get()
                fallback=move || view! {
                    <PromptForm
                        prompt=prompt
                        set_prompt=set_prompt
                        is_loading=is_loading
                        on_submit=on_submit
                    />
                    <FilterSelector
                        selected=selected_filter
                        on_select=move |filter| session.update(|s| s.set_filter(filter))
                    />
                    <main class="results">{main_content}</main>
                }
            >
                <GalleryView
                    wallpapers=wallpapers
                    on_download=on_download_saved
                    on_delete=on_delete
                />
            </Show>

            {move || {
                session
                    .with(|s| s.selected_image().map(str::to_string))
                    .map(|image_url| view! {
                        <ImageModal
                            image_url=image_url
                            is_saved=is_saved
                            can_remix=can_remix
                            on_close=on_close_image
                            on_download=on_download_selected
                            on_save=on_save
                            on_remix=on_remix
                        />
                    })
            }}
        </div>
    }
}

/// 一時的なアンカー要素でData URLをダウンロードさせる
fn download_image(image_url: &str) {
    if let Err(e) = trigger_download(image_url) {
        web_sys::console::error_2(&JsValue::from_str("Failed to download wallpaper:"), &e);
    }
}

fn trigger_download(image_url: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document unavailable"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("body unavailable"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    let mime_type = extract_mime_type_from_data_url(image_url);
    anchor.set_href(image_url);
    anchor.set_download(&download_file_name(js_sys::Date::now() as u64, mime_type));

    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}

fn log_error(context: &str, message: &str) {
    web_sys::console::error_2(&JsValue::from_str(context), &JsValue::from_str(message));
}
