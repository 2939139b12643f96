//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header<F>(gallery_open: ReadSignal<bool>, on_toggle_gallery: F) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send + Sync,
{
    view! {
        <header class="header">
            <h1>"VibeWallpapers"</h1>
            <button
                class="btn btn-secondary"
                class:active=move || gallery_open.get()
                on:click=move |_| on_toggle_gallery()
            >
                {move || if gallery_open.get() { "Create" } else { "Gallery" }}
            </button>
        </header>
    }
}
