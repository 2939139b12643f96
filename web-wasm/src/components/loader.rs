//! 生成中のプレースホルダ表示

use leptos::prelude::*;
use vibe_wallpapers_common::IMAGE_COUNT;

#[component]
pub fn Loader() -> impl IntoView {
    view! {
        <div class="loader">
            <div class="image-grid">
                {(0..IMAGE_COUNT)
                    .map(|_| view! { <div class="image-placeholder pulse" /> })
                    .collect_view()}
            </div>
            <p class="loader-text">"Generating your vibe..."</p>
        </div>
    }
}
