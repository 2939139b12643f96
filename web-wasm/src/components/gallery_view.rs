//! 保存済み壁紙ギャラリー

use leptos::prelude::*;
use vibe_wallpapers_common::SavedWallpaper;

#[component]
pub fn GalleryView<FL, FD>(
    wallpapers: Signal<Vec<SavedWallpaper>>,
    on_download: FL,
    on_delete: FD,
) -> impl IntoView
where
    FL: Fn(String) + 'static + Clone + Send + Sync,
    FD: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <section class="gallery">
            <Show
                when=move || wallpapers.with(|w| !w.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <h2>"Your Gallery is Empty"</h2>
                        <p class="text-muted">"Save wallpapers you love and they will show up here."</p>
                    </div>
                }
            >
                <div class="image-grid">
                    <For
                        each=move || wallpapers.get()
                        key=|wallpaper| wallpaper.id.clone()
                        children={
                            let on_download = on_download.clone();
                            let on_delete = on_delete.clone();
                            move |wallpaper| {
                                view! {
                                    <WallpaperCard
                                        wallpaper=wallpaper
                                        on_download=on_download.clone()
                                        on_delete=on_delete.clone()
                                    />
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

#[component]
fn WallpaperCard<FL, FD>(wallpaper: SavedWallpaper, on_download: FL, on_delete: FD) -> impl IntoView
where
    FL: Fn(String) + 'static + Clone + Send + Sync,
    FD: Fn(String) + 'static + Clone + Send + Sync,
{
    let SavedWallpaper { id, image_url, prompt } = wallpaper;
    let alt = prompt.clone();
    let download_url = image_url.clone();

    view! {
        <div class="wallpaper-card">
            <img src=image_url alt=alt />
            <div class="wallpaper-info">
                <p class="wallpaper-prompt">{prompt}</p>
                <div class="wallpaper-actions">
                    <button
                        class="btn btn-small btn-secondary"
                        on:click=move |_| on_download(download_url.clone())
                    >
                        "Download"
                    </button>
                    <button
                        class="btn btn-small btn-tertiary"
                        on:click=move |_| on_delete(id.clone())
                    >
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
