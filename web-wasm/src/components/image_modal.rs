//! 全画面プレビュー

use leptos::prelude::*;

#[component]
pub fn ImageModal<FC, FD, FS, FR>(
    image_url: String,
    is_saved: Signal<bool>,
    can_remix: Signal<bool>,
    on_close: FC,
    on_download: FD,
    on_save: FS,
    on_remix: FR,
) -> impl IntoView
where
    FC: Fn() + 'static + Clone + Send + Sync,
    FD: Fn() + 'static + Clone + Send + Sync,
    FS: Fn() + 'static + Clone + Send + Sync,
    FR: Fn() + 'static + Clone + Send + Sync,
{
    let on_close_backdrop = on_close.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close_backdrop()>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <img class="modal-image" src=image_url alt="Selected wallpaper" />
                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_download()>
                        "Download"
                    </button>
                    <button
                        class="btn btn-secondary"
                        class:saved=move || is_saved.get()
                        disabled=move || is_saved.get()
                        on:click=move |_| on_save()
                    >
                        {move || if is_saved.get() { "Saved" } else { "Save" }}
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || !can_remix.get()
                        on:click=move |_| on_remix()
                    >
                        "Remix"
                    </button>
                    <button class="btn btn-tertiary" on:click=move |_| on_close()>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
