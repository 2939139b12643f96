//! 生成結果グリッド

use leptos::prelude::*;

#[component]
pub fn ImageGrid<F>(images: Signal<Vec<String>>, on_select: F) -> impl IntoView
where
    F: Fn(String) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="image-grid">
            {move || {
                images
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, image_url)| {
                        let on_select = on_select.clone();
                        let alt = format!("Generated wallpaper {}", index + 1);
                        view! {
                            <button
                                class="image-tile"
                                on:click={
                                    let image_url = image_url.clone();
                                    move |_| on_select(image_url.clone())
                                }
                            >
                                <img src=image_url.clone() alt=alt />
                            </button>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
