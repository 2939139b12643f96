//! スタイルフィルタ選択

use leptos::prelude::*;
use vibe_wallpapers_common::StyleFilter;

#[component]
pub fn FilterSelector<F>(selected: Signal<Option<StyleFilter>>, on_select: F) -> impl IntoView
where
    F: Fn(Option<StyleFilter>) + 'static + Clone + Send + Sync,
{
    let options = std::iter::once(None)
        .chain(StyleFilter::ALL.into_iter().map(Some))
        .collect::<Vec<_>>();

    view! {
        <div class="filter-selector">
            {options
                .into_iter()
                .map(|filter| {
                    let on_select = on_select.clone();
                    let label = filter.map_or("None", |f| f.label());
                    view! {
                        <button
                            class="filter-chip"
                            class:active=move || selected.get() == filter
                            on:click=move |_| on_select(filter)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
