//! プロンプト入力フォーム

use leptos::prelude::*;

#[component]
pub fn PromptForm<F>(
    prompt: ReadSignal<String>,
    set_prompt: WriteSignal<String>,
    is_loading: Signal<bool>,
    on_submit: F,
) -> impl IntoView
where
    F: Fn() + 'static + Clone + Send + Sync,
{
    let disabled = move || is_loading.get() || prompt.with(|p| p.trim().is_empty());

    view! {
        <form
            class="prompt-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit();
            }
        >
            <input
                type="text"
                class="prompt-input"
                placeholder="Describe your vibe..."
                prop:value=move || prompt.get()
                on:input=move |ev| set_prompt.set(event_target_value(&ev))
                disabled=move || is_loading.get()
            />
            <button type="submit" class="btn btn-primary" disabled=disabled>
                {move || if is_loading.get() { "Generating..." } else { "Generate" }}
            </button>
        </form>
    }
}
