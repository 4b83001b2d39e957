//! 解析ボタンコンポーネント

use leptos::prelude::*;
use crate::state::Session;

#[component]
pub fn AnalyzeButton<FA>(
    session: RwSignal<Session>,
    on_analyze: FA,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
{
    let is_loading = move || session.with(|s| s.loading);

    view! {
        <button
            class="btn btn-primary btn-block"
            disabled=move || !session.with(Session::can_submit)
            on:click={
                let on_analyze = on_analyze.clone();
                move |_| on_analyze(())
            }
        >
            <Show when=is_loading fallback=|| "Analyze Roti">
                <span class="spinner"></span>
                "Analyzing..."
            </Show>
        </button>
    }
}
