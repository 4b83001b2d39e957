//! エラー表示コンポーネント

use leptos::prelude::*;
use crate::state::Session;

#[component]
pub fn ErrorBanner(session: RwSignal<Session>) -> impl IntoView {
    let error = move || session.with(|s| s.error.clone());

    view! {
        <Show when=move || !error().is_empty()>
            <div class="error-banner" role="alert">
                <span class="error-icon">"⚠"</span>
                {error}
            </div>
        </Show>
    }
}
