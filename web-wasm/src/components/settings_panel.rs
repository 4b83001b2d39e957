//! APIキー入力コンポーネント

use leptos::prelude::*;
use crate::state::Session;

#[component]
pub fn SettingsPanel(session: RwSignal<Session>) -> impl IntoView {
    view! {
        <div class="settings-panel">
            <div class="form-group">
                <label for="api-key">"Gemini API Key"</label>
                <input
                    type="password"
                    id="api-key"
                    autocomplete="off"
                    placeholder="Enter your Gemini API key"
                    prop:value=move || session.with(|s| s.api_key.clone())
                    on:input=move |ev| {
                        session.update(|s| s.set_api_key(event_target_value(&ev)));
                    }
                />
                <p class="text-muted">"Your API key is processed locally and never stored"</p>
                <a
                    href="https://aistudio.google.com/app/apikey"
                    target="_blank"
                    rel="noopener noreferrer"
                    class="api-key-link"
                >
                    "Get an API key →"
                </a>
            </div>
        </div>
    }
}
