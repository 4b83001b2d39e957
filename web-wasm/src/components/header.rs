//! ヘッダーコンポーネント

use leptos::prelude::*;

const SOCIAL_URL: &str = "https://x.com/sagevedant";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <a href=SOCIAL_URL target="_blank" rel="noopener noreferrer" class="social-link">
            "@sagevedant"
        </a>
        <header class="header">
            <div class="header-icon">"📷"</div>
            <h1>"RotiChecker AI"</h1>
            <p class="tagline">"Rate your roti's roundness with AI precision"</p>
        </header>
    }
}
