//! スコアカード（10段階の星）

use leptos::prelude::*;
use roti_checker_common::rating_indicators;

#[component]
pub fn ScoreCard(score: u8) -> impl IntoView {
    view! {
        <div class="score-card">
            <div class="score-value">{format!("{}/10", score)}</div>
            <div class="stars">
                {rating_indicators(score)
                    .into_iter()
                    .map(|filled| view! { <span class="star" class:filled=filled>"★"</span> })
                    .collect_view()}
            </div>
            <div class="score-caption">"Roundness Score"</div>
        </div>
    }
}
