//! 解析結果コンポーネント

use leptos::prelude::*;
use roti_checker_common::{AnalysisReport, Block, BlockMode};
use crate::components::score_card::ScoreCard;

#[component]
pub fn ResultView<FP>(report: AnalysisReport, on_print: FP) -> impl IntoView
where
    FP: Fn(()) + 'static + Clone,
{
    let blocks = report.blocks(BlockMode::Screen);

    view! {
        <div class="card result-card">
            <div class="print-action">
                <button
                    class="btn btn-pill"
                    on:click={
                        let on_print = on_print.clone();
                        move |_| on_print(())
                    }
                >
                    "🖨 Print Certificate"
                </button>
            </div>

            <div class="result-title">
                <h2>"Analysis Results"</h2>
                <div class="title-rule"></div>
            </div>

            {report.score.map(|score| view! { <ScoreCard score=score /> })}

            <div class="analysis-body">
                {blocks.into_iter().map(render_block).collect_view()}
            </div>
        </div>
    }
}

fn render_block(block: Block) -> AnyView {
    match block {
        Block::Heading(section) => view! {
            <div class="section-heading">
                <h3>{section.title()}</h3>
            </div>
        }
        .into_any(),
        Block::Paragraph(text) => view! { <p class="analysis-line">{text}</p> }.into_any(),
        Block::Blank => ().into_any(),
    }
}
