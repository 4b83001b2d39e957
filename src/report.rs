//! 解析結果の端末表示

use roti_checker_common::{star_bar, AnalysisReport, Block, BlockMode};

/// 画面表示と同じ並びでテキスト化する（Score行は除外、空行は詰める）
pub fn render_report(report: &AnalysisReport) -> String {
    let mut lines = vec!["=== Analysis Results ===".to_string(), String::new()];

    if let Some(score) = report.score {
        lines.push(format!("  {}/10", score));
        lines.push(format!("  {}", star_bar(score)));
        lines.push("  Roundness Score".to_string());
        lines.push(String::new());
    }

    for block in report.blocks(BlockMode::Screen) {
        match block {
            Block::Heading(section) => {
                lines.push(String::new());
                lines.push(format!("## {}", section.title()));
            }
            Block::Paragraph(text) => lines.push(format!("  {}", text)),
            Block::Blank => {}
        }
    }

    lines.join("\n")
}
