//! プロンプト定義
//!
//! CLIとWeb(WASM)で同じ評価プロンプトを使う

/// 既定のGeminiモデル
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// ロティの丸さ評価プロンプト
///
/// 応答は `Score:` / `Analysis:` / `Tips:` の行頭形式を要求する（強制はできない）
pub const ROTI_PROMPT: &str = r#"Analyze this roti (Indian flatbread) image in detail and provide a comprehensive evaluation of its roundness. Please provide an in-depth analysis covering:

1. Shape Analysis:
   - Precise evaluation of circularity
   - Measurement of edge consistency
   - Analysis of symmetry
   - Identification of any irregular areas
   - Assessment of diameter consistency

2. Edge Quality:
   - Detailed examination of edge smoothness
   - Analysis of crust formation
   - Evaluation of thickness consistency along edges
   - Identification of any uneven areas

3. Professional Assessment:
   - Comparison to professional standards
   - Impact of shape on overall quality
   - Technical observations about the rolling technique
   - Specific areas needing improvement

Provide:
1. A numerical score from 1 to 10 (where 10 is perfectly round)
2. A detailed explanation of the score with specific observations
3. A comprehensive analysis of strengths and weaknesses
4. Specific, actionable tips for improvement based on the observed issues

Format the response as:
Score: [number]
Analysis: [your detailed technical analysis with specific observations]
Tips: [detailed, technique-focused improvement suggestions]

Please be specific and technical in your analysis, avoiding general statements."#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_requests_line_format() {
        assert!(ROTI_PROMPT.contains("Score: [number]"));
        assert!(ROTI_PROMPT.contains("Analysis: ["));
        assert!(ROTI_PROMPT.contains("Tips: ["));
    }

    #[test]
    fn test_prompt_score_range() {
        assert!(ROTI_PROMPT.contains("from 1 to 10"));
    }
}
