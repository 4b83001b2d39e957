//! 印刷用証明書HTML生成
//!
//! 画像はData URIとして埋め込み、外部リソースを持たない単一ページにする

use crate::parser::{AnalysisReport, Block, BlockMode};

const MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const WATERMARK: &str = "@sagevedant";

const CERTIFICATE_STYLE: &str = r#"
      @media print {
        @page {
          margin: 0.5in;
        }
      }
      body {
        font-family: 'Arial', sans-serif;
        line-height: 1.6;
        color: #1f2937;
        background-color: #fff9f5;
        margin: 0;
        padding: 40px;
        position: relative;
        overflow: hidden;
      }
      .watermark {
        position: fixed;
        top: 50%;
        left: 50%;
        transform: translate(-50%, -50%) rotate(-45deg);
        font-size: 60px;
        color: rgba(194, 65, 12, 0.1);
        white-space: nowrap;
        pointer-events: none;
        z-index: 1000;
        font-weight: bold;
        user-select: none;
      }
      .certificate {
        position: relative;
        z-index: 1;
        max-width: 800px;
        margin: 0 auto;
        padding: 40px;
        background-color: white;
        border: 2px solid #c2410c;
        border-radius: 12px;
        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
      }
      .header {
        font-size: 36px;
        color: #c2410c;
        margin-bottom: 20px;
        font-weight: bold;
        text-align: center;
      }
      .score {
        font-size: 48px;
        color: #ea580c;
        margin: 20px 0;
        text-align: center;
      }
      .section-title {
        font-size: 24px;
        color: #9a3412;
        margin: 30px 0 15px;
        padding-bottom: 8px;
        border-bottom: 2px solid #fdba74;
      }
      .analysis-text {
        margin: 10px 0;
        color: #4b5563;
      }
      .date {
        margin-top: 40px;
        color: #666;
        text-align: center;
        font-style: italic;
      }
      .image-container {
        text-align: center;
        margin: 20px 0;
      }
      .roti-image {
        max-width: 300px;
        border-radius: 8px;
        box-shadow: 0 2px 4px rgba(0, 0, 0, 0.1);
      }
      @media print {
        body {
          background-color: white;
        }
        .certificate {
          border: none;
          box-shadow: none;
        }
      }
"#;

/// 証明書
#[derive(Debug, Clone, Default)]
pub struct Certificate {
    /// "data:image/...;base64,..." 形式。無ければ画像欄を出さない
    pub image_data_url: Option<String>,
    pub score: Option<u8>,
    /// モデルの生テキスト
    pub analysis: String,
    /// "October 16, 2026" 形式の発行日
    pub issued_on: String,
}

impl Certificate {
    pub fn new(report: &AnalysisReport, image_data_url: Option<String>, issued_on: String) -> Self {
        Self {
            image_data_url,
            score: report.score,
            analysis: report.raw.clone(),
            issued_on,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image_data_url.is_some()
    }

    /// 自己完結したHTML文書を生成
    pub fn to_html(&self) -> String {
        let image_html = self
            .image_data_url
            .as_deref()
            .map(|src| {
                format!(
                    r#"<div class="image-container"><img src="{}" alt="Roti" class="roti-image" /></div>"#,
                    escape_html(src)
                )
            })
            .unwrap_or_default();

        let score = self
            .score
            .map(|s| format!("{}/10", s))
            .unwrap_or_else(|| "N/A".to_string());

        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>RotiChecker AI Certificate</title>
    <style>{style}</style>
  </head>
  <body>
    <div class="watermark">{watermark}</div>
    <div class="certificate">
      <div class="header">RotiChecker AI Certificate</div>
      {image}
      <div class="score">Score: {score}</div>
      <div class="analysis">{analysis}</div>
      <div class="date">Issued on {date}</div>
    </div>
  </body>
</html>
"#,
            style = CERTIFICATE_STYLE,
            watermark = WATERMARK,
            image = image_html,
            score = score,
            analysis = self.analysis_html(),
            date = escape_html(&self.issued_on),
        )
    }

    fn analysis_html(&self) -> String {
        AnalysisReport::parse(&self.analysis)
            .blocks(BlockMode::Print)
            .iter()
            .map(|block| match block {
                Block::Heading(section) => {
                    format!(r#"<h2 class="section-title">{}</h2>"#, section.title())
                }
                Block::Paragraph(text) => {
                    format!(r#"<p class="analysis-text">{}</p>"#, escape_html(text))
                }
                Block::Blank => r#"<p class="analysis-text"></p>"#.to_string(),
            })
            .collect()
    }
}

/// en-US形式の日付（"October 16, 2026"）
///
/// monthは1始まり。範囲外は数値のまま出す
pub fn format_issue_date(year: i32, month: u32, day: u32) -> String {
    match MONTHS.get(month.wrapping_sub(1) as usize) {
        Some(name) => format!("{} {}, {}", name, day, year),
        None => format!("{}/{}/{}", month, day, year),
    }
}

/// HTML特殊文字をエスケープ
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Certificate {
        Certificate {
            image_data_url: Some("data:image/png;base64,iVBORw0KGgo=".into()),
            score: Some(8),
            analysis: "Score: 8\nAnalysis: Nearly round.\n\nTips: Keep going.".into(),
            issued_on: "October 16, 2026".into(),
        }
    }

    #[test]
    fn test_to_html_contents() {
        let html = sample().to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("RotiChecker AI Certificate"));
        assert!(html.contains(r#"<div class="watermark">@sagevedant</div>"#));
        assert!(html.contains(r#"src="data:image/png;base64,iVBORw0KGgo=""#));
        assert!(html.contains("Score: 8/10"));
        assert!(html.contains(r#"<h2 class="section-title">Detailed Analysis</h2>"#));
        assert!(html.contains(r#"<h2 class="section-title">Tips for Improvement</h2>"#));
        assert!(html.contains(r#"<p class="analysis-text">Nearly round.</p>"#));
        assert!(html.contains("Issued on October 16, 2026"));
        assert!(html.contains("margin: 0.5in"));
    }

    #[test]
    fn test_to_html_skips_score_line_and_keeps_blank() {
        let html = sample().to_html();
        assert!(!html.contains("<p class=\"analysis-text\">Score:"));
        assert!(html.contains(r#"<p class="analysis-text"></p>"#));
    }

    #[test]
    fn test_to_html_without_image() {
        let cert = Certificate { image_data_url: None, ..sample() };
        let html = cert.to_html();
        assert!(!html.contains("<img"));
        assert!(!cert.has_image());
    }

    #[test]
    fn test_to_html_without_score() {
        let cert = Certificate { score: None, ..sample() };
        assert!(cert.to_html().contains("Score: N/A"));
    }

    #[test]
    fn test_to_html_escapes_analysis() {
        let cert = Certificate {
            analysis: "Analysis: <script>alert(1)</script> & more".into(),
            ..sample()
        };
        let html = cert.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt; &amp; more"));
    }

    #[test]
    fn test_new_from_report() {
        let report = AnalysisReport::parse("Score: 0\nAnalysis: flat");
        let cert = Certificate::new(&report, None, "May 1, 2026".into());
        assert_eq!(cert.score, None);
        assert!(cert.to_html().contains("flat"));
    }

    #[test]
    fn test_format_issue_date() {
        assert_eq!(format_issue_date(2026, 10, 16), "October 16, 2026");
        assert_eq!(format_issue_date(2024, 1, 5), "January 5, 2024");
        assert_eq!(format_issue_date(2024, 13, 5), "13/5/2024");
        assert_eq!(format_issue_date(2024, 0, 5), "0/5/2024");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a<b>"c"&'d'"#), "a&lt;b&gt;&quot;c&quot;&amp;&#39;d&#39;");
    }
}
