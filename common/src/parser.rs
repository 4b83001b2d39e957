//! モデル応答テキストのパーサー
//!
//! 応答は構造化されていない自由文で、行頭の `Score:` / `Analysis:` / `Tips:` を
//! 手掛かりに3つのセクションへ分ける。モデルが書式に従わない場合は
//! スコア未設定のまま本文だけが表示される。

use lazy_static::lazy_static;
use regex::Regex;

use crate::rating::MAX_SCORE;

const SCORE_PREFIX: &str = "Score:";
const ANALYSIS_PREFIX: &str = "Analysis:";
const TIPS_PREFIX: &str = "Tips:";

lazy_static! {
    static ref SCORE_RE: Regex = Regex::new(r"Score:\s*([0-9]+)").unwrap();
}

/// 応答のセクション見出し
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Analysis,
    Tips,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Analysis => "Detailed Analysis",
            Section::Tips => "Tips for Improvement",
        }
    }
}

/// 表示用の行ブロック
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading(Section),
    Paragraph(String),
    /// 空行（印刷時のみ）
    Blank,
}

/// 空行の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMode {
    /// 画面表示: 空行を捨てる
    Screen,
    /// 証明書印刷: 空行を空の段落として残す
    Print,
}

/// 解析結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisReport {
    /// モデルの生テキスト
    pub raw: String,
    /// 1〜10のスコア
    pub score: Option<u8>,
    /// 範囲外で採用しなかったスコア（診断ログ用）
    pub rejected_score: Option<String>,
}

impl AnalysisReport {
    /// 応答テキストをパース
    ///
    /// 最初の `Score: N` のみを見る。範囲外・桁あふれは `rejected_score` に残す
    pub fn parse(text: &str) -> Self {
        let mut report = AnalysisReport {
            raw: text.to_string(),
            ..Default::default()
        };

        if let Some(caps) = SCORE_RE.captures(text) {
            let digits = &caps[1];
            match digits.parse::<u32>() {
                Ok(n) if (1..=MAX_SCORE as u32).contains(&n) => report.score = Some(n as u8),
                _ => report.rejected_score = Some(digits.to_string()),
            }
        }

        report
    }

    /// 行ごとのブロックに分類
    ///
    /// `Analysis:` / `Tips:` 行は見出しになり、同じ行の続きは直後の段落になる。
    /// `Score:` 行は出力しない。
    pub fn blocks(&self, mode: BlockMode) -> Vec<Block> {
        let mut blocks = Vec::new();

        for line in self.lines() {
            if line.starts_with(SCORE_PREFIX) {
                continue;
            }

            if let Some((section, rest)) = split_marker(line) {
                blocks.push(Block::Heading(section));
                if !rest.is_empty() {
                    blocks.push(Block::Paragraph(rest.to_string()));
                }
                continue;
            }

            if line.trim().is_empty() {
                if mode == BlockMode::Print {
                    blocks.push(Block::Blank);
                }
                continue;
            }

            blocks.push(Block::Paragraph(line.to_string()));
        }

        blocks
    }

    /// `Analysis:` セクション本文
    pub fn analysis_text(&self) -> String {
        self.section_text(Section::Analysis)
    }

    /// `Tips:` セクション本文
    pub fn tips_text(&self) -> String {
        self.section_text(Section::Tips)
    }

    fn section_text(&self, target: Section) -> String {
        let mut collected: Vec<&str> = Vec::new();
        let mut inside = false;

        for line in self.lines() {
            if line.starts_with(SCORE_PREFIX) {
                inside = false;
                continue;
            }
            if let Some((section, rest)) = split_marker(line) {
                inside = section == target;
                if inside && !rest.is_empty() {
                    collected.push(rest);
                }
                continue;
            }
            if inside {
                collected.push(line);
            }
        }

        collected.join("\n").trim().to_string()
    }

    fn lines(&self) -> impl Iterator<Item = &str> {
        self.raw.split('\n').map(|l| l.trim_end_matches('\r'))
    }
}

/// 見出し行なら (セクション, 行の残り) を返す
fn split_marker(line: &str) -> Option<(Section, &str)> {
    if let Some(rest) = line.strip_prefix(ANALYSIS_PREFIX) {
        return Some((Section::Analysis, rest.trim()));
    }
    if let Some(rest) = line.strip_prefix(TIPS_PREFIX) {
        return Some((Section::Tips, rest.trim()));
    }
    None
}
