//! 共有データ型
//!
//! - UploadedImage: アップロード済み画像（プレビュー兼送信データ）
//! - SavedResult: CLIが保存する解析結果JSON

use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::gemini::{split_data_url, to_data_url};
use crate::parser::AnalysisReport;
use crate::validation::validate_upload;

/// アップロード済み画像
///
/// 新しい画像がアップロードされるたびに丸ごと置き換える
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedImage {
    pub file_name: String,
    pub mime_type: String,
    pub size: u64,
    /// "data:image/jpeg;base64,..." 形式（プレビューと証明書にそのまま使う）
    pub data_url: String,
}

impl UploadedImage {
    /// Base64データから生成（サイズ・種別を検証）
    pub fn from_base64(file_name: &str, mime_type: &str, size: u64, base64_data: &str) -> Result<Self> {
        validate_upload(mime_type, size)?;
        Ok(Self {
            file_name: file_name.to_string(),
            mime_type: mime_type.to_string(),
            size,
            data_url: to_data_url(mime_type, base64_data),
        })
    }

    /// Data URLのBase64部分
    pub fn base64_data(&self) -> Option<&str> {
        split_data_url(&self.data_url).map(|(_, data)| data)
    }
}

/// 解析結果の保存形式（`analyze -o` → `certificate`）
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResult {
    /// 画像ファイルのパス（証明書生成時に再読込）
    pub image_path: String,

    #[serde(default)]
    pub mime_type: String,

    #[serde(default)]
    pub model: String,

    /// 1〜10の範囲外・欠落時はnull
    #[serde(default)]
    pub score: Option<u8>,

    /// モデルの生テキスト
    pub analysis: String,

    /// `Analysis:` セクション本文
    #[serde(default)]
    pub summary: String,

    /// `Tips:` セクション本文
    #[serde(default)]
    pub tips: String,
}

impl SavedResult {
    pub fn new(image_path: String, mime_type: String, model: String, report: &AnalysisReport) -> Self {
        Self {
            image_path,
            mime_type,
            model,
            score: report.score,
            analysis: report.raw.clone(),
            summary: report.analysis_text(),
            tips: report.tips_text(),
        }
    }
}
