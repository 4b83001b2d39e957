//! エラー型定義
//!
//! 入力検証エラーはそのままユーザーに表示し、
//! それ以外（API・ファイル読込など）は `describe_failure` で分類する

use thiserror::Error;

/// 解析失敗時のメッセージ接頭辞
const FAILURE_PREFIX: &str = "Error analyzing image. ";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Please enter a valid Gemini API key")]
    InvalidApiKey,

    #[error("Please upload an image of your roti")]
    MissingImage,

    #[error("Please upload an image file")]
    NotAnImage { mime_type: String },

    #[error("Image size should be less than 4MB")]
    ImageTooLarge { size: u64 },

    #[error("Failed to read image file - {0}")]
    ImageRead(String),

    #[error("Failed to get a response from the AI model")]
    NoResponse,

    #[error("Received empty response from the AI model")]
    EmptyResponse,

    #[error("{0}")]
    Api(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// 送信前の入力検証で発生するエラーか
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidApiKey
                | Error::MissingImage
                | Error::NotAnImage { .. }
                | Error::ImageTooLarge { .. }
        )
    }

    /// 画面に表示する1行メッセージ
    pub fn user_message(&self) -> String {
        if self.is_validation() {
            self.to_string()
        } else {
            describe_failure(&self.to_string())
        }
    }
}

/// 例外メッセージの部分一致で失敗内容を分類する
///
/// 判定順: API key → PERMISSION_DENIED → QUOTA_EXCEEDED → SAFETY → 元メッセージ
pub fn describe_failure(message: &str) -> String {
    let detail = if message.contains("API key") {
        "Invalid API key. Please check your API key and try again."
    } else if message.contains("PERMISSION_DENIED") {
        "API key does not have permission to access the Gemini Vision API."
    } else if message.contains("QUOTA_EXCEEDED") || message.contains("RESOURCE_EXHAUSTED") {
        "API quota exceeded. Please try again later."
    } else if message.contains("SAFETY") {
        "The image was flagged by safety filters. Please try a different image."
    } else if message.trim().is_empty() {
        "An unexpected error occurred. Please try again."
    } else {
        message
    };

    format!("{}{}", FAILURE_PREFIX, detail)
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
