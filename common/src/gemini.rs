//! Gemini API ワイヤ型とレスポンス処理
//!
//! 通信そのものは各フロントエンド（WASM: fetch / CLI: reqwest）が行い、
//! ここではリクエスト組み立てとレスポンス解釈のみを扱う

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};
use crate::prompts::ROTI_PROMPT;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// セーフティフィルタを最も緩くするカテゴリ一覧
const SAFETY_CATEGORIES: &[&str] = &[
    "HARM_CATEGORY_HARASSMENT",
    "HARM_CATEGORY_HATE_SPEECH",
    "HARM_CATEGORY_SEXUALLY_EXPLICIT",
    "HARM_CATEGORY_DANGEROUS_CONTENT",
];

/// テキスト取得を拒否する終了理由
const BLOCKED_FINISH_REASONS: &[&str] = &[
    "SAFETY",
    "RECITATION",
    "BLOCKLIST",
    "PROHIBITED_CONTENT",
    "SPII",
];

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    pub safety_settings: Vec<SafetySetting>,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct SafetySetting {
    pub category: &'static str,
    pub threshold: &'static str,
}

/// Gemini APIレスポンス
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeminiResponse {
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Candidate {
    pub content: Option<ResponseContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponseContent {
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

/// エラーレスポンス本文 `{"error": {...}}`
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ApiErrorDetail {
    message: String,
    status: String,
}

/// generateContent エンドポイントURL
pub fn endpoint_url(model: &str, api_key: &str) -> String {
    format!("{}/{}:generateContent?key={}", GEMINI_API_BASE, model, api_key)
}

/// 評価リクエストを組み立てる（プロンプト → 画像の順）
pub fn build_request(mime_type: &str, base64_data: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::Text { text: ROTI_PROMPT.to_string() },
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: mime_type.to_string(),
                        data: base64_data.to_string(),
                    },
                },
            ],
        }],
        safety_settings: SAFETY_CATEGORIES
            .iter()
            .map(|&category| SafetySetting { category, threshold: "BLOCK_NONE" })
            .collect(),
    }
}

/// レスポンスから本文テキストを取り出す
///
/// 最初の候補のテキストパートを連結する
pub fn extract_text(response: &GeminiResponse) -> Result<String> {
    if let Some(reason) = response
        .prompt_feedback
        .as_ref()
        .and_then(|f| f.block_reason.as_deref())
    {
        return Err(blocked(reason));
    }

    let candidate = response.candidates.first().ok_or(Error::NoResponse)?;

    if let Some(reason) = candidate.finish_reason.as_deref() {
        if BLOCKED_FINISH_REASONS.contains(&reason) {
            return Err(blocked(reason));
        }
    }

    let text: String = candidate
        .content
        .iter()
        .flat_map(|c| c.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .collect();

    if text.is_empty() {
        return Err(Error::EmptyResponse);
    }

    Ok(text)
}

fn blocked(reason: &str) -> Error {
    Error::Api(format!("Text not available. Response was blocked due to {}", reason))
}

/// HTTPエラーを1行のメッセージにする
///
/// ステータストークン（PERMISSION_DENIED など）を残して分類できるようにする
pub fn describe_http_failure(status: u16, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(parsed) if !parsed.error.status.is_empty() => format!(
            "[{}] {} ({})",
            status, parsed.error.message, parsed.error.status
        ),
        Ok(parsed) if !parsed.error.message.is_empty() => {
            format!("[{}] {}", status, parsed.error.message)
        }
        _ if body.trim().is_empty() => format!("API error: {}", status),
        _ => format!("[{}] {}", status, body.trim()),
    }
}

/// Data URLを (MIMEタイプ, Base64データ) に分割
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
pub fn split_data_url(data_url: &str) -> Option<(&str, &str)> {
    let rest = data_url.strip_prefix("data:")?;
    let (header, data) = rest.split_once(',')?;
    if data.is_empty() {
        return None;
    }
    let mime = header.split(';').next().unwrap_or_default();
    Some((mime, data))
}

/// Base64データからData URLを作る
pub fn to_data_url(mime_type: &str, base64_data: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_data)
}
