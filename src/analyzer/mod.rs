//! Gemini API連携（reqwest）
//!
//! 1枚の画像に対して1回だけリクエストを送る。リトライ・バックオフはしない。

use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use roti_checker_common::{
    build_request, describe_http_failure, endpoint_url, extract_text, split_data_url,
    validate_api_key, AnalysisReport, Error, GeminiRequest, GeminiResponse, UploadedImage,
};
use std::time::Duration;
use tracing::{debug, warn};

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// APIキーを検証してクライアントを作成（通信はしない）
    pub fn new(api_key: &str, model: &str, timeout: Duration) -> Result<Self> {
        let api_key = validate_api_key(api_key)?;
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(api_error)?;

        Ok(Self {
            http,
            api_key,
            model: model.to_string(),
        })
    }

    /// ロティ画像を解析
    pub async fn analyze(&self, image: &UploadedImage) -> Result<AnalysisReport> {
        let (mime_type, base64_data) = split_data_url(&image.data_url)
            .ok_or_else(|| Error::ImageRead("invalid base64 data".into()))?;

        let request = build_request(mime_type, base64_data);
        let text = self.generate(&request).await?;
        debug!(chars = text.len(), "レスポンス受信");

        let report = AnalysisReport::parse(&text);
        if let Some(rejected) = &report.rejected_score {
            warn!(score = %rejected, "Invalid score received");
        }

        Ok(report)
    }

    async fn generate(&self, request: &GeminiRequest) -> Result<String> {
        debug!(model = %self.model, "Gemini API呼び出し");

        let response = self
            .http
            .post(endpoint_url(&self.model, &self.api_key))
            .json(request)
            .send()
            .await
            .map_err(api_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(describe_http_failure(status.as_u16(), &body)).into());
        }

        let payload: GeminiResponse = response.json().await.map_err(api_error)?;
        Ok(extract_text(&payload)?)
    }
}

/// 解析中スピナーを表示しながら解析
pub async fn analyze_with_spinner(client: &GeminiClient, image: &UploadedImage) -> Result<AnalysisReport> {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message("Analyzing...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = client.analyze(image).await;
    spinner.finish_and_clear();
    result
}

/// reqwestエラーを共通エラーへ（URLにAPIキーが含まれるため除去する）
fn api_error(e: reqwest::Error) -> Error {
    Error::Api(e.without_url().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RotiCheckerError;

    #[test]
    fn test_client_rejects_blank_key() {
        let result = GeminiClient::new("  ", "gemini-1.5-flash", Duration::from_secs(5));
        assert!(matches!(
            result,
            Err(RotiCheckerError::Analysis(Error::InvalidApiKey))
        ));
    }

    #[test]
    fn test_client_trims_key() {
        let client = GeminiClient::new(" KEY ", "gemini-1.5-flash", Duration::from_secs(5)).unwrap();
        assert_eq!(client.api_key, "KEY");
        assert_eq!(client.model, "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn test_analyze_rejects_broken_data_url() {
        let client = GeminiClient::new("KEY", "gemini-1.5-flash", Duration::from_secs(5)).unwrap();
        let image = UploadedImage {
            file_name: "roti.jpg".into(),
            mime_type: "image/jpeg".into(),
            size: 0,
            data_url: "not-a-data-url".into(),
        };

        let err = client.analyze(&image).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error analyzing image. Failed to read image file - invalid base64 data"
        );
    }
}
