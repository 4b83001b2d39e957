//! Gemini API連携（fetch）
//!
//! リクエストの組み立てとレスポンスの解釈は roti_checker_common に任せ、
//! ここではブラウザのfetchで1回だけ送信する。リトライはしない。

use gloo::console;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use roti_checker_common::{
    build_request, describe_http_failure, endpoint_url, extract_text, split_data_url,
    validate_api_key, AnalysisReport, Error, GeminiRequest, GeminiResponse, Result, UploadedImage,
};

/// ロティ画像を解析
///
/// # Arguments
/// * `api_key` - Gemini APIキー（空なら通信せずにエラー）
/// * `image` - アップロード済み画像
/// * `model` - モデル名
pub async fn analyze_roti(api_key: &str, image: &UploadedImage, model: &str) -> Result<AnalysisReport> {
    let api_key = validate_api_key(api_key)?;
    let (mime_type, base64_data) = split_data_url(&image.data_url)
        .ok_or_else(|| Error::ImageRead("invalid base64 data".into()))?;

    let request = build_request(mime_type, base64_data);
    let text = call_gemini_api(&api_key, model, &request).await?;

    let report = AnalysisReport::parse(&text);
    if let Some(rejected) = &report.rejected_score {
        console::warn!("Invalid score received:", rejected.clone());
    }

    Ok(report)
}

/// Gemini API呼び出し
async fn call_gemini_api(api_key: &str, model: &str, request: &GeminiRequest) -> Result<String> {
    let url = endpoint_url(model, api_key);
    let body = serde_json::to_string(request)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| Error::Api("window is not available".into()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        let body = read_text(&resp).await.unwrap_or_default();
        return Err(Error::Api(describe_http_failure(resp.status(), &body)));
    }

    let json = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)
        .map_err(|e| Error::Api(e.to_string()))?;

    extract_text(&response)
}

async fn read_text(resp: &Response) -> Option<String> {
    let promise = resp.text().ok()?;
    JsFuture::from(promise).await.ok()?.as_string()
}

/// JsValueのエラーを共通エラーへ
fn js_error(value: JsValue) -> Error {
    Error::Api(js_error_message(&value))
}

/// JsValueからメッセージ文字列を取り出す
pub fn js_error_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
