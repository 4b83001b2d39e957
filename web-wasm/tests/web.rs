//! ブラウザ上での読込・解析入口のテスト
//!
//! `wasm-pack test --headless --firefox web-wasm` で実行

#![cfg(target_arch = "wasm32")]

use roti_checker_common::{Certificate, Error, UploadedImage, DEFAULT_MODEL};
use roti_checker_wasm::{analyze_roti, print_certificate, read_image, today_issue_date};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;
use web_sys::{File, FilePropertyBag};

wasm_bindgen_test_configure!(run_in_browser);

fn make_file(contents: &str, name: &str, mime_type: &str) -> File {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = FilePropertyBag::new();
    options.set_type(mime_type);
    File::new_with_str_sequence_and_options(&parts, name, &options).expect("File作成失敗")
}

#[wasm_bindgen_test]
async fn test_read_image_returns_data_url() {
    let file = make_file("fake-png", "roti.png", "image/png");

    let image = read_image(file).await.expect("読込失敗");
    assert_eq!(image.file_name, "roti.png");
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.size, 8);
    assert_eq!(image.data_url, "data:image/png;base64,ZmFrZS1wbmc=");
}

#[wasm_bindgen_test]
async fn test_read_image_rejects_non_image() {
    let file = make_file("hello", "notes.txt", "text/plain");

    let err = read_image(file).await.unwrap_err();
    assert!(matches!(err, Error::NotAnImage { .. }));
}

#[wasm_bindgen_test]
fn test_today_issue_date_format() {
    let date = today_issue_date();
    let year = js_sys::Date::new_0().get_full_year();
    assert!(date.ends_with(&format!(", {}", year)), "unexpected date: {}", date);
}

#[wasm_bindgen_test]
async fn test_analyze_roti_rejects_blank_key_before_fetch() {
    let image = UploadedImage::from_base64("roti.png", "image/png", 8, "ZmFrZS1wbmc=").expect("画像作成失敗");

    let err = analyze_roti("   ", &image, DEFAULT_MODEL).await.unwrap_err();
    assert!(matches!(err, Error::InvalidApiKey));
}

#[wasm_bindgen_test]
fn test_print_certificate_without_image() {
    let certificate = Certificate {
        image_data_url: None,
        score: None,
        analysis: "Score: 0\nAnalysis: flat".into(),
        issued_on: today_issue_date(),
    };

    // ポップアップがブロックされても、開けてもエラーにならない
    assert!(print_certificate(&certificate).is_ok());
}
