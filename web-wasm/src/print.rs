//! 証明書の印刷
//!
//! 新しいウィンドウに証明書HTMLを書き込み、画像の読込完了を待ってから
//! 印刷ダイアログを開く。画像が無い場合は一定時間後に開く。

use gloo::console;
use gloo::timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlDocument, HtmlImageElement, Window};
use roti_checker_common::{format_issue_date, Certificate};

/// 印刷ダイアログを開くまでの待ち時間
const PRINT_DELAY_MS: u32 = 500;

/// 印刷を始めるきっかけ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintTrigger {
    /// 画像の読込完了から `PRINT_DELAY_MS` 後
    OnImageLoad,
    /// 画像なし。指定ミリ秒後に印刷
    Fallback(u32),
}

pub fn print_trigger(certificate: &Certificate) -> PrintTrigger {
    if certificate.has_image() {
        PrintTrigger::OnImageLoad
    } else {
        PrintTrigger::Fallback(PRINT_DELAY_MS)
    }
}

/// 証明書を別ウィンドウで開いて印刷
///
/// ポップアップがブロックされた場合は何もしない
pub fn print_certificate(certificate: &Certificate) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let Some(print_window) = window.open_with_url_and_target("", "_blank")? else {
        console::warn!("Print window was blocked");
        return Ok(());
    };

    let document: HtmlDocument = print_window
        .document()
        .ok_or_else(|| JsValue::from_str("print window has no document"))?
        .dyn_into()?;
    document.write(&js_sys::Array::of1(&JsValue::from_str(&certificate.to_html())))?;
    document.close()?;

    match print_trigger(certificate) {
        PrintTrigger::OnImageLoad => match document.query_selector("img")? {
            Some(element) => {
                let img: HtmlImageElement = element.dyn_into()?;
                if img.complete() {
                    schedule_print(print_window, PRINT_DELAY_MS);
                } else {
                    let target = print_window.clone();
                    let onload = Closure::once(move || schedule_print(target, PRINT_DELAY_MS));
                    img.set_onload(Some(onload.as_ref().unchecked_ref()));
                    onload.forget();
                }
            }
            None => schedule_print(print_window, PRINT_DELAY_MS),
        },
        PrintTrigger::Fallback(delay_ms) => schedule_print(print_window, delay_ms),
    }

    Ok(())
}

fn schedule_print(target: Window, delay_ms: u32) {
    Timeout::new(delay_ms, move || {
        if let Err(e) = target.print() {
            console::error!("Print failed:", e);
        }
    })
    .forget();
}

/// 今日の日付（"October 16, 2026"）
pub fn today_issue_date() -> String {
    let now = js_sys::Date::new_0();
    format_issue_date(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}
