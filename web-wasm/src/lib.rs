//! RotiChecker AI Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod print;
pub mod state;

pub use api::gemini::analyze_roti;
pub use components::upload_area::read_image;
pub use print::{print_certificate, today_issue_date};

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
