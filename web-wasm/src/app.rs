//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use roti_checker_common::DEFAULT_MODEL;
use crate::api::gemini;
use crate::components::{
    header::Header,
    settings_panel::SettingsPanel,
    upload_area::UploadArea,
    error_banner::ErrorBanner,
    analyze_button::AnalyzeButton,
    result_view::ResultView,
};
use crate::print;
use crate::state::Session;

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(Session::default());

    // 解析開始ハンドラ（同時に1件のみ）
    let on_analyze = move |_: ()| {
        let Some(Ok(job)) = session.try_update(|s| s.begin_analysis()) else {
            return;
        };

        spawn_local(async move {
            let result = gemini::analyze_roti(&job.api_key, &job.image, DEFAULT_MODEL).await;
            if let Err(err) = &result {
                console::error!("Analysis error:", err.to_string());
            }
            session.update(|s| s.finish_analysis(result));
        });
    };

    // 証明書印刷ハンドラ
    let on_print = move |_: ()| {
        let Some(certificate) = session.with(|s| s.certificate(print::today_issue_date())) else {
            return;
        };
        if let Err(e) = print::print_certificate(&certificate) {
            console::error!("Print error:", e);
        }
    };

    let preview = move || session.with(|s| s.image.as_ref().map(|img| img.data_url.clone()));
    let report = move || session.with(|s| s.report.clone());

    view! {
        <div class="page">
            <Header />

            <main class="container">
                <div class="card">
                    <SettingsPanel session=session />

                    <UploadArea session=session />

                    {move || preview().map(|src| view! {
                        <div class="preview">
                            <img src=src alt="Roti preview" />
                        </div>
                    })}

                    <ErrorBanner session=session />

                    <AnalyzeButton session=session on_analyze=on_analyze />
                </div>

                {move || report().map(|report| view! {
                    <ResultView report=report on_print=on_print />
                })}
            </main>
        </div>
    }
}
