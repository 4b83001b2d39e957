//! アップロードエリアコンポーネント

use gloo::console;
use gloo::file::futures::read_as_data_url;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{Event, File, HtmlInputElement};
use roti_checker_common::{split_data_url, Error, UploadedImage};
use crate::state::Session;

#[component]
pub fn UploadArea(session: RwSignal<Session>) -> impl IntoView {
    let on_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");

        let accepted = session
            .try_update(|s| s.check_upload(&file.type_(), file.size() as u64))
            .unwrap_or(false);
        if !accepted {
            return;
        }

        spawn_local(async move {
            match read_image(file).await {
                Ok(image) => session.update(|s| s.accept_image(image)),
                Err(err) => {
                    console::error!("Upload error:", err.to_string());
                    session.update(|s| s.reject_upload(&err));
                }
            }
        });
    };

    view! {
        <div class="upload-area">
            <input
                type="file"
                accept="image/*"
                id="image-upload"
                class="hidden"
                on:change=on_change
            />
            <label for="image-upload" class="upload-label">
                <div class="upload-icon">"⬆"</div>
                <span class="upload-text">"Click to upload your roti photo"</span>
                <span class="text-muted">"Max size: 4MB"</span>
            </label>
        </div>
    }
}

/// ファイルをData URLとして読み込む
pub async fn read_image(file: File) -> Result<UploadedImage, Error> {
    let file_name = file.name();
    let mime_type = file.type_();
    let size = file.size() as u64;

    let data_url = read_as_data_url(&gloo::file::File::from(file))
        .await
        .map_err(|e| Error::ImageRead(e.to_string()))?;

    let (_, base64_data) = split_data_url(&data_url)
        .ok_or_else(|| Error::ImageRead("invalid base64 data".into()))?;

    UploadedImage::from_base64(&file_name, &mime_type, size, base64_data)
}
