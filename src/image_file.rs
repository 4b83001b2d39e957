//! 画像ファイルの読込
//!
//! ブラウザ版と同じく、種別（image/*）とサイズ（4MB以下）を送信前に検証する

use crate::error::{RotiCheckerError, Result};
use base64::{engine::general_purpose::STANDARD, Engine};
use roti_checker_common::{validate_upload, Error, UploadedImage};
use std::path::Path;

/// 拡張子から推定するMIMEタイプ
const EXTENSION_MIME_TYPES: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
];

/// 画像ファイルを読み込んで検証する
pub fn load_image(path: &Path) -> Result<UploadedImage> {
    if !path.exists() {
        return Err(RotiCheckerError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path).map_err(|e| Error::ImageRead(e.to_string()))?;
    let mime_type = detect_mime_type(path, &bytes);
    let size = bytes.len() as u64;

    validate_upload(&mime_type, size)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(UploadedImage::from_base64(&file_name, &mime_type, size, &STANDARD.encode(&bytes))?)
}

/// MIMEタイプを判定（先頭バイト → 拡張子の順）
pub fn detect_mime_type(path: &Path, bytes: &[u8]) -> String {
    if let Ok(format) = image::guess_format(bytes) {
        return format.to_mime_type().to_string();
    }

    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .and_then(|ext| {
            EXTENSION_MIME_TYPES
                .iter()
                .find(|(e, _)| *e == ext)
                .map(|(_, mime)| mime.to_string())
        })
        .unwrap_or_else(|| "application/octet-stream".to_string())
}
