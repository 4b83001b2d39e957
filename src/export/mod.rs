//! 証明書HTMLの出力

use crate::error::Result;
use chrono::Datelike;
use roti_checker_common::{format_issue_date, AnalysisReport, Certificate, UploadedImage};
use std::path::{Path, PathBuf};

const CERTIFICATE_SUFFIX: &str = "-certificate.html";

/// 出力先を決める
///
/// 未指定なら画像と同じ場所に `<画像名>-certificate.html`、
/// ディレクトリ（または拡張子なし）ならその中に同名で出力する
pub fn certificate_path(output: Option<&Path>, image_path: &Path) -> PathBuf {
    let stem = image_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("roti");
    let file_name = format!("{}{}", stem, CERTIFICATE_SUFFIX);

    match output {
        Some(output) if output.is_dir() || output.extension().is_none() => output.join(file_name),
        Some(output) => output.to_path_buf(),
        None => image_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(file_name),
    }
}

/// 証明書HTMLを書き出す
pub fn write_certificate(
    report: &AnalysisReport,
    image: Option<&UploadedImage>,
    output_path: &Path,
    issued_on: String,
) -> Result<()> {
    let certificate = Certificate::new(report, image.map(|img| img.data_url.clone()), issued_on);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    std::fs::write(output_path, certificate.to_html())?;
    Ok(())
}

/// 今日の発行日
pub fn issue_date_today() -> String {
    let now = chrono::Local::now();
    format_issue_date(now.year(), now.month(), now.day())
}
