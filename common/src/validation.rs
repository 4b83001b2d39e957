//! 入力検証
//!
//! ネットワーク呼び出し前にクライアント側で行うチェック

use crate::error::{Error, Result};

/// アップロード可能な最大サイズ（4MB）
pub const MAX_IMAGE_BYTES: u64 = 4 * 1024 * 1024;

/// アップロードファイルを検証
///
/// 種別チェックを先に行い、その後サイズをチェックする
pub fn validate_upload(mime_type: &str, size: u64) -> Result<()> {
    if !mime_type.starts_with("image/") {
        return Err(Error::NotAnImage { mime_type: mime_type.to_string() });
    }
    if size > MAX_IMAGE_BYTES {
        return Err(Error::ImageTooLarge { size });
    }
    Ok(())
}

/// APIキーを検証し、前後の空白を除いたキーを返す
pub fn validate_api_key(key: &str) -> Result<String> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidApiKey);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_upload_accepts_images() {
        assert!(validate_upload("image/jpeg", 1024).is_ok());
        assert!(validate_upload("image/png", MAX_IMAGE_BYTES).is_ok());
        assert!(validate_upload("image/webp", 0).is_ok());
    }

    #[test]
    fn test_validate_upload_rejects_non_image() {
        let err = validate_upload("application/pdf", 10).unwrap_err();
        assert_eq!(err.to_string(), "Please upload an image file");

        // 種別不明（空文字）も画像ではない
        assert!(matches!(validate_upload("", 10), Err(Error::NotAnImage { .. })));
    }

    #[test]
    fn test_validate_upload_rejects_oversized() {
        let err = validate_upload("image/jpeg", MAX_IMAGE_BYTES + 1).unwrap_err();
        assert_eq!(err.to_string(), "Image size should be less than 4MB");
    }

    #[test]
    fn test_validate_upload_checks_type_before_size() {
        let err = validate_upload("video/mp4", MAX_IMAGE_BYTES * 10).unwrap_err();
        assert!(matches!(err, Error::NotAnImage { .. }));
    }

    #[test]
    fn test_validate_api_key() {
        assert_eq!(validate_api_key("  AIza-test  ").unwrap(), "AIza-test");
        assert!(matches!(validate_api_key(""), Err(Error::InvalidApiKey)));
        assert!(matches!(validate_api_key(" \t\n"), Err(Error::InvalidApiKey)));
    }
}
