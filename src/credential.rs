//! APIキーの取得
//!
//! 優先順位: `--api-key`（環境変数 GEMINI_API_KEY を含む） → 対話入力。
//! どの経路でもディスクには書き込まない。

use crate::error::{RotiCheckerError, Result};
use dialoguer::Password;
use roti_checker_common::{validate_api_key, Error};
use std::io::IsTerminal;

/// APIキーを確定する（空白のみは不可）
pub fn resolve_api_key(provided: Option<&str>) -> Result<String> {
    match provided {
        Some(key) => Ok(validate_api_key(key)?),
        None if std::io::stdin().is_terminal() => {
            let key = Password::new()
                .with_prompt("Gemini API Key")
                .allow_empty_password(true)
                .interact()
                .map_err(|e| RotiCheckerError::Prompt(e.to_string()))?;
            Ok(validate_api_key(&key)?)
        }
        None => Err(Error::InvalidApiKey.into()),
    }
}
