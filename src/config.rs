use crate::error::{RotiCheckerError, Result};
use roti_checker_common::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// CLI設定
///
/// APIキーは保存しない（`--api-key` / `GEMINI_API_KEY` / 対話入力のみ）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            timeout_seconds: 60,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| RotiCheckerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("roti-checker").join("config.json"))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn set_model(&mut self, model: String) -> Result<()> {
        if model.trim().is_empty() {
            return Err(RotiCheckerError::Config("モデル名が空です".into()));
        }
        self.model = model.trim().to_string();
        Ok(())
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        if seconds == 0 {
            return Err(RotiCheckerError::Config("タイムアウトは1秒以上を指定してください".into()));
        }
        self.timeout_seconds = seconds;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"model": "gemini-2.0-flash"}"#).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert_eq!(config.timeout_seconds, 60);
    }

    #[test]
    fn test_config_never_serializes_api_key() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert!(!json.to_lowercase().contains("key"));
    }

    #[test]
    fn test_set_model_and_timeout() {
        let mut config = Config::default();
        config.set_model(" gemini-2.0-flash ".into()).unwrap();
        assert_eq!(config.model, "gemini-2.0-flash");
        assert!(config.set_model("  ".into()).is_err());

        config.set_timeout(30).unwrap();
        assert_eq!(config.timeout_seconds, 30);
        assert!(matches!(config.set_timeout(0), Err(RotiCheckerError::Config(_))));
    }
}
