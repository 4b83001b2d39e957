use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotiCheckerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    /// 画面と同じ1行メッセージで表示する
    #[error("{}", .0.user_message())]
    Analysis(#[from] roti_checker_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

pub type Result<T> = std::result::Result<T, RotiCheckerError>;
