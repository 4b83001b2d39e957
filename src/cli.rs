use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "roti-checker")]
#[command(about = "ロティの丸さをAIで採点し、証明書を発行するツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Gemini APIキー（未指定時は対話入力）
    #[arg(long, global = true, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// 使用するモデル（設定ファイルより優先）
    #[arg(long, global = true)]
    pub model: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// ロティ画像を解析して結果を表示
    Analyze {
        /// 画像ファイル（4MBまで）
        #[arg(required = true)]
        image: PathBuf,

        /// 結果JSONの保存先
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 保存済みの結果JSONから証明書HTMLを生成
    Certificate {
        /// 結果JSONファイル
        #[arg(required = true)]
        input: PathBuf,

        /// 出力HTMLファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 解析から証明書生成まで一括実行
    Run {
        /// 画像ファイル（4MBまで）
        #[arg(required = true)]
        image: PathBuf,

        /// 出力HTMLファイル/ディレクトリ
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 設定を管理（APIキーは保存しない）
    Config {
        /// 既定のモデルを設定
        #[arg(long)]
        set_model: Option<String>,

        /// タイムアウト秒数を設定
        #[arg(long)]
        set_timeout: Option<u64>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
