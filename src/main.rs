use clap::Parser;
use roti_checker::{analyzer, cli, config, credential, error, export, image_file, report};
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use roti_checker_common::{AnalysisReport, SavedResult};
use std::path::Path;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("✖ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    let model = cli.model.clone().unwrap_or_else(|| config.model.clone());

    match cli.command {
        Commands::Analyze { image, output } => {
            println!("🫓 roti-checker - 解析\n");

            let (uploaded, report) = analyze(&image, cli.api_key.as_deref(), &model, &config).await?;
            println!("{}\n", report::render_report(&report));

            if let Some(output) = output {
                let image_path = image.canonicalize().unwrap_or_else(|_| image.clone());
                let saved = SavedResult::new(
                    image_path.display().to_string(),
                    uploaded.mime_type.clone(),
                    model,
                    &report,
                );
                std::fs::write(&output, serde_json::to_string_pretty(&saved)?)?;
                println!("✔ 結果を保存: {}", output.display());
            }

            println!("\n✅ 解析完了");
        }

        Commands::Certificate { input, output } => {
            println!("📜 roti-checker - 証明書生成\n");

            let content = std::fs::read_to_string(&input)?;
            let saved: SavedResult = serde_json::from_str(&content)?;

            // JSONファイルの親ディレクトリを基準に相対パスを解決
            let base_dir = input.parent().unwrap_or(Path::new("."));
            let image_path = base_dir.join(&saved.image_path);

            // 画像が読めなくても証明書は出す
            let image = match image_file::load_image(&image_path) {
                Ok(image) => Some(image),
                Err(e) => {
                    warn!(path = %image_path.display(), error = %e, "画像を読み込めません");
                    println!("- 画像なしで生成します: {}", image_path.display());
                    None
                }
            };

            let report = AnalysisReport::parse(&saved.analysis);
            let output_path = export::certificate_path(output.as_deref(), &image_path);
            export::write_certificate(&report, image.as_ref(), &output_path, export::issue_date_today())?;
            println!("✔ 証明書出力: {}", output_path.display());

            println!("\n✅ 証明書生成完了");
        }

        Commands::Run { image, output } => {
            println!("🚀 roti-checker - 一括処理\n");

            let (uploaded, report) = analyze(&image, cli.api_key.as_deref(), &model, &config).await?;
            println!("{}\n", report::render_report(&report));

            let output_path = export::certificate_path(output.as_deref(), &image);
            export::write_certificate(&report, Some(&uploaded), &output_path, export::issue_date_today())?;
            println!("✔ 証明書出力: {}", output_path.display());

            println!("\n✅ 完了");
        }

        Commands::Config { set_model, set_timeout, show } => {
            let changed = set_model.is_some() || set_timeout.is_some();

            if let Some(model) = set_model {
                config.set_model(model)?;
            }
            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
            }
            if changed {
                config.save()?;
                println!("✔ 設定を保存しました");
            }

            if show || !changed {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  APIキー: 保存しません（--api-key / GEMINI_API_KEY）");
            }
        }
    }

    Ok(())
}

/// APIキー確認 → 画像読込 → AI解析
async fn analyze(
    image: &Path,
    api_key: Option<&str>,
    model: &str,
    config: &Config,
) -> Result<(roti_checker_common::UploadedImage, AnalysisReport)> {
    // 通信前にキーを確定
    let api_key = credential::resolve_api_key(api_key)?;

    println!("[1/2] 画像を読み込み中...");
    let uploaded = image_file::load_image(image)?;
    println!("✔ {} ({}, {} bytes)\n", uploaded.file_name, uploaded.mime_type, uploaded.size);

    println!("[2/2] AI解析中... (モデル: {})", model);
    let client = analyzer::GeminiClient::new(&api_key, model, config.timeout())?;
    let report = analyzer::analyze_with_spinner(&client, &uploaded).await?;
    println!("✔ 解析完了\n");

    Ok((uploaded, report))
}
