use clap::Parser;
use flash_report_common::{process_upload_with, AppState, PipelineOptions, PosterView, Session, UploadAsset};
use flash_report_urdu::{cli, config, cropper, error, export, gemini, intake, logging, render};
use cli::{Cli, Commands, ExportFormat};
use config::Config;
use error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let config = Config::load()?;

    match cli.command {
        Commands::Translate { file, output, format, align, spacing, no_crop } => {
            println!("📰 flash-report - ウルドゥー語ポスター生成\n");

            // 1. 入力読み込み + 形式チェック
            println!("[1/3] ファイルを読み込み中...");
            let asset = intake::read_upload(&file)?;

            // 2. Gemini 抽出・翻訳 + 切り抜き
            let translator = gemini::GeminiClient::from_config(&config)?;
            let spinner = ProgressBar::new_spinner();
            let mut session = Session::new();
            let started = process_upload_with(
                &mut session,
                &translator,
                &cropper::ImageCropper,
                asset,
                PipelineOptions { crop: !no_crop },
                |s| {
                    if let Some(accepted) = s.displayed_asset() {
                        println!("✔ {} ({})\n", file.display(), accepted.mime_type);
                    }
                    println!("[2/3] Gemini で抽出・翻訳中... (モデル: {})", translator.model());
                    start_spinner(&spinner);
                },
            )
            .await;
            spinner.finish_and_clear();

            if started.is_err() {
                if let Some(message) = session.validation_message() {
                    println!("✖ {}", message);
                    std::process::exit(1);
                }
            }
            started?;

            let (record, displayed) = match session.state() {
                AppState::Result { record, asset } => (record, asset),
                AppState::Error { message, needs_api_key } => {
                    println!("✖ {}", message);
                    if *needs_api_key {
                        println!("  → flash-report config --set-api-key <KEY> でAPIキーを設定してください");
                        println!("    （環境変数 GEMINI_API_KEY / API_KEY も使えます）");
                    }
                    std::process::exit(1);
                }
                _ => return Ok(()),
            };
            println!("✔ 翻訳完了: {}\n", record.title);

            // 3. 保存 + ポスター出力
            println!("[3/3] 結果を保存中...");
            let output_dir = resolve_output_dir(output, &config)?;
            let stem = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("flash-report");

            let record_path = export::record_path(&output_dir, stem);
            export::write_record(record, &record_path)?;
            println!("✔ レコード保存: {}", record_path.display());

            if displayed.is_image() {
                let asset_path = export::asset_path(&output_dir, stem, displayed);
                export::write_asset(displayed, &asset_path)?;
                println!("✔ ポスター画像保存: {}", asset_path.display());
            }

            let view = PosterView { align, spacing };
            let ok = export_with_config(record, displayed, view, &format, &output_dir, &config)?;

            println!("\n{} 完了", if ok { "✅" } else { "⚠" });
        }

        Commands::Render { record, image, output, format, align, spacing } => {
            println!("🖼 flash-report - ポスター再出力\n");

            let content = std::fs::read_to_string(&record)?;
            let incident: flash_report_common::IncidentRecord = serde_json::from_str(&content)?;

            // 画像未指定は代替表示（PDFアップロードと同じ扱い）
            let asset = match image {
                Some(path) => intake::read_upload(&path)?,
                None => UploadAsset::from_bytes("application/pdf", &[]),
            };

            let output_dir = resolve_output_dir(output, &config)?;
            let view = PosterView { align, spacing };
            let ok = export_with_config(&incident, &asset, view, &format, &output_dir, &config)?;

            println!("\n{} 完了", if ok { "✅" } else { "⚠" });
        }

        Commands::Config { set_api_key, clear_api_key, set_model, set_font, set_timeout, show } => {
            let mut config = config;

            if let Some(key) = set_api_key {
                config.set_api_key(key)?;
                println!("✔ APIキーを設定しました");
            }

            if clear_api_key {
                config.clear_api_key()?;
                println!("✔ APIキーを削除しました");
            }

            if let Some(model) = set_model {
                config.model = model;
                config.save()?;
                println!("✔ モデルを設定しました: {}", config.model);
            }

            if let Some(font) = set_font {
                if !font.exists() {
                    return Err(error::FlashReportError::FileNotFound(font.display().to_string()));
                }
                config.font_path = Some(font);
                config.save()?;
                println!("✔ フォントを設定しました");
            }

            if let Some(secs) = set_timeout {
                config.request_timeout_seconds = (secs > 0).then_some(secs);
                config.save()?;
                match config.request_timeout_seconds {
                    Some(secs) => println!("✔ タイムアウトを設定しました: {}秒", secs),
                    None => println!("✔ タイムアウトを解除しました"),
                }
            }

            if show {
                println!("設定:");
                println!("  パス: {}", Config::config_path()?.display());
                println!("  モデル: {}", config.model);
                println!("  APIキー: {}", if config.api_key().is_some() { "設定済み" } else { "未設定" });
                println!(
                    "  タイムアウト: {}",
                    config
                        .request_timeout_seconds
                        .map(|s| format!("{}秒", s))
                        .unwrap_or_else(|| "なし".into())
                );
                println!(
                    "  フォント: {}",
                    config
                        .font_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "システムフォント".into())
                );
                println!(
                    "  出力先: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| ".".into())
                );
            }
        }
    }

    Ok(())
}

/// 抽出中のスピナーを開始
fn start_spinner(spinner: &ProgressBar) {
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.yellow} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message("Analyzing Document... Extracting data and translating to Urdu");
    spinner.enable_steady_tick(Duration::from_millis(100));
}

fn resolve_output_dir(output: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    let dir = output
        .or_else(|| config.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// ポスターを出力（成功なら true）
fn export_with_config(
    record: &flash_report_common::IncidentRecord,
    asset: &UploadAsset,
    view: PosterView,
    format: &ExportFormat,
    output_dir: &Path,
    config: &Config,
) -> Result<bool> {
    if *format == ExportFormat::Json {
        return Ok(true);
    }

    let renderer = render::PosterRenderer::new(config.font_path.as_deref())?;
    let outcome = export::export_poster(
        &renderer,
        record,
        asset,
        view,
        format,
        output_dir,
        &export::export_date(),
    );
    Ok(outcome.is_success())
}
