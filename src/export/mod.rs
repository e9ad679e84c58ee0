pub mod pdf;

use crate::cli::ExportFormat;
use crate::error::Result;
use crate::render::PosterRenderer;
use flash_report_common::poster::{image_file_name, EXPORT_FAILURE_HINT};
use flash_report_common::{Error, IncidentRecord, PosterView, UploadAsset};
use std::path::{Path, PathBuf};
use tracing::warn;

/// 出力ファイル名に使う日付（UTC, YYYY-MM-DD）
pub fn export_date() -> String {
    chrono::Utc::now().format("%Y-%m-%d").to_string()
}

pub fn jpeg_path(output_dir: &Path, date: &str) -> PathBuf {
    output_dir.join(image_file_name(date))
}

pub fn pdf_path(output_dir: &Path, date: &str) -> PathBuf {
    jpeg_path(output_dir, date).with_extension("pdf")
}

pub fn record_path(output_dir: &Path, stem: &str) -> PathBuf {
    output_dir.join(format!("{}.incident.json", stem))
}

pub fn asset_path(output_dir: &Path, stem: &str, asset: &UploadAsset) -> PathBuf {
    output_dir.join(format!("{}.poster-image.{}", stem, asset.extension()))
}

/// 翻訳済みレコードをJSONで保存
pub fn write_record(record: &IncidentRecord, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// 表示中の資産（切り抜き後の画像）を保存
pub fn write_asset(asset: &UploadAsset, path: &Path) -> Result<()> {
    std::fs::write(path, asset.decode_bytes()?)?;
    Ok(())
}

/// 出力結果（失敗しても他の出力は続ける）
#[derive(Debug, Default)]
pub struct ExportOutcome {
    pub written: Vec<PathBuf>,
    pub failures: Vec<String>,
}

impl ExportOutcome {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// ポスターを指定形式で出力
///
/// 描画・書き込みの失敗はエラーにせず、警告と案内を表示して記録する。
pub fn export_poster(
    renderer: &PosterRenderer,
    record: &IncidentRecord,
    asset: &UploadAsset,
    view: PosterView,
    format: &ExportFormat,
    output_dir: &Path,
    date: &str,
) -> ExportOutcome {
    let mut outcome = ExportOutcome::default();
    if !format.includes_jpeg() && !format.includes_pdf() {
        return outcome;
    }

    println!("- ポスターを描画中... (揃え: {}, 行間: {})", view.align.as_str(), view.spacing.as_str());
    let jpeg = match renderer.render_jpeg(record, asset, view) {
        Ok(bytes) => bytes,
        Err(e) => {
            report_failure(&mut outcome, "描画", &e.to_string());
            return outcome;
        }
    };

    if format.includes_jpeg() {
        let path = jpeg_path(output_dir, date);
        match std::fs::write(&path, &jpeg) {
            Ok(()) => {
                println!("✔ JPEG出力: {}", path.display());
                outcome.written.push(path);
            }
            Err(e) => report_failure(&mut outcome, "JPEG", &e.to_string()),
        }
    }

    if format.includes_pdf() {
        let path = pdf_path(output_dir, date);
        match pdf::generate_pdf(&jpeg, &path, &record.title) {
            Ok(()) => {
                println!("✔ PDF出力: {}", path.display());
                outcome.written.push(path);
            }
            Err(e) => report_failure(&mut outcome, "PDF", &e.to_string()),
        }
    }

    outcome
}

fn report_failure(outcome: &mut ExportOutcome, stage: &str, detail: &str) {
    let error = Error::Export(format!("{}: {}", stage, detail));
    warn!(error = %error, "ポスター出力に失敗");
    println!("⚠ {}", EXPORT_FAILURE_HINT);
    outcome.failures.push(error.to_string());
}
