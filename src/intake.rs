//! 入力ファイルの読み込み
//!
//! MIMEタイプはマジックバイトで判定し、判定できなければ拡張子から推定する。

use crate::error::{FlashReportError, Result};
use flash_report_common::UploadAsset;
use std::path::Path;
use tracing::debug;

/// 入力ファイルを読み込み、Data URL 形式の資産にする
///
/// 受け付けるかどうかの判定（画像/PDF）は Session::begin が行う。
pub fn read_upload(path: &Path) -> Result<UploadAsset> {
    if !path.exists() {
        return Err(FlashReportError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let mime_type = sniff_mime_type(&bytes, path);
    debug!(path = %path.display(), %mime_type, size = bytes.len(), "入力ファイル読み込み");

    Ok(UploadAsset::from_bytes(&mime_type, &bytes))
}

pub fn sniff_mime_type(bytes: &[u8], path: &Path) -> String {
    if let Some(kind) = infer::get(bytes) {
        return kind.mime_type().to_string();
    }
    mime_from_extension(path).to_string()
}

fn mime_from_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        "pdf" => "application/pdf",
        "json" => "application/json",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_sniff_by_magic_bytes() {
        let png = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
        assert_eq!(sniff_mime_type(png, Path::new("photo.bin")), "image/png");

        let pdf = b"%PDF-1.7\n";
        assert_eq!(sniff_mime_type(pdf, Path::new("report")), "application/pdf");
    }

    #[test]
    fn test_sniff_falls_back_to_extension() {
        assert_eq!(sniff_mime_type(b"??", Path::new("a.JPG")), "image/jpeg");
        assert_eq!(sniff_mime_type(b"hello", Path::new("notes.txt")), "text/plain");
        assert_eq!(
            sniff_mime_type(b"hello", Path::new("unknown")),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = read_upload(&PathBuf::from("/nonexistent/incident.png")).unwrap_err();
        assert!(matches!(err, FlashReportError::FileNotFound(_)));
    }
}
