//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use flash_report_common::state::VALIDATION_MESSAGE;
use flash_report_common::{AppState, Session};
use flash_report_urdu::error::FlashReportError;
use flash_report_urdu::intake;
use std::path::Path;
use tempfile::tempdir;

/// 存在しないファイルを読み込んだ場合
#[test]
fn test_read_nonexistent_file() {
    let result = intake::read_upload(Path::new("/nonexistent/path/12345.png"));
    assert!(matches!(result, Err(FlashReportError::FileNotFound(_))));
}

/// テキストファイルは読み込めるが、受付で弾かれる
#[test]
fn test_text_file_is_rejected_by_session() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "hello").unwrap();

    let asset = intake::read_upload(&path).unwrap();
    assert_eq!(asset.mime_type, "text/plain");

    let mut session = Session::new();
    let err = session.begin(asset).unwrap_err();

    assert!(matches!(err, flash_report_common::Error::Validation(_)));
    assert_eq!(session.state(), &AppState::Uploading);
    assert_eq!(session.validation_message(), Some(VALIDATION_MESSAGE));
}

/// 拡張子が偽装されていても中身で判定する
#[test]
fn test_png_with_wrong_extension_is_accepted() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("report.txt");
    std::fs::write(&path, b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR").unwrap();

    let asset = intake::read_upload(&path).unwrap();
    assert_eq!(asset.mime_type, "image/png");

    let mut session = Session::new();
    assert!(session.begin(asset).is_ok());
    assert_eq!(session.state().as_str(), "processing");
}

/// FlashReportErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        FlashReportError::Config("テスト設定エラー".to_string()),
        FlashReportError::FileNotFound("test.jpg".to_string()),
        FlashReportError::Render("描画エラー".to_string()),
        FlashReportError::PdfGeneration("PDF生成エラー".to_string()),
        FlashReportError::Common(flash_report_common::Error::MissingApiKey),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// MissingApiKeyは透過的に表示され、設定で回復できる失敗として扱う
#[test]
fn test_missing_api_key_is_config() {
    let err: FlashReportError = flash_report_common::Error::MissingApiKey.into();

    assert!(matches!(&err, FlashReportError::Common(e) if e.is_config()));
    assert_eq!(format!("{}", err), "API Key is missing. Please select an API Key.");
}

#[test]
fn test_upstream_error_is_not_config() {
    let err: FlashReportError = flash_report_common::Error::Upstream("API error: 500".into()).into();

    assert!(matches!(&err, FlashReportError::Common(e) if !e.is_config()));
    assert!(format!("{}", err).contains("500"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: FlashReportError = io_err.into();

    assert!(matches!(err, FlashReportError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: FlashReportError = json_err.into();

    assert!(matches!(err, FlashReportError::JsonParse(_)));
}
