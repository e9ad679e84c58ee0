//! アップロード → 処理中 → 結果 | エラー の状態遷移
//!
//! 遷移は一方向のみ。reset だけがどの状態からでも Uploading に戻す。

use crate::error::{Error, Result};
use crate::types::{is_image_mime, is_pdf_mime, IncidentRecord, UploadAsset};

/// 対応外ファイルのときの案内文
pub const VALIDATION_MESSAGE: &str = "Please upload an image file (JPG, PNG) or PDF.";

/// アプリケーションの状態
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AppState {
    #[default]
    Uploading,
    /// 抽出中。元ファイルを仮表示する
    Processing { asset: UploadAsset },
    /// 抽出完了。asset は切り抜き済みの場合がある
    Result {
        record: IncidentRecord,
        asset: UploadAsset,
    },
    Error {
        message: String,
        /// APIキー未設定のため、キー選択を案内する
        needs_api_key: bool,
    },
}

impl AppState {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppState::Uploading => "uploading",
            AppState::Processing { .. } => "processing",
            AppState::Result { .. } => "result",
            AppState::Error { .. } => "error",
        }
    }
}

/// MIMEタイプ検証（画像 or PDF のみ）
pub fn validate_mime_type(mime_type: &str) -> Result<()> {
    if is_image_mime(mime_type) || is_pdf_mime(mime_type) {
        Ok(())
    } else {
        Err(Error::Validation(VALIDATION_MESSAGE.to_string()))
    }
}

/// 1ユーザー・1リクエストのセッション
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: AppState,
    validation_message: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Uploading 画面に出す検証メッセージ
    pub fn validation_message(&self) -> Option<&str> {
        self.validation_message.as_deref()
    }

    /// 現在表示している資産（処理中は元ファイル、結果では切り抜き後）
    pub fn displayed_asset(&self) -> Option<&UploadAsset> {
        match &self.state {
            AppState::Processing { asset } | AppState::Result { asset, .. } => Some(asset),
            _ => None,
        }
    }

    pub fn record(&self) -> Option<&IncidentRecord> {
        match &self.state {
            AppState::Result { record, .. } => Some(record),
            _ => None,
        }
    }

    /// ファイル選択を受け付けて Processing に進む
    ///
    /// 形式が不正な場合は Uploading のまま検証メッセージを残し、Validation エラーを返す。
    pub fn begin(&mut self, asset: UploadAsset) -> Result<()> {
        if !matches!(self.state, AppState::Uploading) {
            return Err(Error::InvalidState("an upload is already in progress"));
        }

        if let Err(e) = validate_mime_type(&asset.mime_type) {
            self.validation_message = Some(e.to_string());
            return Err(e);
        }

        self.validation_message = None;
        self.state = AppState::Processing { asset };
        Ok(())
    }

    /// 抽出成功 → Result
    pub fn complete(&mut self, record: IncidentRecord, asset: UploadAsset) -> Result<()> {
        if !matches!(self.state, AppState::Processing { .. }) {
            return Err(Error::InvalidState("no extraction is in progress"));
        }
        self.state = AppState::Result { record, asset };
        Ok(())
    }

    /// 抽出失敗 → Error
    pub fn fail(&mut self, error: &Error) -> Result<()> {
        if !matches!(self.state, AppState::Processing { .. }) {
            return Err(Error::InvalidState("no extraction is in progress"));
        }
        self.state = AppState::Error {
            message: error.user_message(),
            needs_api_key: error.is_config(),
        };
        Ok(())
    }

    /// 抽出結果を反映する（成功なら Result、失敗なら Error）
    pub fn finish(&mut self, outcome: Result<(IncidentRecord, UploadAsset)>) -> Result<()> {
        match outcome {
            Ok((record, asset)) => self.complete(record, asset),
            Err(e) => self.fail(&e),
        }
    }

    /// どの状態からでも Uploading に戻し、保持していた値をすべて捨てる
    pub fn reset(&mut self) {
        self.state = AppState::Uploading;
        self.validation_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_asset() -> UploadAsset {
        UploadAsset::from_bytes("image/png", b"png")
    }

    #[test]
    fn test_validate_mime_type() {
        assert!(validate_mime_type("image/jpeg").is_ok());
        assert!(validate_mime_type("image/png").is_ok());
        assert!(validate_mime_type("application/pdf").is_ok());
        assert!(validate_mime_type("application/x-pdf").is_ok());
        assert!(validate_mime_type("text/plain").is_err());
        assert!(validate_mime_type("").is_err());
    }

    #[test]
    fn test_invalid_file_stays_in_uploading() {
        let mut session = Session::new();
        let err = session
            .begin(UploadAsset::from_bytes("text/plain", b"hello"))
            .unwrap_err();

        assert!(matches!(err, Error::Validation(_)));
        assert_eq!(session.state(), &AppState::Uploading);
        assert_eq!(session.validation_message(), Some(VALIDATION_MESSAGE));
    }

    #[test]
    fn test_valid_file_moves_to_processing() {
        let mut session = Session::new();
        session.begin(UploadAsset::from_bytes("text/plain", b"x")).ok();
        session.begin(image_asset()).unwrap();

        assert_eq!(session.state().as_str(), "processing");
        assert_eq!(session.displayed_asset(), Some(&image_asset()));
        assert!(session.validation_message().is_none());
    }

    #[test]
    fn test_second_upload_rejected_while_processing() {
        let mut session = Session::new();
        session.begin(image_asset()).unwrap();
        let err = session.begin(image_asset()).unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn test_complete_requires_processing() {
        let mut session = Session::new();
        let err = session
            .complete(IncidentRecord::default(), image_asset())
            .unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
        assert_eq!(session.state(), &AppState::Uploading);
    }

    #[test]
    fn test_fail_then_reset() {
        let mut session = Session::new();
        session.begin(image_asset()).unwrap();
        session.fail(&Error::Upstream("boom".into())).unwrap();

        match session.state() {
            AppState::Error { message, needs_api_key } => {
                assert_eq!(message, "boom");
                assert!(!needs_api_key);
            }
            other => panic!("unexpected state: {:?}", other),
        }

        session.reset();
        assert_eq!(session.state(), &AppState::Uploading);
        assert!(session.record().is_none());
        assert!(session.displayed_asset().is_none());
    }

    #[test]
    fn test_missing_key_offers_remediation() {
        let mut session = Session::new();
        session.begin(image_asset()).unwrap();
        session.finish(Err(Error::MissingApiKey)).unwrap();

        assert!(matches!(
            session.state(),
            AppState::Error { needs_api_key: true, .. }
        ));
    }

    #[test]
    fn test_reset_from_result_discards_record() {
        let mut session = Session::new();
        session.begin(image_asset()).unwrap();
        session
            .finish(Ok((IncidentRecord::default(), image_asset())))
            .unwrap();
        assert!(session.record().is_some());

        session.reset();
        assert!(session.record().is_none());
        assert_eq!(session.state().as_str(), "uploading");
    }
}
