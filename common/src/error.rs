//! エラー型定義
//!
//! 画面遷移に対応する分類:
//! - Validation: ファイル形式不正（Uploading のまま）
//! - MissingApiKey: 認証情報なし（キー選択を案内）
//! - Upstream: Gemini 応答が空・不正（リセットで再試行）
//! - Crop / Export: 見た目だけの失敗（元画像・別出力にフォールバック）

use thiserror::Error;

/// Gemini 応答が空のときのメッセージ
pub const EMPTY_RESPONSE_MESSAGE: &str = "No response from Gemini.";

/// メッセージを持たない失敗に使う既定文言
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to translate the poster. Please try again.";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Validation(String),

    #[error("API Key is missing. Please select an API Key.")]
    MissingApiKey,

    #[error("{0}")]
    Upstream(String),

    #[error("Crop failed: {0}")]
    Crop(String),

    #[error("Could not generate image: {0}")]
    Export(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 decode error: {0}")]
    Base64(String),

    #[error("Invalid state: {0}")]
    InvalidState(&'static str),
}

impl Error {
    /// 認証情報の設定で回復できる失敗か
    pub fn is_config(&self) -> bool {
        matches!(self, Error::MissingApiKey)
    }

    /// Error 状態に表示する文言（空なら既定文言）
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
