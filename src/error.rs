use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashReportError {
    #[error(transparent)]
    Common(#[from] flash_report_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("API呼び出しエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("画像処理エラー: {0}")]
    Image(#[from] image::ImageError),

    #[error("ポスター描画エラー: {0}")]
    Render(String),

    #[error("PDF生成エラー: {0}")]
    PdfGeneration(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FlashReportError>;
