//! 抽出結果とアップロード資産の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - IncidentRecord: Gemini が返す翻訳済みの事故情報
//! - UploadAsset: アップロードされたファイル（MIMEタイプ + Data URL）

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::bbox::BoundingBox;
use crate::error::{Error, Result};

/// 翻訳済みの安全事故レコード
///
/// フィールド名は応答スキーマと一致させる（snake_case）。
/// `image_caption` と `box_2d` 以外は必須。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncidentRecord {
    pub title: String,
    pub operation: String,
    pub department: String,
    pub location: String,
    pub company: String,
    pub date: String,
    pub time: String,
    pub classification: String,
    pub fatal_risk: String,
    pub severity: String,
    pub summary: String,
    pub how_it_happened: String,

    /// 改行区切りの対策リスト
    pub actions: String,

    #[serde(default)]
    pub image_caption: String,

    /// [ymin, xmin, ymax, xmax]（0-1000スケール）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_2d: Option<Vec<f64>>,
}

impl IncidentRecord {
    /// 4要素の box_2d があれば BoundingBox を返す
    ///
    /// 要素数が4でない場合は box なしと同じ扱い。
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.box_2d.as_deref().and_then(BoundingBox::from_slice)
    }
}

/// アップロードされたファイルのメモリ上の表現
///
/// 切り抜きが成功したときは新しい値に置き換える（書き換えない）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadAsset {
    pub mime_type: String,
    pub data_url: String,
}

impl UploadAsset {
    pub fn new(mime_type: impl Into<String>, data_url: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            data_url: data_url.into(),
        }
    }

    /// バイト列から Data URL 形式の資産を作る
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        let data_url = format!("data:{};base64,{}", mime_type, BASE64.encode(bytes));
        Self::new(mime_type, data_url)
    }

    /// Data URL から資産を作る（MIMEタイプは Data URL から読む）
    pub fn from_data_url(data_url: impl Into<String>) -> Self {
        let data_url = data_url.into();
        let mime_type = extract_mime_type_from_data_url(&data_url).to_string();
        Self { mime_type, data_url }
    }

    /// API送信用の Base64 部分
    pub fn base64_payload(&self) -> Option<&str> {
        extract_base64_from_data_url(&self.data_url)
    }

    /// Base64 部分をデコードした生バイト列
    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        let payload = self
            .base64_payload()
            .ok_or_else(|| Error::Base64("Invalid data URL".to_string()))?;
        BASE64
            .decode(payload)
            .map_err(|e| Error::Base64(e.to_string()))
    }

    pub fn is_image(&self) -> bool {
        is_image_mime(&self.mime_type)
    }

    pub fn is_pdf(&self) -> bool {
        is_pdf_mime(&self.mime_type)
    }

    /// 保存時のファイル拡張子
    pub fn extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" | "image/jpg" => "jpg",
            "image/webp" => "webp",
            "image/gif" => "gif",
            "image/bmp" => "bmp",
            mime if is_pdf_mime(mime) => "pdf",
            _ => "bin",
        }
    }
}

pub fn is_image_mime(mime_type: &str) -> bool {
    mime_type.starts_with("image/")
}

pub fn is_pdf_mime(mime_type: &str) -> bool {
    mime_type.contains("pdf")
}

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
///
/// # Returns
/// Base64エンコードされたデータ部分、または抽出失敗時はNone
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出
///
/// 抽出失敗時は"application/octet-stream"を返す
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .strip_prefix("data:")
        .and_then(|s| s.split(';').next())
        .filter(|s| !s.is_empty())
        .unwrap_or("application/octet-stream")
}
