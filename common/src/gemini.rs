//! Gemini generateContent のリクエスト/レスポンス型
//!
//! 通信（reqwest / fetch）は各プラットフォーム側で行い、
//! ここではリクエストの組み立てと応答テキストの取り出しのみを扱う。

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result, EMPTY_RESPONSE_MESSAGE};
use crate::prompts::{response_schema, EXTRACTION_PROMPT};
use crate::types::UploadAsset;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// generateContent のエンドポイントURL
pub fn endpoint_url(model: &str) -> String {
    format!("{}/{}:generateContent", GEMINI_API_BASE, model)
}

/// Gemini APIリクエスト
#[derive(Debug, Serialize)]
pub struct GeminiRequest {
    pub contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    pub response_mime_type: String,
    #[serde(rename = "responseSchema")]
    pub response_schema: Value,
}

/// Gemini APIレスポンス
#[derive(Debug, Deserialize)]
pub struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    #[serde(default)]
    pub text: Option<String>,
}

impl GeminiResponse {
    /// 最初の候補のテキストを連結して返す（空なら Upstream エラー）
    pub fn into_text(self) -> Result<String> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(Error::Upstream(EMPTY_RESPONSE_MESSAGE.to_string()));
        }
        Ok(text)
    }
}

/// 抽出リクエストを組み立てる（文書 → 指示 の順）
pub fn build_extraction_request(asset: &UploadAsset) -> Result<GeminiRequest> {
    let data = asset
        .base64_payload()
        .ok_or_else(|| Error::Base64("Invalid data URL".to_string()))?;

    Ok(GeminiRequest {
        contents: vec![Content {
            parts: vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: asset.mime_type.clone(),
                        data: data.to_string(),
                    },
                },
                Part::Text {
                    text: EXTRACTION_PROMPT.to_string(),
                },
            ],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: response_schema(),
        },
    })
}
