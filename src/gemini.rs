//! Gemini API クライアント（ネイティブ版）
//!
//! 1回の抽出 = 1往復。リトライ・ストリーミングなし。

use crate::config::Config;
use crate::error::Result;
use flash_report_common::gemini::{build_extraction_request, endpoint_url, GeminiResponse};
use flash_report_common::{parse_incident_response, Error, IncidentRecord, Translator, UploadAsset};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::time::Duration;
use tracing::{debug, info};

pub struct GeminiClient {
    client: reqwest::Client,
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key,
            model: model.into(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.api_key(), config.model.clone(), config.request_timeout())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// 文書を送り、翻訳済みレコードを受け取る
    pub async fn extract_and_translate(
        &self,
        asset: &UploadAsset,
    ) -> flash_report_common::Result<IncidentRecord> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        let request = build_extraction_request(asset)?;

        info!(model = %self.model, mime = %asset.mime_type, "Gemini 抽出リクエスト送信");
        let response = self
            .client
            .post(endpoint_url(&self.model))
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Upstream(format!("Request to Gemini failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Upstream(format!("API error: {} {}", status, body.trim())));
        }

        let payload: GeminiResponse = response
            .json()
            .await
            .map_err(|e| Error::Upstream(format!("Unreadable Gemini response: {}", e)))?;

        let text = payload.into_text()?;
        debug!(chars = text.len(), "Gemini 応答受信");

        parse_incident_response(&text)
    }
}

impl Translator for GeminiClient {
    fn translate<'a>(
        &'a self,
        asset: &'a UploadAsset,
    ) -> LocalBoxFuture<'a, flash_report_common::Result<IncidentRecord>> {
        self.extract_and_translate(asset).boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_api_key_fails_before_request() {
        let client = GeminiClient::new(None, "gemini-2.5-flash", None).unwrap();
        let asset = UploadAsset::from_bytes("image/png", b"png");

        let err = client.extract_and_translate(&asset).await.unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_from_config_keeps_model() {
        let config = Config {
            model: "gemini-2.0-flash".into(),
            ..Default::default()
        };
        let client = GeminiClient::from_config(&config).unwrap();
        assert_eq!(client.model(), "gemini-2.0-flash");
    }
}
