//! Gemini API連携（ブラウザ fetch 版）
//!
//! 1回の抽出 = 1往復。タイムアウト・リトライなし。

use flash_report_common::gemini::{build_extraction_request, endpoint_url, GeminiResponse};
use flash_report_common::prompts::DEFAULT_MODEL;
use flash_report_common::{parse_incident_response, Error, IncidentRecord, Result, Translator, UploadAsset};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::secure_store;

pub struct GeminiClient {
    api_key: Option<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// localStorage に保存されたキーで作る
    pub fn from_storage() -> Self {
        Self::new(secure_store::load_api_key())
    }

    pub async fn extract_and_translate(&self, asset: &UploadAsset) -> Result<IncidentRecord> {
        let api_key = self.api_key.as_deref().ok_or(Error::MissingApiKey)?;
        let request = build_extraction_request(asset)?;
        let body = serde_json::to_string(&request)?;

        let text = call_gemini_api(&endpoint_url(&self.model), api_key, &body)
            .await
            .map_err(|e| Error::Upstream(js_error_message(&e)))?;

        parse_incident_response(&text)
    }
}

impl Translator for GeminiClient {
    fn translate<'a>(&'a self, asset: &'a UploadAsset) -> LocalBoxFuture<'a, Result<IncidentRecord>> {
        self.extract_and_translate(asset).boxed_local()
    }
}

/// Gemini API呼び出し（応答テキストを返す）
async fn call_gemini_api(url: &str, api_key: &str, body: &str) -> std::result::Result<String, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;
    request.headers().set("x-goog-api-key", api_key)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        let detail = match resp.text() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|v| v.as_string())
                .unwrap_or_default(),
            Err(_) => String::new(),
        };
        return Err(JsValue::from_str(&format!("API error: {} {}", resp.status(), detail.trim())));
    }

    let json = JsFuture::from(resp.json()?).await?;
    let response: GeminiResponse = serde_wasm_bindgen::from_value(json)?;

    response.into_text().map_err(|e| JsValue::from_str(&e.to_string()))
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_config_error() {
        let client = GeminiClient::new(None);
        let asset = UploadAsset::from_bytes("image/png", b"png");

        let err = futures::executor::block_on(client.extract_and_translate(&asset)).unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_default_model() {
        assert_eq!(GeminiClient::new(Some("k".into())).model, "gemini-2.5-flash");
    }
}
