use crate::error::{FlashReportError, Result};
use flash_report_common::prompts::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// APIキーを読む環境変数（先頭が優先）
const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    /// Gemini 呼び出しのタイムアウト（None = 無制限）
    pub request_timeout_seconds: Option<u64>,
    /// ナスタアリーク体フォント（Noto Nastaliq Urdu など）
    pub font_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.into(),
            request_timeout_seconds: None,
            font_path: None,
            output_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| FlashReportError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("flash-report-urdu").join("config.json"))
    }

    /// APIキー（環境変数を優先）
    ///
    /// 未設定でも起動は止めない。抽出時に MissingApiKey になる。
    pub fn api_key(&self) -> Option<String> {
        API_KEY_ENV_VARS
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .chain(self.api_key.clone())
            .find(|key| !key.trim().is_empty())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_seconds
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }

    pub fn set_api_key(&mut self, key: String) -> Result<()> {
        self.api_key = Some(key);
        self.save()
    }

    pub fn clear_api_key(&mut self) -> Result<()> {
        self.api_key = None;
        self.save()
    }
}
