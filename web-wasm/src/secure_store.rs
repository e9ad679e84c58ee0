//! APIキーの保存（localStorage）

use gloo::storage::{LocalStorage, Storage};

const API_KEY_STORAGE_KEY: &str = "flash-report-urdu.gemini-api-key";

/// 保存済みのAPIキー（空文字は未設定扱い）
pub fn load_api_key() -> Option<String> {
    LocalStorage::get::<String>(API_KEY_STORAGE_KEY)
        .ok()
        .filter(|key| !key.trim().is_empty())
}

pub fn save_api_key(api_key: &str) -> Result<(), String> {
    LocalStorage::set(API_KEY_STORAGE_KEY, api_key.trim()).map_err(|e| format!("保存失敗: {}", e))
}

pub fn clear_api_key() {
    LocalStorage::delete(API_KEY_STORAGE_KEY);
}
