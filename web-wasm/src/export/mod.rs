//! ポスター出力（画像ダウンロード / 印刷）

mod js_bindings;

use flash_report_common::poster::{image_file_name, EXPORT_SCALE, JPEG_QUALITY};

/// ポスター要素のID（html2canvas の対象）
pub const POSTER_ELEMENT_ID: &str = "poster-page";

/// ポスターを4倍・品質0.9のJPEGにしてダウンロード
pub async fn download_poster_jpeg() -> Result<(), String> {
    let data_url = js_bindings::capture_poster_jpeg_js(
        POSTER_ELEMENT_ID,
        EXPORT_SCALE,
        JPEG_QUALITY as f32 / 100.0,
    )
    .await
    .map_err(|e| format!("{:?}", e))?
    .as_string()
    .ok_or_else(|| "capture did not return a data URL".to_string())?;

    js_bindings::download_data_url_js(&data_url, &image_file_name(&today_iso()));
    Ok(())
}

/// ブラウザの印刷ダイアログ（PDF保存はここから）
pub fn print_poster() -> Result<(), String> {
    web_sys::window()
        .ok_or_else(|| "window is not available".to_string())?
        .print()
        .map_err(|e| format!("{:?}", e))
}

/// 今日の日付（UTC, YYYY-MM-DD）
fn today_iso() -> String {
    let iso = String::from(js_sys::Date::new_0().to_iso_string());
    iso.split('T').next().unwrap_or_default().to_string()
}
