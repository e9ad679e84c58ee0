//! JavaScript Bridge バインディング
//!
//! ポスターのJPEG化は html2canvas（JavaScript側）に委譲する。

use wasm_bindgen::prelude::*;

#[wasm_bindgen(module = "/js/export-bridge.js")]
extern "C" {
    /// 要素を html2canvas で描画し、JPEGの Data URL を返す
    ///
    /// # Arguments
    /// * `element_id` - ポスター要素のID
    /// * `scale` - 描画倍率
    /// * `quality` - JPEG品質 (0.0-1.0)
    #[wasm_bindgen(js_name = "capturePosterJpeg", catch)]
    pub async fn capture_poster_jpeg_js(element_id: &str, scale: f32, quality: f32) -> Result<JsValue, JsValue>;

    /// Data URL をファイルとしてダウンロード
    #[wasm_bindgen(js_name = "downloadDataUrl")]
    pub fn download_data_url_js(data_url: &str, filename: &str);
}
