use flash_report_common::UploadAsset;
use flash_report_urdu::gemini::GeminiClient;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;

#[tokio::test]
async fn gemini_extraction_integration() {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => {
            eprintln!("GEMINI_API_KEY not set; skipping integration test");
            return;
        }
    };

    // 文字のない単色画像でも、スキーマどおりのJSONが返ること
    let img = RgbImage::from_pixel(320, 240, Rgb([240, 240, 240]));
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("PNGエンコード失敗");
    let asset = UploadAsset::from_bytes("image/png", &buf);

    let client = GeminiClient::new(Some(api_key), "gemini-2.5-flash", None).expect("client build failed");
    let record = client
        .extract_and_translate(&asset)
        .await
        .expect("gemini extraction failed");

    if let Some(values) = &record.box_2d {
        for v in values {
            assert!((0.0..=1000.0).contains(v), "box_2d out of range: {:?}", values);
        }
    }
}
