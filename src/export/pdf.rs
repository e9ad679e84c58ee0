use crate::error::{FlashReportError, Result};
use flash_report_common::poster::{PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const MM_PER_INCH: f32 = 25.4;

/// 描画済みポスター（JPEG）をA4 1ページのPDFにする
///
/// ページ幅に合わせて配置し、縦に長い場合はページ高さに収める。
pub fn generate_pdf(poster_jpeg: &[u8], output_path: &Path, title: &str) -> Result<()> {
    let image = printpdf::image_crate::load_from_memory(poster_jpeg)
        .map_err(|e| FlashReportError::PdfGeneration(format!("画像読み込みエラー: {}", e)))?;
    let (width_px, height_px) = (image.width() as f32, image.height() as f32);

    let placement = fit_to_page(width_px, height_px);

    let (doc, page1, layer1) = PdfDocument::new(title, Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1");
    let current_layer = doc.get_page(page1).get_layer(layer1);

    let pdf_image = Image::from_dynamic_image(&image);
    pdf_image.add_to_layer(
        current_layer,
        ImageTransform {
            translate_x: Some(Mm(placement.x_mm)),
            translate_y: Some(Mm(placement.y_mm)),
            rotate: None,
            scale_x: Some(1.0),
            scale_y: Some(1.0),
            dpi: Some(placement.dpi),
        },
    );

    let file = File::create(output_path)?;
    doc.save(&mut BufWriter::new(file))
        .map_err(|e| FlashReportError::PdfGeneration(format!("PDF保存エラー: {:?}", e)))?;

    Ok(())
}

/// ページ上の配置（左下原点）
#[derive(Debug, Clone, Copy, PartialEq)]
struct Placement {
    dpi: f32,
    x_mm: f32,
    y_mm: f32,
}

fn fit_to_page(width_px: f32, height_px: f32) -> Placement {
    let dpi_for_width = width_px / (PAGE_WIDTH_MM / MM_PER_INCH);
    let dpi_for_height = height_px / (PAGE_HEIGHT_MM / MM_PER_INCH);
    let dpi = dpi_for_width.max(dpi_for_height);

    let width_mm = width_px / dpi * MM_PER_INCH;
    let height_mm = height_px / dpi * MM_PER_INCH;

    Placement {
        dpi,
        x_mm: (PAGE_WIDTH_MM - width_mm) / 2.0,
        // 上端をページ上端に揃える
        y_mm: PAGE_HEIGHT_MM - height_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_poster_fills_page() {
        // 794x1123 の4倍
        let placement = fit_to_page(3176.0, 4492.0);
        assert!((placement.dpi - 384.0).abs() < 1.0);
        assert!(placement.x_mm.abs() < 0.5);
        assert!(placement.y_mm.abs() < 0.5);
    }

    #[test]
    fn test_tall_poster_is_centered_horizontally() {
        let placement = fit_to_page(3176.0, 8984.0);
        assert!(placement.x_mm > 50.0);
        assert!(placement.y_mm.abs() < 0.01);
    }
}
