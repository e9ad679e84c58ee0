//! SVG → ラスタ変換（resvg）

use crate::error::{FlashReportError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::RgbImage;
use resvg::render;
use std::path::Path;
use std::sync::Arc;
use tiny_skia::{Color, Pixmap, Transform};
use tracing::debug;
use usvg::{fontdb, Options, Tree};

/// ウルドゥー語を描けるフォントの候補（先頭から順に探す）
const FALLBACK_FAMILIES: &[&str] = &[
    "Noto Nastaliq Urdu",
    "Jameel Noori Nastaleeq",
    "Noto Naskh Arabic",
    "Noto Sans Arabic",
    "DejaVu Sans",
    "sans-serif",
];

/// フォントDBと font-family 指定
pub struct FontSet {
    db: Arc<fontdb::Database>,
    family: String,
}

impl FontSet {
    /// システムフォント + 任意のフォントファイル
    pub fn load(font_path: Option<&Path>) -> Result<Self> {
        let mut db = fontdb::Database::new();
        db.load_system_fonts();

        let mut families: Vec<String> = Vec::new();
        if let Some(path) = font_path {
            if !path.exists() {
                return Err(FlashReportError::FileNotFound(path.display().to_string()));
            }
            db.load_font_file(path)?;
            if let Some((name, _)) = db.faces().last().and_then(|face| face.families.first()) {
                debug!(family = %name, "フォント読み込み");
                families.push(name.clone());
            }
        }
        families.extend(FALLBACK_FAMILIES.iter().map(|f| f.to_string()));

        Ok(Self {
            db: Arc::new(db),
            family: font_family_list(&families),
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }
}

fn font_family_list(families: &[String]) -> String {
    families
        .iter()
        .map(|name| {
            if name.contains(' ') {
                format!("'{}'", name)
            } else {
                name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// SVGを scale 倍で描画し、白背景のRGB画像にする
pub fn rasterize(svg: &str, fonts: &FontSet, scale: f32) -> Result<RgbImage> {
    let options = Options {
        fontdb: fonts.db.clone(),
        ..Options::default()
    };
    let tree = Tree::from_str(svg, &options)
        .map_err(|e| FlashReportError::Render(format!("SVG解析エラー: {}", e)))?;

    let size = tree.size();
    let width = (size.width() * scale).ceil() as u32;
    let height = (size.height() * scale).ceil() as u32;
    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| FlashReportError::Render(format!("描画領域を確保できません: {}x{}", width, height)))?;
    pixmap.fill(Color::WHITE);

    render(&tree, Transform::from_scale(scale, scale), &mut pixmap.as_mut());
    debug!(width, height, "ポスター描画");

    // 背景が不透明なので premultiplied のままRGBを取り出してよい
    let rgb: Vec<u8> = pixmap
        .data()
        .chunks_exact(4)
        .flat_map(|px| [px[0], px[1], px[2]])
        .collect();

    RgbImage::from_raw(width, height, rgb)
        .ok_or_else(|| FlashReportError::Render("画像バッファの構築に失敗しました".into()))
}

pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut bytes, quality);
    encoder.encode_image(image)?;
    Ok(bytes)
}
