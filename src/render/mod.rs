//! ポスター描画
//!
//! レコード + 表示中の資産 → SVG → ラスタ（JPEG / PDF 出力の共通経路）

pub mod raster;
pub mod svg;

pub use raster::FontSet;
pub use svg::{build_poster_svg, PosterSvg};

use crate::error::Result;
use flash_report_common::poster::{EXPORT_SCALE, JPEG_QUALITY};
use flash_report_common::{IncidentRecord, PosterView, UploadAsset};
use image::RgbImage;
use std::path::Path;

pub struct PosterRenderer {
    fonts: FontSet,
}

impl PosterRenderer {
    pub fn new(font_path: Option<&Path>) -> Result<Self> {
        Ok(Self {
            fonts: FontSet::load(font_path)?,
        })
    }

    pub fn svg(&self, record: &IncidentRecord, asset: &UploadAsset, view: PosterView) -> PosterSvg {
        build_poster_svg(record, asset, view, self.fonts.family())
    }

    /// 出力倍率（4倍）でラスタ化
    pub fn render(&self, record: &IncidentRecord, asset: &UploadAsset, view: PosterView) -> Result<RgbImage> {
        let svg = self.svg(record, asset, view);
        raster::rasterize(&svg.markup, &self.fonts, EXPORT_SCALE)
    }

    pub fn render_jpeg(&self, record: &IncidentRecord, asset: &UploadAsset, view: PosterView) -> Result<Vec<u8>> {
        let image = self.render(record, asset, view)?;
        raster::encode_jpeg(&image, JPEG_QUALITY)
    }
}
