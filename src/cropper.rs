//! 事故写真の切り抜き（image クレート版）

use flash_report_common::{map_box_to_pixels, BoundingBox, Cropper, Error, UploadAsset};
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use image::ImageFormat;
use std::io::Cursor;
use tracing::debug;

/// デコード → 矩形切り抜き → PNG 再エンコード
#[derive(Debug, Default, Clone, Copy)]
pub struct ImageCropper;

impl ImageCropper {
    pub fn crop_asset(
        &self,
        asset: &UploadAsset,
        bbox: BoundingBox,
    ) -> flash_report_common::Result<UploadAsset> {
        let bytes = asset.decode_bytes()?;
        let img = image::load_from_memory(&bytes).map_err(|e| Error::Crop(e.to_string()))?;
        let (width, height) = (img.width(), img.height());

        let Some(region) = map_box_to_pixels(&bbox, width, height)
            .and_then(|rect| rect.to_crop_region(width, height))
        else {
            return Ok(asset.clone());
        };

        debug!(?region, width, height, "切り抜き");
        let cropped = img.crop_imm(region.x, region.y, region.width, region.height);

        let mut buf = Vec::new();
        cropped
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .map_err(|e| Error::Crop(e.to_string()))?;

        Ok(UploadAsset::from_bytes("image/png", &buf))
    }
}

impl Cropper for ImageCropper {
    fn crop<'a>(
        &'a self,
        asset: &'a UploadAsset,
        bbox: BoundingBox,
    ) -> LocalBoxFuture<'a, flash_report_common::Result<UploadAsset>> {
        let result = self.crop_asset(asset, bbox);
        async move { result }.boxed_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgb, RgbImage};

    fn png_asset(width: u32, height: u32) -> UploadAsset {
        let img = RgbImage::from_fn(width, height, |x, _| {
            if x < width / 2 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) }
        });
        let mut buf = Vec::new();
        DynamicImage::ImageRgb8(img)
            .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        UploadAsset::from_bytes("image/png", &buf)
    }

    fn decode(asset: &UploadAsset) -> DynamicImage {
        image::load_from_memory(&asset.decode_bytes().unwrap()).unwrap()
    }

    #[test]
    fn test_crop_dimensions_follow_box() {
        let asset = png_asset(2000, 1000);
        let bbox = BoundingBox::new(100.0, 200.0, 400.0, 700.0);

        let cropped = ImageCropper.crop_asset(&asset, bbox).unwrap();
        let img = decode(&cropped);

        assert_eq!(cropped.mime_type, "image/png");
        assert_eq!((img.width(), img.height()), (1000, 300));
    }

    #[test]
    fn test_crop_takes_pixels_from_box_origin() {
        let asset = png_asset(100, 100);
        // 右半分（青）だけを切り抜く
        let bbox = BoundingBox::new(0.0, 600.0, 500.0, 900.0);

        let img = decode(&ImageCropper.crop_asset(&asset, bbox).unwrap()).to_rgb8();
        assert_eq!(img.dimensions(), (30, 50));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 0, 255]));
    }

    #[test]
    fn test_box_past_left_edge_keeps_only_inside_pixels() {
        let asset = png_asset(100, 100);
        let bbox = BoundingBox::new(0.0, -100.0, 500.0, 500.0);

        let img = decode(&ImageCropper.crop_asset(&asset, bbox).unwrap()).to_rgb8();
        assert_eq!(img.dimensions(), (50, 50));
        assert_eq!(img.get_pixel(49, 0), &Rgb([255, 0, 0]));
    }

    #[test]
    fn test_degenerate_box_returns_identical_asset() {
        let asset = png_asset(40, 40);
        let bbox = BoundingBox::new(500.0, 500.0, 500.0, 900.0);

        let result = ImageCropper.crop_asset(&asset, bbox).unwrap();
        assert_eq!(result, asset);
    }

    #[test]
    fn test_undecodable_asset_is_crop_error() {
        let asset = UploadAsset::from_bytes("image/png", b"not an image");
        let err = ImageCropper
            .crop_asset(&asset, BoundingBox::new(0.0, 0.0, 500.0, 500.0))
            .unwrap_err();
        assert!(matches!(err, Error::Crop(_)));
    }
}
