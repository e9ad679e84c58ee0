//! 正規化バウンディングボックス → ピクセル座標の変換
//!
//! Gemini は写真領域を [ymin, xmin, ymax, xmax]（0-1000スケール）で返す。
//! 実画像の縦横ピクセル数を掛けて切り抜き矩形にする。

use serde::{Deserialize, Serialize};

/// 正規化座標のスケール
pub const NORMALIZED_SCALE: f64 = 1000.0;

/// 0-1000 スケールのバウンディングボックス
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub ymin: f64,
    pub xmin: f64,
    pub ymax: f64,
    pub xmax: f64,
}

impl BoundingBox {
    pub fn new(ymin: f64, xmin: f64, ymax: f64, xmax: f64) -> Self {
        Self { ymin, xmin, ymax, xmax }
    }

    /// [ymin, xmin, ymax, xmax] から作成（要素数が4以外は None）
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        match values {
            [ymin, xmin, ymax, xmax] => Some(Self::new(*ymin, *xmin, *ymax, *xmax)),
            _ => None,
        }
    }

    /// 幅・高さが正か
    pub fn has_extent(&self) -> bool {
        self.xmax > self.xmin && self.ymax > self.ymin
    }
}

/// ピクセル空間の切り抜き矩形（小数のまま）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    /// 画像内に収まる整数矩形 (x, y, width, height)
    ///
    /// 範囲外にはみ出した部分は切り詰める。面積が 0 になる場合は None。
    pub fn to_crop_region(&self, image_width: u32, image_height: u32) -> Option<CropRegion> {
        let (x, width) = clamp_span(self.x, self.width, image_width)?;
        let (y, height) = clamp_span(self.y, self.height, image_height)?;

        Some(CropRegion { x, y, width, height })
    }
}

/// [start, start + len) と [0, limit) の共通部分（開始位置, 長さ）
fn clamp_span(start: f64, len: f64, limit: u32) -> Option<(u32, u32)> {
    let begin = start.max(0.0).floor();
    let end = (start + len).min(f64::from(limit));
    let span = (end - begin).floor();
    if begin >= f64::from(limit) || span < 1.0 {
        return None;
    }
    Some((begin as u32, span as u32))
}

/// 整数ピクセルの切り抜き領域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// ボックスを画像のピクセル矩形に変換
///
/// 幅または高さが 0 以下なら None（切り抜き不可。呼び出し側は元画像を使う）。
pub fn map_box_to_pixels(bbox: &BoundingBox, image_width: u32, image_height: u32) -> Option<PixelRect> {
    let w = f64::from(image_width);
    let h = f64::from(image_height);

    let rect = PixelRect {
        x: bbox.xmin * w / NORMALIZED_SCALE,
        y: bbox.ymin * h / NORMALIZED_SCALE,
        width: (bbox.xmax - bbox.xmin) * w / NORMALIZED_SCALE,
        height: (bbox.ymax - bbox.ymin) * h / NORMALIZED_SCALE,
    };

    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_box_concrete_scenario() {
        let bbox = BoundingBox::from_slice(&[100.0, 200.0, 400.0, 700.0]).unwrap();
        let rect = map_box_to_pixels(&bbox, 2000, 1000).unwrap();
        assert_eq!(
            rect,
            PixelRect { x: 400.0, y: 100.0, width: 1000.0, height: 300.0 }
        );
    }

    #[test]
    fn test_map_box_origin_scales_linearly() {
        let a = map_box_to_pixels(&BoundingBox::new(100.0, 100.0, 900.0, 900.0), 800, 600).unwrap();
        let b = map_box_to_pixels(&BoundingBox::new(200.0, 200.0, 900.0, 900.0), 800, 600).unwrap();
        assert!((b.x - 2.0 * a.x).abs() < 1e-9);
        assert!((b.y - 2.0 * a.y).abs() < 1e-9);
    }

    #[test]
    fn test_map_box_area_proportional() {
        let (w, h) = (1234, 987);
        let boxes = [
            BoundingBox::new(0.0, 0.0, 500.0, 500.0),
            BoundingBox::new(100.0, 300.0, 350.0, 900.0),
            BoundingBox::new(10.0, 20.0, 30.0, 40.0),
        ];
        let factor = f64::from(w) * f64::from(h) / (NORMALIZED_SCALE * NORMALIZED_SCALE);

        for bbox in boxes {
            let rect = map_box_to_pixels(&bbox, w, h).unwrap();
            let expected = (bbox.xmax - bbox.xmin) * (bbox.ymax - bbox.ymin) * factor;
            assert!((rect.width * rect.height - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_boxes_have_no_crop() {
        let cases = [
            BoundingBox::new(100.0, 500.0, 400.0, 500.0),
            BoundingBox::new(400.0, 100.0, 400.0, 700.0),
            BoundingBox::new(500.0, 100.0, 400.0, 700.0),
            BoundingBox::new(100.0, 800.0, 400.0, 700.0),
        ];
        for bbox in cases {
            assert!(!bbox.has_extent());
            assert!(map_box_to_pixels(&bbox, 2000, 1000).is_none(), "{:?}", bbox);
        }
    }

    #[test]
    fn test_from_slice_requires_four_values() {
        assert!(BoundingBox::from_slice(&[]).is_none());
        assert!(BoundingBox::from_slice(&[1.0, 2.0, 3.0]).is_none());
        assert!(BoundingBox::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_none());
    }

    #[test]
    fn test_crop_region_clamps_to_image() {
        let rect = PixelRect { x: 90.5, y: -3.0, width: 50.0, height: 20.9 };
        let region = rect.to_crop_region(100, 100).unwrap();
        assert_eq!(region, CropRegion { x: 90, y: 0, width: 10, height: 17 });
    }

    #[test]
    fn test_negative_origin_shrinks_region() {
        let bbox = BoundingBox::from_slice(&[0.0, -100.0, 500.0, 500.0]).unwrap();
        let rect = map_box_to_pixels(&bbox, 1000, 1000).unwrap();
        assert_eq!(rect.x, -100.0);

        let region = rect.to_crop_region(1000, 1000).unwrap();
        assert_eq!(region, CropRegion { x: 0, y: 0, width: 500, height: 500 });
    }

    #[test]
    fn test_region_left_of_image_is_none() {
        let rect = PixelRect { x: -50.0, y: 0.0, width: 40.0, height: 10.0 };
        assert!(rect.to_crop_region(100, 100).is_none());
    }

    #[test]
    fn test_crop_region_outside_image() {
        let rect = PixelRect { x: 120.0, y: 0.0, width: 10.0, height: 10.0 };
        assert!(rect.to_crop_region(100, 100).is_none());

        let rect = PixelRect { x: 0.0, y: 0.0, width: 0.4, height: 10.0 };
        assert!(rect.to_crop_region(100, 100).is_none());
    }
}
