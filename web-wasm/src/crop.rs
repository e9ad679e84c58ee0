//! 事故写真の切り抜き（canvas 版）

use flash_report_common::{map_box_to_pixels, BoundingBox, Cropper, Error, Result, UploadAsset};
use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

/// 画像を読み込んで矩形を canvas に描き、PNG の Data URL にする
pub struct CanvasCropper;

impl CanvasCropper {
    pub async fn crop_asset(&self, asset: &UploadAsset, bbox: BoundingBox) -> Result<UploadAsset> {
        let image = load_image(&asset.data_url).await?;
        let (width, height) = (image.natural_width(), image.natural_height());

        let Some(region) =
            map_box_to_pixels(&bbox, width, height).and_then(|rect| rect.to_crop_region(width, height))
        else {
            return Ok(asset.clone());
        };

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| Error::Crop("document is not available".into()))?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(crop_error)?
            .dyn_into()
            .map_err(|_| Error::Crop("not a canvas element".into()))?;
        canvas.set_width(region.width);
        canvas.set_height(region.height);

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(crop_error)?
            .ok_or_else(|| Error::Crop("2d context is not available".into()))?
            .dyn_into()
            .map_err(|_| Error::Crop("not a 2d context".into()))?;

        let (w, h) = (region.width as f64, region.height as f64);
        context
            .draw_image_with_html_image_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
                &image,
                region.x as f64,
                region.y as f64,
                w,
                h,
                0.0,
                0.0,
                w,
                h,
            )
            .map_err(crop_error)?;

        let data_url = canvas.to_data_url().map_err(crop_error)?;
        Ok(UploadAsset::from_data_url(data_url))
    }
}

impl Cropper for CanvasCropper {
    fn crop<'a>(&'a self, asset: &'a UploadAsset, bbox: BoundingBox) -> LocalBoxFuture<'a, Result<UploadAsset>> {
        self.crop_asset(asset, bbox).boxed_local()
    }
}

/// Data URL から画像を読み込む（onload / onerror を待つ）
async fn load_image(src: &str) -> Result<HtmlImageElement> {
    let image = HtmlImageElement::new().map_err(crop_error)?;
    let (tx, rx) = oneshot::channel::<bool>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let notify = |loaded: bool| {
        let tx = tx.clone();
        Closure::<dyn FnMut()>::new(move || {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(loaded);
            }
        })
    };
    let on_load = notify(true);
    let on_error = notify(false);

    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(src);

    let loaded = rx.await.unwrap_or(false);
    image.set_onload(None);
    image.set_onerror(None);

    if loaded {
        Ok(image)
    } else {
        Err(Error::Crop("image could not be decoded".into()))
    }
}

fn crop_error(value: JsValue) -> Error {
    Error::Crop(format!("{:?}", value))
}
