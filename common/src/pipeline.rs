//! 抽出 → 切り抜き の処理フロー
//!
//! Gemini 呼び出しと画像切り抜きはプラットフォームごとに実装が異なるため、
//! Translator / Cropper トレイトで差し替える（テストでは固定JSONを返すダブルを使う）。

use futures::future::LocalBoxFuture;
use tracing::{error, warn};

use crate::bbox::BoundingBox;
use crate::error::Result;
use crate::state::Session;
use crate::types::{IncidentRecord, UploadAsset};

/// 抽出・翻訳の呼び出し口（1回の呼び出し = 1往復）
pub trait Translator {
    fn translate<'a>(&'a self, asset: &'a UploadAsset) -> LocalBoxFuture<'a, Result<IncidentRecord>>;
}

/// 画像切り抜き
///
/// 実装はデコードで実寸を得てから `map_box_to_pixels` で矩形を求める。
/// 矩形が取れない場合は元の資産をそのまま返すこと。
pub trait Cropper {
    fn crop<'a>(
        &'a self,
        asset: &'a UploadAsset,
        bbox: BoundingBox,
    ) -> LocalBoxFuture<'a, Result<UploadAsset>>;
}

/// 処理オプション
#[derive(Debug, Clone, Copy)]
pub struct PipelineOptions {
    /// false のときは box_2d があっても切り抜かない
    pub crop: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self { crop: true }
    }
}

/// 切り抜きを試み、失敗したら元の資産を返す
pub async fn crop_or_original<C>(cropper: &C, asset: &UploadAsset, bbox: BoundingBox) -> UploadAsset
where
    C: Cropper + ?Sized,
{
    if !bbox.has_extent() {
        return asset.clone();
    }

    match cropper.crop(asset, bbox).await {
        Ok(cropped) => cropped,
        Err(e) => {
            warn!(error = %e, "Cropping failed, using original");
            asset.clone()
        }
    }
}

/// 抽出して、画像かつ box があれば切り抜く
///
/// PDF は box_2d の有無にかかわらず切り抜かない。
pub async fn extract_and_crop<T, C>(
    translator: &T,
    cropper: &C,
    asset: &UploadAsset,
    options: PipelineOptions,
) -> Result<(IncidentRecord, UploadAsset)>
where
    T: Translator + ?Sized,
    C: Cropper + ?Sized,
{
    let record = translator.translate(asset).await?;

    let displayed = match record.bounding_box() {
        Some(bbox) if options.crop && asset.is_image() => crop_or_original(cropper, asset, bbox).await,
        _ => asset.clone(),
    };

    Ok((record, displayed))
}

/// 1回分のアップロードを処理する
///
/// 形式不正は Err（状態は Uploading のまま）。抽出の失敗は Error 状態に遷移して Ok を返す。
pub async fn process_upload<T, C>(
    session: &mut Session,
    translator: &T,
    cropper: &C,
    asset: UploadAsset,
    options: PipelineOptions,
) -> Result<()>
where
    T: Translator + ?Sized,
    C: Cropper + ?Sized,
{
    process_upload_with(session, translator, cropper, asset, options, |_| {}).await
}

/// `process_upload` と同じ。Processing に入った直後に `on_processing` を1回呼ぶ
///
/// 抽出中の表示（スピナー、画面の切り替え）はここで行う。
pub async fn process_upload_with<T, C, F>(
    session: &mut Session,
    translator: &T,
    cropper: &C,
    asset: UploadAsset,
    options: PipelineOptions,
    on_processing: F,
) -> Result<()>
where
    T: Translator + ?Sized,
    C: Cropper + ?Sized,
    F: FnOnce(&Session),
{
    session.begin(asset.clone())?;
    on_processing(session);

    let outcome = extract_and_crop(translator, cropper, &asset, options).await;
    if let Err(e) = &outcome {
        error!(error = %e, "Extraction failed");
    }
    session.finish(outcome)
}
