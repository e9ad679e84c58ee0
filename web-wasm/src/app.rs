//! メインアプリケーションコンポーネント
//!
//! 状態は共通ライブラリの Session（Uploading → Processing → Result | Error）をそのまま使う。

use flash_report_common::{process_upload_with, AppState, Error, PipelineOptions, PosterView, Session, UploadAsset};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::gemini::GeminiClient;
use crate::components::{
    error_view::ErrorView, export_buttons::ExportButtons, header::Header,
    poster_template::PosterTemplate, processing::Processing, upload_area::UploadArea,
};
use crate::crop::CanvasCropper;

#[component]
pub fn App() -> impl IntoView {
    let session = RwSignal::new(Session::new());
    // 表示トグル（新しいレコードごとに既定値へ戻す）
    let poster_view = RwSignal::new(PosterView::default());

    let on_file = move |asset: UploadAsset| {
        spawn_local(async move {
            let translator = GeminiClient::from_storage();
            let mut local = session.get_untracked();
            let original = asset.clone();

            let result = process_upload_with(
                &mut local,
                &translator,
                &CanvasCropper,
                asset,
                PipelineOptions::default(),
                |processing| {
                    poster_view.set(PosterView::default());
                    session.set(processing.clone());
                },
            )
            .await;

            match result {
                // 検証メッセージを出して Uploading のまま
                Err(Error::Validation(_)) => session.set(local),
                Err(e) => web_sys::console::error_1(&e.to_string().into()),
                // リセット後に届いた結果は捨てる
                Ok(()) => session.update(|current| {
                    if is_processing(current, &original) {
                        *current = local;
                    }
                }),
            }
        });
    };

    let on_reset = move || session.update(|s| s.reset());

    let state_name = move || session.with(|s| s.state().as_str());
    let validation_message = Signal::derive(move || session.with(|s| s.validation_message().map(str::to_string)));

    let content = move || match session.with(|s| s.state().clone()) {
        AppState::Uploading => view! {
            <UploadArea validation_message=validation_message on_file=on_file />
        }
        .into_any(),
        AppState::Processing { .. } => view! { <Processing /> }.into_any(),
        AppState::Result { record, asset } => view! {
            <div class="poster-wrapper">
                <PosterTemplate record=record asset=asset poster_view=poster_view />
            </div>
        }
        .into_any(),
        AppState::Error { message, needs_api_key } => view! {
            <ErrorView message=message needs_api_key=needs_api_key on_reset=on_reset />
        }
        .into_any(),
    };

    view! {
        <div class="app">
            <Header>
                <Show when=move || state_name() == "result">
                    <ExportButtons on_reset=on_reset />
                </Show>
            </Header>

            <main class="main">
                {content}

                <div class="app-footer no-print">
                    <p>"Powered by Google Gemini 2.5 Flash"</p>
                    <p>"Uses 'Noto Nastaliq Urdu' font for readability."</p>
                </div>
            </main>
        </div>
    }
}

/// まだ同じファイルの抽出待ちか
fn is_processing(session: &Session, asset: &UploadAsset) -> bool {
    matches!(session.state(), AppState::Processing { asset: current } if current == asset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_applies_only_to_same_upload() {
        let asset = UploadAsset::from_bytes("image/png", b"first");
        let mut session = Session::new();
        assert!(!is_processing(&session, &asset));

        session.begin(asset.clone()).unwrap();
        assert!(is_processing(&session, &asset));

        session.reset();
        session.begin(UploadAsset::from_bytes("image/png", b"second")).unwrap();
        assert!(!is_processing(&session, &asset));
    }
}
