//! エクスポートボタンコンポーネント

use flash_report_common::poster::EXPORT_FAILURE_HINT;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::export;

#[component]
pub fn ExportButtons<FR>(on_reset: FR) -> impl IntoView
where
    FR: Fn() + Clone + Send + Sync + 'static,
{
    let (is_exporting, set_is_exporting) = signal(false);

    let on_download = move |_| {
        set_is_exporting.set(true);
        spawn_local(async move {
            if let Err(e) = export::download_poster_jpeg().await {
                web_sys::console::error_1(&format!("Failed to generate image: {}", e).into());
                gloo::dialogs::alert(EXPORT_FAILURE_HINT);
            }
            set_is_exporting.set(false);
        });
    };

    let on_print = move |_| {
        if let Err(e) = export::print_poster() {
            web_sys::console::error_1(&format!("Print failed: {}", e).into());
        }
    };

    view! {
        <div class="export-buttons">
            <button class="btn btn-muted" on:click=move |_| on_reset()>
                "Upload New"
            </button>

            <button
                class="btn btn-primary"
                disabled=move || is_exporting.get()
                on:click=on_download
            >
                {move || if is_exporting.get() { "Generating..." } else { "Download JPG" }}
            </button>

            <button class="btn btn-success" on:click=on_print>
                "Save PDF"
            </button>
        </div>
    }
}
