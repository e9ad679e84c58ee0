//! アップロードエリアコンポーネント

use flash_report_common::UploadAsset;
use leptos::html::Input;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

#[component]
pub fn UploadArea<F>(
    #[prop(into)] validation_message: Signal<Option<String>>,
    on_file: F,
) -> impl IntoView
where
    F: Fn(UploadAsset) + Clone + Send + Sync + 'static,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<Input>::new();

    let on_change = {
        let on_file = on_file.clone();
        move |ev: web_sys::Event| {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                read_file(file, on_file.clone());
            }
            // 同じファイルを選び直しても change が発火するように
            input.set_value("");
        }
    };

    let on_drop = {
        let on_file = on_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(file) = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .and_then(|files| files.get(0))
            {
                read_file(file, on_file.clone());
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div
            class=move || if is_dragover.get() { "upload-area dragover no-print" } else { "upload-area no-print" }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
        >
            <div class="upload-icon">"📄"</div>
            <h2>"Upload Safety Incident Poster"</h2>
            <p class="text-muted">
                "Upload an image (JPG, PNG) or PDF of the safety report to translate it into Urdu."
            </p>

            <input
                node_ref=input_ref
                type="file"
                accept="image/*,.pdf"
                class="hidden"
                on:change=on_change
            />
            <button class="btn btn-primary" on:click=on_click>"Select File"</button>

            <p class="text-small text-muted">"Supported formats: JPG, PNG, PDF"</p>
            <p class="text-small text-warning">
                "Note: For image extraction, please upload an image file (JPG/PNG). PDFs may not display the incident scene."
            </p>

            {move || validation_message.get().map(|message| view! {
                <p class="validation-message">{message}</p>
            })}
        </div>
    }
}

/// ファイルを Data URL として読み込み、MIMEタイプはブラウザの申告値を使う
fn read_file<F>(file: File, on_file: F)
where
    F: Fn(UploadAsset) + 'static,
{
    let mime_type = file.type_();
    let Ok(reader) = FileReader::new() else {
        web_sys::console::error_1(&"FileReader is not available".into());
        return;
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Some(data_url) = reader_clone.result().ok().and_then(|r| r.as_string()) {
            on_file(asset_from_read(&mime_type, data_url));
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    if let Err(e) = reader.read_as_data_url(&file) {
        web_sys::console::error_2(&"Failed to read file".into(), &e);
    }
}

/// 読み込んだ Data URL から資産を作る（申告値が空なら Data URL 側の型）
fn asset_from_read(mime_type: &str, data_url: String) -> UploadAsset {
    if mime_type.is_empty() {
        UploadAsset::from_data_url(data_url)
    } else {
        UploadAsset::new(mime_type, data_url)
    }
}
