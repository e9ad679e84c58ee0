//! エラー表示（APIキー未設定時はキー入力を案内）

use leptos::prelude::*;

use crate::secure_store;

#[component]
pub fn ErrorView<FR>(message: String, needs_api_key: bool, on_reset: FR) -> impl IntoView
where
    FR: Fn() + Clone + Send + Sync + 'static,
{
    let (api_key, set_api_key) = signal(String::new());
    let (save_error, set_save_error) = signal(None::<String>);

    // 保存後はページを再読み込みして最初からやり直す
    let on_save_key = move |_| {
        let key = api_key.get();
        let result = if key.trim().is_empty() {
            secure_store::clear_api_key();
            Ok(())
        } else {
            secure_store::save_api_key(&key)
        };

        match result {
            Ok(()) => {
                if let Some(window) = web_sys::window() {
                    let _ = window.location().reload();
                }
            }
            Err(e) => set_save_error.set(Some(e)),
        }
    };

    let key_form = needs_api_key.then(|| {
        view! {
            <div class="api-key-form">
                <input
                    type="password"
                    placeholder="Gemini API Key"
                    prop:value=move || api_key.get()
                    on:input=move |ev| set_api_key.set(event_target_value(&ev))
                />
                <button class="btn btn-primary" on:click=on_save_key>
                    "Select API Key"
                </button>
                {move || save_error.get().map(|e| view! { <p class="validation-message">{e}</p> })}
            </div>
        }
    });

    view! {
        <div class="error-card no-print">
            <div class="error-icon">"⚠️"</div>
            <h3>"Translation Failed"</h3>
            <p class="text-muted">{message}</p>

            <div class="error-actions">
                <button class="btn btn-muted" on:click=move |_| on_reset()>
                    "Try Again"
                </button>
                {key_form}
            </div>
        </div>
    }
}
