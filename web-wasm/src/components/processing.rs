//! 処理中表示

use leptos::prelude::*;

#[component]
pub fn Processing() -> impl IntoView {
    view! {
        <div class="processing no-print">
            <div class="spinner"></div>
            <h2>"Analyzing Document..."</h2>
            <p class="text-muted">"Translating content to Urdu (Nastaliq)..."</p>
        </div>
    }
}
