//! ヘッダーコンポーネント（印刷時は非表示）

use leptos::prelude::*;

#[component]
pub fn Header(children: Children) -> impl IntoView {
    view! {
        <nav class="navbar no-print">
            <div class="navbar-inner">
                <div class="brand">
                    <div class="brand-mark"></div>
                    <h1>"Barrick Flash Report Translator" <span class="brand-tag">"URDU"</span></h1>
                </div>
                <div class="navbar-actions">{children()}</div>
            </div>
        </nav>
    }
}
