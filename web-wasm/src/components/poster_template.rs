//! A4ポスターのテンプレート
//!
//! 印刷・画像出力の対象は `#poster-page` の要素だけ。
//! 文字揃え・行間のトグルは出力から除外する（no-print / data-html2canvas-ignore）。

use flash_report_common::poster::{
    action_points, info_rows, DetailsAlign, InfoRow, PosterView, RowSpacing, RowStyle, ACTIONS_HEADING,
    FOOTER_PAGE, FOOTER_TEXT, HEADER_TEXT, HOW_IT_HAPPENED_HEADING, INTERNAL_WARNING, PDF_PLACEHOLDER_NOTE,
    PDF_PLACEHOLDER_TITLE, SUMMARY_HEADING,
};
use flash_report_common::{IncidentRecord, UploadAsset};
use leptos::prelude::*;

use crate::export::POSTER_ELEMENT_ID;

#[component]
pub fn PosterTemplate(
    record: IncidentRecord,
    asset: UploadAsset,
    poster_view: RwSignal<PosterView>,
) -> impl IntoView {
    let rows = info_rows(&record)
        .into_iter()
        .map(|row| view! { <InfoRowView row=row poster_view=poster_view /> })
        .collect_view();

    let actions = action_points(&record.actions)
        .into_iter()
        .map(|point| {
            view! {
                <div class="action-point">
                    <span class="action-bullet">"•"</span>
                    <span>{point}</span>
                </div>
            }
        })
        .collect_view();

    let caption = (!record.image_caption.trim().is_empty()).then(|| {
        let caption = record.image_caption.clone();
        view! { <p class="image-caption urdu-text">{caption}</p> }
    });

    let media = if asset.is_pdf() {
        view! {
            <div class="pdf-placeholder">
                <span class="pdf-icon">"📄"</span>
                <span class="pdf-title">{PDF_PLACEHOLDER_TITLE}</span>
                <span class="pdf-note">{PDF_PLACEHOLDER_NOTE}</span>
            </div>
        }
        .into_any()
    } else {
        view! { <img class="incident-image" src=asset.data_url.clone() alt="Incident Scene" /> }.into_any()
    };

    view! {
        <div id=POSTER_ELEMENT_ID class="print-page">
            <ViewControls poster_view=poster_view />

            <div class="poster-header">
                <h1>{HEADER_TEXT}</h1>
            </div>
            <div class="hazard-stripe"></div>
            <div class="internal-warning urdu-text">{INTERNAL_WARNING}</div>

            <div class="title-bar">
                <h2 class="urdu-text">{record.title.clone()}</h2>
            </div>

            <div class="details-grid">
                <div class="media-column">
                    {media}
                    {caption}
                </div>
                <div class="info-column">{rows}</div>
            </div>

            <SectionHeader title=SUMMARY_HEADING />
            <div class="section-body urdu-text">{record.summary.clone()}</div>

            <SectionHeader title=HOW_IT_HAPPENED_HEADING />
            <div class="section-body urdu-text">{record.how_it_happened.clone()}</div>

            <SectionHeader title=ACTIONS_HEADING highlight=true />
            <div class="section-body actions-body urdu-text">{actions}</div>

            <div class="poster-footer">
                <span>{FOOTER_TEXT}</span>
                <span>{FOOTER_PAGE}</span>
            </div>
        </div>
    }
}

/// 値（左・伸縮）| ラベル（右・35%）
#[component]
fn InfoRowView(row: InfoRow, poster_view: RwSignal<PosterView>) -> impl IntoView {
    let value_class = match row.style {
        RowStyle::Plain => "info-value",
        RowStyle::Highlight => "info-value highlight",
        RowStyle::Alert => "info-value alert",
    };
    let cell_class = move |base: &'static str| {
        let view = poster_view.get();
        let align = match view.align {
            DetailsAlign::Left => "align-left",
            DetailsAlign::Right => "align-right",
        };
        format!("{} {} {} urdu-text", base, align, view.spacing.padding_class())
    };

    view! {
        <div class="info-row">
            <div class=move || cell_class(value_class)>
                <span>{row.value}</span>
            </div>
            <div class=move || cell_class("info-label")>
                <span>{row.label}</span>
            </div>
        </div>
    }
}

#[component]
fn SectionHeader(title: &'static str, #[prop(optional)] highlight: bool) -> impl IntoView {
    let class = if highlight { "section-header highlight urdu-text" } else { "section-header urdu-text" };
    view! { <div class=class>{title}</div> }
}

/// 文字揃え（L/R）と行間（S/M/L）のトグル
#[component]
fn ViewControls(poster_view: RwSignal<PosterView>) -> impl IntoView {
    let align_button = move |align: DetailsAlign, label: &'static str| {
        view! {
            <button
                class=move || if poster_view.get().align == align { "toggle active" } else { "toggle" }
                on:click=move |_| poster_view.update(|v| v.align = align)
            >
                {label}
            </button>
        }
    };
    let spacing_button = move |spacing: RowSpacing, label: &'static str| {
        view! {
            <button
                class=move || if poster_view.get().spacing == spacing { "toggle active" } else { "toggle" }
                on:click=move |_| poster_view.update(|v| v.spacing = spacing)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="view-controls no-print" data-html2canvas-ignore="true">
            <div class="toggle-group">
                <span class="toggle-label">"Align"</span>
                {align_button(DetailsAlign::Left, "L")}
                {align_button(DetailsAlign::Right, "R")}
            </div>
            <div class="toggle-group">
                <span class="toggle-label">"Height"</span>
                {spacing_button(RowSpacing::Tight, "S")}
                {spacing_button(RowSpacing::Normal, "M")}
                {spacing_button(RowSpacing::Loose, "L")}
            </div>
        </div>
    }
}
