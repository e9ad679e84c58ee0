//! ポスターのレイアウトモデル
//!
//! ネイティブ（SVG描画）とWeb（Leptosテンプレート）で共有する:
//! - 固定文言（ヘッダー、社内限定の注意書き、セクション見出し、フッター）
//! - 情報欄の行（ウルドゥー語ラベル + 値 + 強調スタイル）
//! - 表示トグル（文字揃え / 行間）
//! - 画像出力の定数とファイル名

use crate::types::IncidentRecord;

pub const HEADER_TEXT: &str = "BARRICK";
pub const INTERNAL_WARNING: &str =
    "***** یہ دستاویزات اندرونی ہیں اور کمپنی سے باہر شیئر نہیں کی جانی چاہئیں۔ *****";
pub const SUMMARY_HEADING: &str = "خلاصہ";
pub const HOW_IT_HAPPENED_HEADING: &str = "یہ کیسے ہوا؟ (ابتدائی تحقیقات)";
pub const ACTIONS_HEADING: &str = "اقدامات";
pub const FOOTER_TEXT: &str = "Barrick Mining Corporation - For Internal Use Only Do Not Share Externally";
pub const FOOTER_PAGE: &str = "1 OF 1";
pub const PDF_PLACEHOLDER_TITLE: &str = "PDF Document Uploaded";
pub const PDF_PLACEHOLDER_NOTE: &str = "Image preview unavailable for PDF uploads.";
pub const EXPORT_FAILURE_HINT: &str = "Could not generate image. Please try the Print option.";

/// ポスターの配色
pub mod palette {
    pub const BARRICK_HEADER: &str = "#1F3A4D";
    pub const BARRICK_BLUE: &str = "#005587";
    pub const BARRICK_YELLOW: &str = "#FFC72C";
    pub const BARRICK_RED: &str = "#D71920";
    pub const SECTION_GREY: &str = "#6D6E71";
    pub const LABEL_BG: &str = "#EAF4F8";
    pub const HIGHLIGHT_BG: &str = "#79C09B";
    pub const ACTIONS_BG: &str = "#F0F7FA";
    pub const BORDER: &str = "#D1D5DB";
    pub const TEXT: &str = "#111827";
}

/// 画像出力の倍率
pub const EXPORT_SCALE: f32 = 4.0;
/// 画像出力のJPEG品質 (0-100)
pub const JPEG_QUALITY: u8 = 90;
/// A4（mm）
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// 画像出力のファイル名（ISO日付 "YYYY-MM-DD" を受け取る）
pub fn image_file_name(iso_date: &str) -> String {
    format!("Barrick-Safety-Incident-Urdu-{}.jpg", iso_date)
}

/// 情報欄の文字揃え
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DetailsAlign {
    Left,
    #[default]
    Right,
}

impl DetailsAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailsAlign::Left => "left",
            DetailsAlign::Right => "right",
        }
    }
}

impl std::str::FromStr for DetailsAlign {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Ok(DetailsAlign::Left),
            "right" | "r" => Ok(DetailsAlign::Right),
            _ => Err(format!("Unknown alignment: {}. Use left or right", s)),
        }
    }
}

/// 情報欄の行間
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowSpacing {
    Tight,
    #[default]
    Normal,
    Loose,
}

impl RowSpacing {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowSpacing::Tight => "tight",
            RowSpacing::Normal => "normal",
            RowSpacing::Loose => "loose",
        }
    }

    /// 上下パディング（px）
    pub fn padding_px(&self) -> f32 {
        match self {
            RowSpacing::Tight => 4.0,
            RowSpacing::Normal => 12.0,
            RowSpacing::Loose => 20.0,
        }
    }

    /// Web版のパディングクラス
    pub fn padding_class(&self) -> &'static str {
        match self {
            RowSpacing::Tight => "py-1",
            RowSpacing::Normal => "py-3",
            RowSpacing::Loose => "py-5",
        }
    }
}

impl std::str::FromStr for RowSpacing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tight" | "s" => Ok(RowSpacing::Tight),
            "normal" | "m" => Ok(RowSpacing::Normal),
            "loose" | "l" => Ok(RowSpacing::Loose),
            _ => Err(format!("Unknown spacing: {}. Use tight, normal, or loose", s)),
        }
    }
}

/// 表示トグル（新しいレコードごとに既定値へ戻す。保存しない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PosterView {
    pub align: DetailsAlign,
    pub spacing: RowSpacing,
}

/// 情報欄の強調スタイル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStyle {
    Plain,
    /// 緑背景・白太字（区分）
    Highlight,
    /// 赤太字（重大度）
    Alert,
}

/// 情報欄の1行
#[derive(Debug, Clone, PartialEq)]
pub struct InfoRow {
    pub label: &'static str,
    pub value: String,
    pub style: RowStyle,
}

/// 情報欄の行を表示順に構築
pub fn info_rows(record: &IncidentRecord) -> Vec<InfoRow> {
    let row = |label: &'static str, value: &str, style: RowStyle| InfoRow {
        label,
        value: value.to_string(),
        style,
    };

    vec![
        row("آپریشن", &record.operation, RowStyle::Plain),
        row("شعبہ", &record.department, RowStyle::Plain),
        row("مقام", &record.location, RowStyle::Plain),
        row("کمپنی", &record.company, RowStyle::Plain),
        row("تاریخ", &record.date, RowStyle::Plain),
        row("وقت", &record.time, RowStyle::Plain),
        row("درجہ بندی", &record.classification, RowStyle::Highlight),
        row("مہلک خطرہ", &record.fatal_risk, RowStyle::Plain),
        row("شدت", &record.severity, RowStyle::Alert),
    ]
}

/// 対策テキストを箇条書きの項目に分割
///
/// 空行は除き、AIが付けた先頭の記号（- • * 数字 .）は取り除く。
pub fn action_points(actions: &str) -> Vec<String> {
    actions
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.trim_start_matches(|c: char| matches!(c, '-' | '•' | '*' | '.') || c.is_ascii_digit())
                .trim()
                .to_string()
        })
        .collect()
}
