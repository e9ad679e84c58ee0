//! ポスターのSVG組版
//!
//! A4（96dpi で 794 × 1123 px）を基準に上から順に積み上げる。
//! 内容が1ページを超える場合はページを縦に伸ばし、フッターは常に最下部。
//!
//! 文字幅はフォントに依存するため、折り返しは概算幅で行う。

use flash_report_common::poster::{
    action_points, info_rows, palette, DetailsAlign, InfoRow, PosterView, RowStyle,
    ACTIONS_HEADING, FOOTER_PAGE, FOOTER_TEXT, HEADER_TEXT, HOW_IT_HAPPENED_HEADING,
    INTERNAL_WARNING, PDF_PLACEHOLDER_NOTE, PDF_PLACEHOLDER_TITLE, SUMMARY_HEADING,
};
use flash_report_common::{IncidentRecord, UploadAsset};
use std::fmt::Write as _;
use std::io::Cursor;

pub const PAGE_WIDTH_PX: f32 = 794.0;
pub const PAGE_HEIGHT_PX: f32 = 1123.0;

const HEADER_HEIGHT: f32 = 96.0;
const HEADER_RULE: f32 = 6.0;
const STRIPE_HEIGHT: f32 = 20.0;
const WARNING_HEIGHT: f32 = 40.0;
const TITLE_SIZE: f32 = 30.0;
const TITLE_LINE: f32 = 48.0;
const BODY_SIZE: f32 = 18.0;
/// 本文の行送り（2.8rem）
const BODY_LINE: f32 = 44.8;
const ROW_LINE: f32 = 36.0;
const SECTION_PADDING: f32 = 20.0;
const SECTION_HEADER_HEIGHT: f32 = 56.0;
const FOOTER_HEIGHT: f32 = 44.0;
const MEDIA_MAX_HEIGHT: f32 = 450.0;
const PLACEHOLDER_HEIGHT: f32 = 350.0;
const CAPTION_SIZE: f32 = 16.0;
const CAPTION_LINE: f32 = 28.0;
/// 情報欄のラベル列の幅（割合）
const LABEL_RATIO: f32 = 0.35;

/// 組版済みのSVG
#[derive(Debug, Clone)]
pub struct PosterSvg {
    pub markup: String,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, PartialEq)]
enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(&self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

struct TextStyle<'a> {
    size: f32,
    fill: &'a str,
    bold: bool,
    anchor: Anchor,
}

/// 要素を書き込みながら現在のY位置を進める
struct Canvas {
    body: String,
    y: f32,
}

impl Canvas {
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32, fill: &str) {
        let _ = writeln!(
            self.body,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
            x, y, width, height, fill
        );
    }

    fn hline(&mut self, y: f32, x1: f32, x2: f32, stroke: &str, width: f32) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{:.1}"/>"#,
            x1, y, x2, y, stroke, width
        );
    }

    fn vline(&mut self, x: f32, y1: f32, y2: f32, stroke: &str) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="1"/>"#,
            x, y1, x, y2, stroke
        );
    }

    fn text(&mut self, x: f32, baseline: f32, style: &TextStyle, content: &str) {
        let weight = if style.bold { "bold" } else { "normal" };
        let _ = writeln!(
            self.body,
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
            x,
            baseline,
            style.size,
            weight,
            style.fill,
            style.anchor.as_str(),
            escape_xml(content)
        );
    }

    /// 折り返し済みの行を line_height 間隔で描く
    fn lines(&mut self, x: f32, top: f32, line_height: f32, style: &TextStyle, lines: &[String]) {
        for (i, line) in lines.iter().enumerate() {
            let baseline = top + line_height * i as f32 + baseline_offset(line_height, style.size);
            self.text(x, baseline, style, line);
        }
    }
}

/// ポスター全体をSVGに組版する
pub fn build_poster_svg(
    record: &IncidentRecord,
    asset: &UploadAsset,
    view: PosterView,
    font_family: &str,
) -> PosterSvg {
    let mut canvas = Canvas {
        body: String::new(),
        y: 0.0,
    };

    draw_header(&mut canvas);
    draw_title(&mut canvas, &record.title);
    draw_details(&mut canvas, record, asset, view);

    draw_section(
        &mut canvas,
        SUMMARY_HEADING,
        palette::SECTION_GREY,
        "#FFFFFF",
        &[record.summary.clone()],
        false,
    );
    draw_section(
        &mut canvas,
        HOW_IT_HAPPENED_HEADING,
        palette::SECTION_GREY,
        "#FFFFFF",
        &[record.how_it_happened.clone()],
        false,
    );
    draw_section(
        &mut canvas,
        ACTIONS_HEADING,
        palette::BARRICK_HEADER,
        palette::ACTIONS_BG,
        &action_points(&record.actions),
        true,
    );

    let footer_y = canvas.y.max(PAGE_HEIGHT_PX - FOOTER_HEIGHT);
    draw_footer(&mut canvas, footer_y);
    let height = footer_y + FOOTER_HEIGHT;

    let markup = format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}">
<defs>
<pattern id="hazard" patternUnits="userSpaceOnUse" width="20" height="20" patternTransform="rotate(45)">
<rect width="10" height="20" fill="#000000"/>
<rect x="10" width="10" height="20" fill="{yellow}"/>
</pattern>
</defs>
<rect width="{w:.0}" height="{h:.0}" fill="#FFFFFF"/>
<g font-family="{family}">
{body}</g>
</svg>
"##,
        w = PAGE_WIDTH_PX,
        h = height,
        yellow = palette::BARRICK_YELLOW,
        family = escape_xml(font_family),
        body = canvas.body,
    );

    PosterSvg {
        markup,
        width: PAGE_WIDTH_PX,
        height,
    }
}

/// ロゴ・黄色ライン・警告ストライプ・社内限定の注意書き
fn draw_header(canvas: &mut Canvas) {
    let _ = writeln!(
        canvas.body,
        r#"<text x="20" y="68" font-size="48" font-weight="bold" letter-spacing="9.6" fill="{}">{}</text>"#,
        palette::TEXT,
        HEADER_TEXT
    );
    canvas.rect(0.0, HEADER_HEIGHT, PAGE_WIDTH_PX, HEADER_RULE, palette::BARRICK_YELLOW);
    canvas.y = HEADER_HEIGHT + HEADER_RULE;

    let _ = writeln!(
        canvas.body,
        r#"<rect x="0" y="{:.1}" width="{:.1}" height="{:.1}" fill="url(#hazard)"/>"#,
        canvas.y, PAGE_WIDTH_PX, STRIPE_HEIGHT
    );
    canvas.y += STRIPE_HEIGHT;
    canvas.hline(canvas.y + 1.0, 0.0, PAGE_WIDTH_PX, "#000000", 2.0);
    canvas.y += 2.0;

    let style = TextStyle {
        size: 18.0,
        fill: palette::BARRICK_RED,
        bold: true,
        anchor: Anchor::Middle,
    };
    canvas.lines(PAGE_WIDTH_PX / 2.0, canvas.y, WARNING_HEIGHT, &style, &[INTERNAL_WARNING.to_string()]);
    canvas.y += WARNING_HEIGHT;
    canvas.hline(canvas.y, 0.0, PAGE_WIDTH_PX, palette::BORDER, 1.0);
    canvas.y += 1.0;
}

fn draw_title(canvas: &mut Canvas, title: &str) {
    let lines = wrap_text(title, PAGE_WIDTH_PX - 48.0, TITLE_SIZE);
    let height = 32.0 + TITLE_LINE * lines.len().max(1) as f32;

    canvas.rect(0.0, canvas.y, PAGE_WIDTH_PX, height, palette::BARRICK_HEADER);
    let style = TextStyle {
        size: TITLE_SIZE,
        fill: "#FFFFFF",
        bold: true,
        anchor: Anchor::End,
    };
    canvas.lines(PAGE_WIDTH_PX - 24.0, canvas.y + 16.0, TITLE_LINE, &style, &lines);
    canvas.y += height;
}

/// 左に写真（またはPDFの代替表示）、右に情報欄
fn draw_details(canvas: &mut Canvas, record: &IncidentRecord, asset: &UploadAsset, view: PosterView) {
    let top = canvas.y;
    let column = PAGE_WIDTH_PX / 2.0;

    let left_height = draw_media(canvas, top, column, record, asset);
    let right_height = draw_info_rows(canvas, top, column, &info_rows(record), view);
    let height = left_height.max(right_height);

    canvas.vline(column, top, top + height, "#9CA3AF");
    canvas.y = top + height;
    canvas.hline(canvas.y, 0.0, PAGE_WIDTH_PX, "#9CA3AF", 1.0);
    canvas.y += 1.0;
}

fn draw_media(canvas: &mut Canvas, top: f32, width: f32, record: &IncidentRecord, asset: &UploadAsset) -> f32 {
    let padding = 8.0;
    let inner = width - padding * 2.0;
    let mut y = top + padding;

    if asset.is_pdf() {
        canvas.rect(padding, y, inner, PLACEHOLDER_HEIGHT, "#FFFFFF");
        let _ = writeln!(
            canvas.body,
            r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="none" stroke="{}"/>"#,
            padding, y, inner, PLACEHOLDER_HEIGHT, palette::BORDER
        );
        let center = width / 2.0;
        let title = TextStyle {
            size: 18.0,
            fill: "#9CA3AF",
            bold: true,
            anchor: Anchor::Middle,
        };
        let note = TextStyle {
            size: 16.0,
            fill: "#9CA3AF",
            bold: false,
            anchor: Anchor::Middle,
        };
        canvas.text(center, y + PLACEHOLDER_HEIGHT / 2.0, &title, PDF_PLACEHOLDER_TITLE);
        let note_lines = wrap_text(PDF_PLACEHOLDER_NOTE, inner - 32.0, 16.0);
        canvas.lines(center, y + PLACEHOLDER_HEIGHT / 2.0 + 8.0, 24.0, &note, &note_lines);
        y += PLACEHOLDER_HEIGHT;
    } else {
        let media_height = match image_dimensions(asset) {
            Some((w, h)) if w > 0 => (inner * h as f32 / w as f32).min(MEDIA_MAX_HEIGHT),
            _ => PLACEHOLDER_HEIGHT,
        };
        let _ = writeln!(
            canvas.body,
            r#"<image x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" preserveAspectRatio="xMidYMid meet" xlink:href="{}"/>"#,
            padding,
            y,
            inner,
            media_height,
            escape_xml(&asset.data_url)
        );
        y += media_height;
    }

    if !record.image_caption.trim().is_empty() {
        let style = TextStyle {
            size: CAPTION_SIZE,
            fill: "#374151",
            bold: false,
            anchor: Anchor::Middle,
        };
        let lines = wrap_text(&record.image_caption, inner - 16.0, CAPTION_SIZE);
        y += 8.0;
        canvas.lines(width / 2.0, y, CAPTION_LINE, &style, &lines);
        y += CAPTION_LINE * lines.len() as f32;
    }

    y + padding - top
}

fn draw_info_rows(canvas: &mut Canvas, top: f32, left: f32, rows: &[InfoRow], view: PosterView) -> f32 {
    let width = PAGE_WIDTH_PX - left;
    let label_width = width * LABEL_RATIO;
    let value_width = width - label_width;
    let label_x = left + value_width;
    let padding = view.spacing.padding_px();
    let mut y = top;

    for row in rows {
        let value_lines = wrap_text(&row.value, value_width - 24.0, BODY_SIZE);
        let label_lines = wrap_text(row.label, label_width - 24.0, BODY_SIZE);
        let line_count = value_lines.len().max(label_lines.len()).max(1);
        let height = ROW_LINE * line_count as f32 + padding * 2.0;

        let value_bg = if row.style == RowStyle::Highlight {
            palette::HIGHLIGHT_BG
        } else {
            "#FFFFFF"
        };
        canvas.rect(left, y, value_width, height, value_bg);
        canvas.rect(label_x, y, label_width, height, palette::LABEL_BG);
        canvas.vline(label_x, y, y + height, "#E5E7EB");

        let (value_fill, value_bold) = match row.style {
            RowStyle::Plain => (palette::TEXT, false),
            RowStyle::Highlight => ("#FFFFFF", true),
            RowStyle::Alert => (palette::BARRICK_RED, true),
        };
        let anchor = match view.align {
            DetailsAlign::Left => Anchor::Start,
            DetailsAlign::Right => Anchor::End,
        };
        let cell_x = |cell_left: f32, cell_width: f32| match view.align {
            DetailsAlign::Left => cell_left + 12.0,
            DetailsAlign::Right => cell_left + cell_width - 12.0,
        };

        let value_style = TextStyle {
            size: BODY_SIZE,
            fill: value_fill,
            bold: value_bold,
            anchor,
        };
        let label_style = TextStyle {
            size: BODY_SIZE,
            fill: palette::BARRICK_BLUE,
            bold: true,
            anchor,
        };
        let value_top = y + (height - ROW_LINE * value_lines.len() as f32) / 2.0;
        let label_top = y + (height - ROW_LINE * label_lines.len() as f32) / 2.0;
        canvas.lines(cell_x(left, value_width), value_top, ROW_LINE, &value_style, &value_lines);
        canvas.lines(cell_x(label_x, label_width), label_top, ROW_LINE, &label_style, &label_lines);

        y += height;
        canvas.hline(y, left, PAGE_WIDTH_PX, palette::BORDER, 1.0);
    }

    y - top
}

/// 見出し帯 + 本文。bullets が true なら段落ごとに「•」を付ける
fn draw_section(
    canvas: &mut Canvas,
    heading: &str,
    heading_bg: &str,
    body_bg: &str,
    paragraphs: &[String],
    bullets: bool,
) {
    canvas.rect(0.0, canvas.y, PAGE_WIDTH_PX, SECTION_HEADER_HEIGHT, heading_bg);
    let heading_style = TextStyle {
        size: 24.0,
        fill: "#FFFFFF",
        bold: true,
        anchor: Anchor::End,
    };
    canvas.lines(
        PAGE_WIDTH_PX - SECTION_PADDING,
        canvas.y,
        SECTION_HEADER_HEIGHT,
        &heading_style,
        &[heading.to_string()],
    );
    canvas.y += SECTION_HEADER_HEIGHT;

    let right = PAGE_WIDTH_PX - SECTION_PADDING;
    let indent = if bullets { 24.0 } else { 0.0 };
    let wrapped: Vec<Vec<String>> = paragraphs
        .iter()
        .map(|p| wrap_text(p, PAGE_WIDTH_PX - SECTION_PADDING * 2.0 - indent, BODY_SIZE))
        .collect();
    let gap = if bullets { 12.0 } else { 0.0 };
    let content: f32 = wrapped
        .iter()
        .map(|lines| BODY_LINE * lines.len().max(1) as f32)
        .sum::<f32>()
        + gap * wrapped.len().saturating_sub(1) as f32;
    let height = SECTION_PADDING * 2.0 + content;

    canvas.rect(0.0, canvas.y, PAGE_WIDTH_PX, height, body_bg);

    let body_style = TextStyle {
        size: BODY_SIZE,
        fill: palette::TEXT,
        bold: false,
        anchor: Anchor::End,
    };
    let bullet_style = TextStyle {
        size: BODY_SIZE,
        fill: palette::BARRICK_BLUE,
        bold: true,
        anchor: Anchor::End,
    };

    let mut y = canvas.y + SECTION_PADDING;
    for lines in &wrapped {
        if bullets {
            canvas.lines(right, y, BODY_LINE, &bullet_style, &["•".to_string()]);
        }
        canvas.lines(right - indent, y, BODY_LINE, &body_style, lines);
        y += BODY_LINE * lines.len().max(1) as f32 + gap;
    }

    canvas.y += height;
    canvas.hline(canvas.y, 0.0, PAGE_WIDTH_PX, "#9CA3AF", 1.0);
    canvas.y += 1.0;
}

fn draw_footer(canvas: &mut Canvas, y: f32) {
    canvas.rect(0.0, y, PAGE_WIDTH_PX, FOOTER_HEIGHT, palette::BARRICK_HEADER);
    let left = TextStyle {
        size: 14.0,
        fill: "#FFFFFF",
        bold: true,
        anchor: Anchor::Start,
    };
    let right = TextStyle {
        anchor: Anchor::End,
        ..left
    };
    canvas.lines(24.0, y, FOOTER_HEIGHT, &left, &[FOOTER_TEXT.to_uppercase()]);
    canvas.lines(PAGE_WIDTH_PX - 24.0, y, FOOTER_HEIGHT, &right, &[FOOTER_PAGE.to_string()]);
}

/// 行の上端からベースラインまでの距離（行内で縦中央に置く）
fn baseline_offset(line_height: f32, size: f32) -> f32 {
    (line_height + size * 0.7) / 2.0
}

fn image_dimensions(asset: &UploadAsset) -> Option<(u32, u32)> {
    let bytes = asset.decode_bytes().ok()?;
    image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .ok()?
        .into_dimensions()
        .ok()
}

/// 文字幅の概算（フォントサイズ比）
fn char_width(c: char, size: f32) -> f32 {
    let ratio = match c {
        ' ' => 0.28,
        'A'..='Z' => 0.66,
        c if c.is_ascii() => 0.52,
        // アラビア文字（ナスタアリーク体は横幅が狭い）
        '\u{0600}'..='\u{06FF}' | '\u{0750}'..='\u{077F}' | '\u{FB50}'..='\u{FDFF}' | '\u{FE70}'..='\u{FEFF}' => 0.48,
        _ => 0.9,
    };
    ratio * size
}

pub(crate) fn text_width(text: &str, size: f32) -> f32 {
    text.chars().map(|c| char_width(c, size)).sum()
}

/// 単語単位で折り返す（1語が幅を超える場合はその語だけで1行）
pub(crate) fn wrap_text(text: &str, max_width: f32, size: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{} {}", current, word)
            };
            if !current.is_empty() && text_width(&candidate, size) > max_width {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            } else {
                current = candidate;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }

    lines
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use flash_report_common::RowSpacing;

    fn sample_record() -> IncidentRecord {
        IncidentRecord {
            title: "حفاظتی واقعہ: ٹرک الٹ گیا".into(),
            operation: "لولو".into(),
            department: "کان کنی".into(),
            location: "گڑھا".into(),
            company: "بیرک".into(),
            date: "۱۲ مارچ".into(),
            time: "صبح ۹ بجے".into(),
            classification: "ایم ٹی آئی".into(),
            fatal_risk: "گاڑی".into(),
            severity: "درمیانہ".into(),
            summary: "ٹرک الٹ گیا۔".into(),
            how_it_happened: "سڑک پھسلن والی تھی۔".into(),
            actions: "1. رفتار کم کریں\n- سڑک چیک کریں".into(),
            image_caption: String::new(),
            box_2d: None,
        }
    }

    fn pdf_asset() -> UploadAsset {
        UploadAsset::from_bytes("application/pdf", b"%PDF-1.7")
    }

    #[test]
    fn test_wrap_text_breaks_on_width() {
        let lines = wrap_text("aaaa bbbb cccc", text_width("aaaa bbbb", 10.0), 10.0);
        assert_eq!(lines, vec!["aaaa bbbb", "cccc"]);
    }

    #[test]
    fn test_wrap_text_keeps_long_word() {
        let lines = wrap_text("supercalifragilistic", 10.0, 10.0);
        assert_eq!(lines, vec!["supercalifragilistic"]);
        assert!(wrap_text("   ", 100.0, 10.0).is_empty());
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    }

    #[test]
    fn test_svg_contains_fixed_text_and_fields() {
        let svg = build_poster_svg(&sample_record(), &pdf_asset(), PosterView::default(), "sans-serif");

        assert!(svg.markup.contains(HEADER_TEXT));
        assert!(svg.markup.contains(INTERNAL_WARNING));
        assert!(svg.markup.contains(SUMMARY_HEADING));
        assert!(svg.markup.contains("ایم ٹی آئی"));
        assert!(svg.markup.contains(FOOTER_PAGE));
        assert_eq!(svg.width, PAGE_WIDTH_PX);
        assert!(svg.height >= PAGE_HEIGHT_PX);
    }

    #[test]
    fn test_pdf_asset_shows_placeholder() {
        let svg = build_poster_svg(&sample_record(), &pdf_asset(), PosterView::default(), "sans-serif");
        assert!(svg.markup.contains(PDF_PLACEHOLDER_TITLE));
        assert!(!svg.markup.contains("<image"));
    }

    #[test]
    fn test_image_asset_is_embedded() {
        let asset = UploadAsset::from_bytes("image/png", b"not decodable");
        let svg = build_poster_svg(&sample_record(), &asset, PosterView::default(), "sans-serif");
        assert!(svg.markup.contains("<image"));
        assert!(svg.markup.contains("data:image/png;base64,"));
        assert!(!svg.markup.contains(PDF_PLACEHOLDER_TITLE));
    }

    #[test]
    fn test_caption_only_when_present() {
        let mut record = sample_record();
        let without = build_poster_svg(&record, &pdf_asset(), PosterView::default(), "sans-serif");

        record.image_caption = "الٹا ہوا ٹرک".into();
        let with = build_poster_svg(&record, &pdf_asset(), PosterView::default(), "sans-serif");

        assert!(!without.markup.contains("الٹا ہوا ٹرک"));
        assert!(with.markup.contains("الٹا ہوا ٹرک"));
    }

    #[test]
    fn test_action_bullets_are_stripped() {
        let svg = build_poster_svg(&sample_record(), &pdf_asset(), PosterView::default(), "sans-serif");
        assert!(svg.markup.contains(">رفتار کم کریں<"));
        assert!(!svg.markup.contains("1. رفتار"));
        assert_eq!(svg.markup.matches(">•<").count(), 2);
    }

    #[test]
    fn test_alignment_switches_anchor() {
        let record = sample_record();
        let right = build_poster_svg(&record, &pdf_asset(), PosterView::default(), "sans-serif");
        let left = build_poster_svg(
            &record,
            &pdf_asset(),
            PosterView {
                align: DetailsAlign::Left,
                ..Default::default()
            },
            "sans-serif",
        );

        let anchor_of = |svg: &PosterSvg| {
            let line = svg.markup.lines().find(|l| l.contains(">لولو<")).unwrap().to_string();
            line.contains(r#"text-anchor="start""#)
        };
        assert!(!anchor_of(&right));
        assert!(anchor_of(&left));
    }

    #[test]
    fn test_spacing_changes_height() {
        let mut record = sample_record();
        // 本文を長くしてページ高さが内容で決まるようにする
        record.summary = "طویل متن ".repeat(600);
        let render = |spacing| {
            let view = PosterView {
                spacing,
                ..Default::default()
            };
            build_poster_svg(&record, &pdf_asset(), view, "sans-serif").height
        };

        let tight = render(RowSpacing::Tight);
        let normal = render(RowSpacing::Normal);
        let loose = render(RowSpacing::Loose);
        assert!(tight < normal);
        assert!(normal < loose);
    }

    #[test]
    fn test_long_content_extends_page() {
        let mut record = sample_record();
        record.summary = "طویل متن ".repeat(600);
        let svg = build_poster_svg(&record, &pdf_asset(), PosterView::default(), "sans-serif");
        assert!(svg.height > PAGE_HEIGHT_PX);
    }
}
