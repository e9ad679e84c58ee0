//! プロンプト・応答スキーマ生成モジュール
//!
//! CLIとWeb(WASM)で共有:
//! - EXTRACTION_PROMPT: 抽出・ウルドゥー語翻訳・写真領域検出の指示
//! - response_schema: Gemini の structured output 用スキーマ
//! - REQUIRED_FIELDS: スキーマ上の必須フィールド

use serde_json::{json, Value};

/// 既定モデル
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// スキーマで必須とするフィールド（image_caption / box_2d は任意）
pub const REQUIRED_FIELDS: &[&str] = &[
    "title",
    "operation",
    "department",
    "location",
    "company",
    "date",
    "time",
    "classification",
    "fatal_risk",
    "severity",
    "summary",
    "how_it_happened",
    "actions",
];

/// 抽出指示（固定文）
pub const EXTRACTION_PROMPT: &str = r#"You are a linguist who specialises in Urdu.

Task:
1. Read the attached safety incident poster or report.
2. Extract the incident details.
3. Translate every field into simple, natural Urdu (Nastaliq style).

Translation rules:
- Title: translate the whole incident title into Urdu, including the incident type (MTI, LTI, ...) where possible. Never return the English title.
- Fix obvious typos or ambiguous wording in the source before translating, so the meaning is right.
- Use plain words that a mine worker understands. Prefer everyday Urdu over heavy Arabic or Persian vocabulary.
- Keep the tone professional, serious and focused on safety.
- Actions: translate each action as a short point and put every point on its own line.

Photo detection:
- Find the main photograph of the incident (for example the tipped truck) so it can be cropped out.
- Return its bounding box as box_2d = [ymin, xmin, ymax, xmax] on a 0-1000 scale.
- Cover only the photograph itself, never the surrounding text, table borders or the whole page.

Return ONLY JSON that matches the schema."#;

/// 応答スキーマ（Gemini responseSchema 形式）
pub fn response_schema() -> Value {
    let text = |description: &str| json!({ "type": "STRING", "description": description });

    json!({
        "type": "OBJECT",
        "properties": {
            "title": text("Full incident title in simple Urdu. No English words."),
            "operation": text("Operation name in Urdu"),
            "department": text("Department name in Urdu"),
            "location": text("Where the incident happened, in Urdu"),
            "company": text("Company name in Urdu"),
            "date": text("Date in Urdu format"),
            "time": text("Time in Urdu"),
            "classification": text("Incident classification in Urdu"),
            "fatal_risk": text("Fatal risk category in Urdu"),
            "severity": text("Severity level in Urdu"),
            "summary": text("Incident summary in very simple Urdu"),
            "how_it_happened": text("How it happened, in simple Urdu"),
            "actions": text("Actions and recommendations in simple Urdu, one point per line"),
            "image_caption": text("Short Urdu caption for the incident photo"),
            "box_2d": {
                "type": "ARRAY",
                "items": { "type": "NUMBER" },
                "description": "Bounding box [ymin, xmin, ymax, xmax] on a 0-1000 scale covering only the incident photograph, not the text, table borders or page."
            }
        },
        "required": REQUIRED_FIELDS,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_every_record_field() {
        let schema = response_schema();
        let properties = schema["properties"].as_object().unwrap();
        for field in REQUIRED_FIELDS {
            assert_eq!(properties[*field]["type"], "STRING", "{}", field);
        }
        assert!(properties.contains_key("image_caption"));
        assert_eq!(properties["box_2d"]["type"], "ARRAY");
        assert_eq!(properties["box_2d"]["items"]["type"], "NUMBER");
    }

    #[test]
    fn test_box_is_optional() {
        let schema = response_schema();
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert_eq!(required.len(), REQUIRED_FIELDS.len());
        assert!(!required.contains(&"box_2d"));
        assert!(!required.contains(&"image_caption"));
    }

    #[test]
    fn test_prompt_mentions_urdu_and_box() {
        assert!(EXTRACTION_PROMPT.contains("Urdu"));
        assert!(EXTRACTION_PROMPT.contains("0-1000"));
        assert!(EXTRACTION_PROMPT.contains("Return ONLY JSON"));
    }
}
