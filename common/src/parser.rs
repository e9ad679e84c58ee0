//! APIレスポンスパーサー
//!
//! structured output のテキストをそのまま JSON として読む。
//! 修復や推測はしない（不正なら Upstream エラー）。

use crate::error::{Error, Result, EMPTY_RESPONSE_MESSAGE};
use crate::types::IncidentRecord;

/// 抽出レスポンスをパース
///
/// # Returns
/// * `Ok(IncidentRecord)` - パース成功
/// * `Err(Error::Upstream)` - 空、またはスキーマに合わない JSON
pub fn parse_incident_response(response: &str) -> Result<IncidentRecord> {
    let text = response.trim();
    if text.is_empty() {
        return Err(Error::Upstream(EMPTY_RESPONSE_MESSAGE.to_string()));
    }

    serde_json::from_str(text)
        .map_err(|e| Error::Upstream(format!("Gemini returned malformed JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = r#"{
        "title": "t", "operation": "o", "department": "d", "location": "l",
        "company": "c", "date": "dt", "time": "tm", "classification": "cl",
        "fatal_risk": "fr", "severity": "s", "summary": "sm",
        "how_it_happened": "h", "actions": "a\nb"
    }"#;

    #[test]
    fn test_parse_valid_response() {
        let record = parse_incident_response(VALID).unwrap();
        assert_eq!(record.title, "t");
        assert_eq!(record.actions, "a\nb");
        assert!(record.box_2d.is_none());
    }

    #[test]
    fn test_parse_empty_response() {
        let err = parse_incident_response("  \n").unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert_eq!(err.to_string(), "No response from Gemini.");
    }

    #[test]
    fn test_parse_malformed_response() {
        let err = parse_incident_response("{\"title\": ").unwrap_err();
        assert!(matches!(err, Error::Upstream(_)));
        assert!(err.to_string().contains("malformed"));
    }

    #[test]
    fn test_fenced_json_is_not_repaired() {
        let fenced = format!("```json\n{}\n```", VALID);
        assert!(parse_incident_response(&fenced).is_err());
    }

    #[test]
    fn test_missing_required_field_is_rejected() {
        let partial = r#"{"title": "t"}"#;
        assert!(matches!(parse_incident_response(partial), Err(Error::Upstream(_))));
    }
}
