use crate::error::{ReclassifyError, Result};
use serde_json::Value;

/// Isolates and parses the JSON object embedded in a raw model response.
///
/// Generation services routinely wrap their JSON in commentary, markdown
/// fences or Python-style triple quotes. We strip the wrappers and take the
/// span from the first `{` to the last `}` as the candidate object. Anything
/// short of a parseable object is a hard [`ReclassifyError::Extraction`]:
/// there is no partial-credit extraction.
///
/// Note that two separate objects in one response ("{...} and {...}") produce
/// a span that is not valid JSON, so they fail here rather than being silently
/// merged.
pub fn extract_json(raw: &str) -> Result<Value> {
    let cleaned = raw
        .trim()
        .trim_start_matches("'''")
        .trim_end_matches("'''")
        .trim_start_matches("\"\"\"")
        .trim_end_matches("\"\"\"")
        .trim();

    let start = cleaned.find('{').ok_or_else(|| {
        ReclassifyError::Extraction("response contains no '{'".to_string())
    })?;
    let end = cleaned.rfind('}').ok_or_else(|| {
        ReclassifyError::Extraction("response contains no '}'".to_string())
    })?;
    if end < start {
        return Err(ReclassifyError::Extraction(
            "'}' appears before the first '{'".to_string(),
        ));
    }

    serde_json::from_str(&cleaned[start..=end])
        .map_err(|e| ReclassifyError::Extraction(format!("candidate span is not valid JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extracts_bare_object() {
        let value = extract_json(r#"{"ATTIVO": {}}"#).unwrap();
        assert_eq!(value, json!({"ATTIVO": {}}));
    }

    #[test]
    fn test_extracts_object_surrounded_by_commentary() {
        let raw = "Here is the result: {\"PASSIVO\": {}}\nThanks";
        let value = extract_json(raw).unwrap();
        assert_eq!(value, json!({"PASSIVO": {}}));
    }

    #[test]
    fn test_strips_triple_quotes() {
        let raw = "'''\n{\"ATTIVO\": {\"B) Software\": []}}\n'''";
        let value = extract_json(raw).unwrap();
        assert_eq!(value, json!({"ATTIVO": {"B) Software": []}}));
    }

    #[test]
    fn test_nested_braces_use_outermost_span() {
        let raw = "x {\"a\": {\"b\": 1}} y";
        let value = extract_json(raw).unwrap();
        assert_eq!(value, json!({"a": {"b": 1}}));
    }

    #[test]
    fn test_no_braces_fails() {
        let err = extract_json("no json here").unwrap_err();
        assert!(matches!(err, ReclassifyError::Extraction(_)));
    }

    #[test]
    fn test_unbalanced_braces_fail() {
        let err = extract_json("{\"ATTIVO\": {").unwrap_err();
        assert!(matches!(err, ReclassifyError::Extraction(_)));
    }

    #[test]
    fn test_two_objects_fail_instead_of_merging() {
        let err = extract_json("{\"a\": 1} and {\"b\": 2}").unwrap_err();
        assert!(matches!(err, ReclassifyError::Extraction(_)));
    }

    #[test]
    fn test_reversed_braces_fail() {
        let err = extract_json("} backwards {").unwrap_err();
        assert!(matches!(err, ReclassifyError::Extraction(_)));
    }
}
