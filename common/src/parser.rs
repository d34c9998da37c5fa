//! Analysis response parser
//!
//! Extracts the JSON object from the model's text output and turns it
//! into a validated, rank-sorted `AnalysisResult`. The upstream output
//! is treated as untrusted input throughout.

use crate::error::{Error, Result};
use crate::types::AnalysisResult;

/// Extract the JSON object from a model response
///
/// Extraction order:
/// 1. a ```json ... ``` fenced block
/// 2. the outermost raw {...} object
/// 3. error
///
/// # Arguments
/// * `response` - raw response text
///
/// # Returns
/// * `Ok(&str)` - the extracted JSON slice
/// * `Err` - no JSON object found
pub fn extract_json(response: &str) -> Result<&str> {
    // fenced ```json ... ``` block
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // length of "```json"
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // raw {...} object
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::MalformedResponse("no JSON object found".to_string()))
}

/// Parse, normalize and validate an analysis response
///
/// A missing or non-array `top_3_matches`, a wrong entry count,
/// duplicate ranks or an out-of-range score all fail with
/// `MalformedResponse`. The match list is re-sorted ascending by rank
/// before being handed to the caller.
pub fn parse_analysis_response(response: &str) -> Result<AnalysisResult> {
    let json_str = extract_json(response)?;
    let mut result: AnalysisResult = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::MalformedResponse(format!("JSON parse error: {}", e)))?;
    result.normalize();
    result.validate()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID_BODY: &str = r#"{
        "primary_match_id": "B",
        "all_matched_kstars": "박보검, 아이유, NCT 재현",
        "kstar_match_reason_kr": "부드럽고 따뜻한 인상이 돋보입니다.",
        "kstar_match_reason_en": "A soft and warm impression stands out.",
        "top_3_matches": [
            {"rank": 1, "match_id": "B", "snack_name": "허니버터칩",
             "vibe_keyword_kr": "부드럽고 달콤함", "vibe_keyword_en": "Soft and Sweet",
             "match_score_percent": 75},
            {"rank": 2, "match_id": "D", "snack_name": "새우깡",
             "vibe_keyword_kr": "균형 잡힌 클래식함", "match_score_percent": 15},
            {"rank": 3, "match_id": "H", "snack_name": "초코파이",
             "vibe_keyword_kr": "촉촉한 반전 매력", "match_score_percent": 10}
        ]
    }"#;

    // =============================================
    // extract_json
    // =============================================

    #[test]
    fn test_extract_json_with_block() {
        let response = format!("Here is the analysis:\n```json\n{}\n```\nDone.", VALID_BODY);
        let json = extract_json(&response).unwrap();
        assert!(json.starts_with('{'));
        assert!(json.contains("primary_match_id"));
    }

    #[test]
    fn test_extract_json_raw_object() {
        let json = extract_json(VALID_BODY).unwrap();
        assert!(json.contains("top_3_matches"));
    }

    #[test]
    fn test_extract_json_with_surrounding_text() {
        let response = r#"Result: {"key": "value"} end."#;
        assert_eq!(extract_json(response).unwrap(), r#"{"key": "value"}"#);
    }

    #[test]
    fn test_extract_json_error() {
        let result = extract_json("No JSON here, just plain text.");
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_extract_json_empty_response() {
        assert!(extract_json("").is_err());
    }

    // =============================================
    // parse_analysis_response — happy path
    // =============================================

    #[test]
    fn test_parse_valid_response() {
        let result = parse_analysis_response(VALID_BODY).unwrap();
        assert_eq!(result.primary_match_id, "B");
        assert_eq!(result.top_3_matches.len(), 3);
        assert_eq!(result.top_3_matches[0].match_score_percent, 75);
        assert!(result.primary_is_consistent());
    }

    #[test]
    fn test_parse_resorts_out_of_order_ranks() {
        // order 3, 1, 2 as delivered
        let response = r#"{
            "primary_match_id": "B",
            "all_matched_kstars": "박보검, 아이유, NCT 재현",
            "kstar_match_reason_kr": "이유",
            "top_3_matches": [
                {"rank": 3, "match_id": "H", "snack_name": "초코파이",
                 "vibe_keyword_kr": "촉촉한 반전 매력", "match_score_percent": 10},
                {"rank": 1, "match_id": "B", "snack_name": "허니버터칩",
                 "vibe_keyword_kr": "부드럽고 달콤함", "match_score_percent": 75},
                {"rank": 2, "match_id": "D", "snack_name": "새우깡",
                 "vibe_keyword_kr": "균형 잡힌 클래식함", "match_score_percent": 15}
            ]
        }"#;

        let result = parse_analysis_response(response).unwrap();
        let ranks: Vec<u8> = result.top_3_matches.iter().map(|m| m.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(result.top_3_matches[0].match_id, "B");
    }

    // =============================================
    // parse_analysis_response — malformed payloads
    // =============================================

    #[test]
    fn test_parse_missing_top_3_matches() {
        let response = r#"{
            "primary_match_id": "B",
            "all_matched_kstars": "박보검, 아이유, NCT 재현",
            "kstar_match_reason_kr": "이유"
        }"#;

        let result = parse_analysis_response(response);
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_top_3_matches_not_an_array() {
        let response = r#"{
            "primary_match_id": "B",
            "all_matched_kstars": "박보검, 아이유, NCT 재현",
            "kstar_match_reason_kr": "이유",
            "top_3_matches": "not a sequence"
        }"#;

        let result = parse_analysis_response(response);
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_two_entries_only() {
        let response = r#"{
            "primary_match_id": "B",
            "all_matched_kstars": "박보검, 아이유, NCT 재현",
            "kstar_match_reason_kr": "이유",
            "top_3_matches": [
                {"rank": 1, "match_id": "B", "snack_name": "허니버터칩",
                 "vibe_keyword_kr": "부드럽고 달콤함", "match_score_percent": 80},
                {"rank": 2, "match_id": "D", "snack_name": "새우깡",
                 "vibe_keyword_kr": "균형 잡힌 클래식함", "match_score_percent": 20}
            ]
        }"#;

        let result = parse_analysis_response(response);
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_not_json_at_all() {
        let result = parse_analysis_response("the model apologizes instead of answering");
        assert!(matches!(result, Err(Error::MalformedResponse(_))));
    }

    #[test]
    fn test_parse_unknown_primary_id_is_accepted() {
        // Shape-valid but unknown id: parsing succeeds, the renderer
        // fails closed when the catalog lookup misses.
        let response = VALID_BODY.replace("\"primary_match_id\": \"B\"", "\"primary_match_id\": \"Z\"");
        let result = parse_analysis_response(&response).unwrap();
        assert_eq!(result.primary_match_id, "Z");
        assert!(!result.primary_is_consistent());
    }
}
