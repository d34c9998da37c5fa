//! Analysis result types
//!
//! Wire contract shared by the browser client, the relay and the
//! upstream model. Field names are the snake_case names the model is
//! instructed to emit, so these structs deserialize its JSON directly.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One ranked match out of the top three
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnackMatch {
    pub rank: u8,
    /// Classification id, "A" through "J"
    pub match_id: String,
    pub snack_name: String,
    pub vibe_keyword_kr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vibe_keyword_en: Option<String>,
    pub match_score_percent: u8,
}

/// Validated analysis result, at most one live instance per session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Id of the highest-ranked type; must exist in the catalog
    pub primary_match_id: String,
    /// The three K-stars of the primary type, comma separated
    pub all_matched_kstars: String,
    pub kstar_match_reason_kr: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kstar_match_reason_en: Option<String>,
    pub top_3_matches: Vec<SnackMatch>,
}

impl AnalysisResult {
    /// Re-sort `top_3_matches` ascending by rank
    ///
    /// The upstream model is not trusted to preorder the array.
    pub fn normalize(&mut self) {
        self.top_3_matches.sort_by_key(|m| m.rank);
    }

    /// Check the structural invariants of a usable result
    ///
    /// Exactly three entries, ranks forming the set {1,2,3}, every score
    /// within 0-100. Call after `normalize`.
    pub fn validate(&self) -> Result<()> {
        if self.top_3_matches.len() != 3 {
            return Err(Error::MalformedResponse(format!(
                "expected 3 matches, got {}",
                self.top_3_matches.len()
            )));
        }
        let mut ranks: Vec<u8> = self.top_3_matches.iter().map(|m| m.rank).collect();
        ranks.sort_unstable();
        if ranks != [1, 2, 3] {
            return Err(Error::MalformedResponse(format!(
                "ranks {:?} are not a permutation of 1..=3",
                ranks
            )));
        }
        for m in &self.top_3_matches {
            if m.match_score_percent > 100 {
                return Err(Error::MalformedResponse(format!(
                    "score {}% out of range for rank {}",
                    m.match_score_percent, m.rank
                )));
            }
        }
        Ok(())
    }

    /// Whether the primary id agrees with the rank-1 entry
    ///
    /// The renderer checks this and fails closed; an inconsistent result
    /// is rendered as "result unavailable", never partially.
    pub fn primary_is_consistent(&self) -> bool {
        self.top_3_matches
            .iter()
            .find(|m| m.rank == 1)
            .map(|m| m.match_id == self.primary_match_id)
            .unwrap_or(false)
    }

    /// The reason text for the requested language, falling back to
    /// Korean when no English variant was returned
    pub fn reason(&self, english: bool) -> &str {
        if english {
            self.kstar_match_reason_en
                .as_deref()
                .unwrap_or(&self.kstar_match_reason_kr)
        } else {
            &self.kstar_match_reason_kr
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(rank: u8, id: &str, score: u8) -> SnackMatch {
        SnackMatch {
            rank,
            match_id: id.to_string(),
            snack_name: format!("snack-{}", id),
            vibe_keyword_kr: format!("vibe-{}", id),
            vibe_keyword_en: None,
            match_score_percent: score,
        }
    }

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            primary_match_id: "B".to_string(),
            all_matched_kstars: "박보검, 아이유, NCT 재현".to_string(),
            kstar_match_reason_kr: "부드러운 인상입니다.".to_string(),
            kstar_match_reason_en: Some("A soft impression.".to_string()),
            top_3_matches: vec![
                sample_match(1, "B", 75),
                sample_match(2, "D", 15),
                sample_match(3, "H", 10),
            ],
        }
    }

    // =============================================
    // normalize
    // =============================================

    #[test]
    fn test_normalize_sorts_out_of_order_ranks() {
        let mut result = sample_result();
        // order 3, 1, 2 as delivered by a misbehaving upstream
        result.top_3_matches.rotate_right(1);
        assert_eq!(result.top_3_matches[0].rank, 3);

        result.normalize();
        let ranks: Vec<u8> = result.top_3_matches.iter().map(|m| m.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert_eq!(result.top_3_matches[0].match_id, "B");
    }

    #[test]
    fn test_normalize_keeps_sorted_input() {
        let mut result = sample_result();
        let before = result.top_3_matches.clone();
        result.normalize();
        assert_eq!(result.top_3_matches, before);
    }

    // =============================================
    // validate
    // =============================================

    #[test]
    fn test_validate_accepts_sample() {
        assert!(sample_result().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_wrong_length() {
        let mut result = sample_result();
        result.top_3_matches.pop();
        assert!(matches!(
            result.validate(),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_ranks() {
        let mut result = sample_result();
        result.top_3_matches[2].rank = 1;
        assert!(matches!(
            result.validate(),
            Err(Error::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_score_over_100() {
        let mut result = sample_result();
        result.top_3_matches[0].match_score_percent = 101;
        assert!(matches!(
            result.validate(),
            Err(Error::MalformedResponse(_))
        ));
    }

    // =============================================
    // primary consistency / reason fallback
    // =============================================

    #[test]
    fn test_primary_is_consistent() {
        assert!(sample_result().primary_is_consistent());
    }

    #[test]
    fn test_primary_inconsistent_on_mismatch() {
        let mut result = sample_result();
        result.primary_match_id = "A".to_string();
        assert!(!result.primary_is_consistent());
    }

    #[test]
    fn test_primary_inconsistent_without_rank_one() {
        let mut result = sample_result();
        result.top_3_matches.remove(0);
        assert!(!result.primary_is_consistent());
    }

    #[test]
    fn test_reason_language_fallback() {
        let mut result = sample_result();
        assert_eq!(result.reason(true), "A soft impression.");
        assert_eq!(result.reason(false), "부드러운 인상입니다.");
        result.kstar_match_reason_en = None;
        assert_eq!(result.reason(true), "부드러운 인상입니다.");
    }

    // =============================================
    // serde
    // =============================================

    #[test]
    fn test_serialize_skips_absent_english_fields() {
        let mut result = sample_result();
        result.kstar_match_reason_en = None;
        let json = serde_json::to_string(&result).expect("serialize");
        assert!(!json.contains("kstar_match_reason_en"));
        assert!(json.contains("\"primary_match_id\":\"B\""));
    }

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{
            "primary_match_id": "B",
            "all_matched_kstars": "박보검, 아이유, NCT 재현",
            "kstar_match_reason_kr": "이유",
            "top_3_matches": [
                {"rank": 1, "match_id": "B", "snack_name": "허니버터칩",
                 "vibe_keyword_kr": "부드럽고 달콤함", "match_score_percent": 75},
                {"rank": 2, "match_id": "D", "snack_name": "새우깡",
                 "vibe_keyword_kr": "균형 잡힌 클래식함", "match_score_percent": 15},
                {"rank": 3, "match_id": "H", "snack_name": "초코파이",
                 "vibe_keyword_kr": "촉촉한 반전 매력", "match_score_percent": 10}
            ]
        }"#;

        let result: AnalysisResult = serde_json::from_str(json).expect("deserialize");
        assert_eq!(result.primary_match_id, "B");
        assert_eq!(result.top_3_matches.len(), 3);
        assert_eq!(result.kstar_match_reason_en, None);
        assert_eq!(result.top_3_matches[1].vibe_keyword_en, None);
    }
}
