//! Prompt generation
//!
//! The instruction prompt sent with every analysis request. The type
//! table inside it is rendered from the catalog at call time so the
//! model is always told exactly what the renderer can look up.

use crate::catalog::snack_types;

/// Render the catalog as the markdown table the prompt embeds
fn build_type_table() -> String {
    let mut table = String::from(
        "| 분류 ID | K-과자 유형 (Vibe) | 대표 K-과자 | 매칭 K-스타 3인 (같은 유형 연예인) | 유형 정의 (AI 분석 기준) |\n\
         | :--- | :--- | :--- | :--- | :--- |\n",
    );
    for t in snack_types() {
        table.push_str(&format!(
            "| **{}** | {} | {} | {} | {} |\n",
            t.id, t.vibe, t.snack, t.stars, t.definition
        ));
    }
    table
}

/// Build the full analysis instruction prompt
///
/// # Returns
/// Korean instruction text: role, the ten-type table, scoring and
/// drafting rules, and the exact JSON schema the model must return as a
/// single object with no surrounding prose.
pub fn build_analysis_prompt() -> String {
    let definitions = build_type_table();

    format!(
        r#"당신은 Ksnackface 프로젝트를 위한 AI 기반의 K-과자 유형 분석 전문가입니다.
사용자가 제공한 얼굴 사진을 분석하여, 그 인상(분위기, 표정, 이목구비의 조화)이 아래 정의된 10가지 'K-과자 유형' 중 가장 가까운 하나(1위)를 선택하고, 상위 3개 유형의 분석 결과를 제공해야 합니다.

### K-과자 유형 정의:
{definitions}

### 분석 및 출력 규칙:
1.  **유형 분류**: 분석된 인상은 반드시 위 표의 '분류 ID (A-J)' 중 상위 3개를 선정해야 합니다.
2.  **일치도 계산 (중요)**: 상위 3개 유형의 일치도를 정수 백분율(%)로 계산합니다. 세 유형의 일치도 합계는 100%가 되어야 합니다. 1위 유형의 일치도는 반드시 **70% 이상**이 되도록 가중치를 부여하고, 나머지 점수를 2위와 3위에 자연스럽게 분배하세요 (예: 1위 75%, 2위 15%, 3위 10%).
3.  **K-스타 연결**: 1위 유형에 해당하는 '매칭 K-스타 3인'을 'all_matched_kstars' 필드에 포함합니다.
4.  **유형 설명 생성**: 1위 유형을 기준으로, 사진 속 인물의 특징과 K-과자 유형 정의를 연결하여 구체적인 이유를 작성합니다. '사진 속 당신은...'과 같이 사진을 직접 묘사하는 문장은 피하고, 전체적인 인상과 분위기에 초점을 맞추세요. **이 설명에는 '매칭 K-스타'의 이름이 포함되어서는 안 됩니다.** 'kstar_match_reason_kr' 필드에는 한국어로 3문장 이내, 'kstar_match_reason_en' 필드에는 영어로 3문장 이내로, 간결하고 공유하기 좋게 작성하십시오.
5.  **출력 형식**: 반드시 아래 JSON 스키마에 따라 단일 JSON 객체만 반환해야 합니다. 다른 설명 텍스트는 일절 포함하지 마세요.

### JSON Schema:
{{
  "primary_match_id": "A-J 중 가장 높은 일치도를 가진 1위 분류 ID",
  "all_matched_kstars": "1위 유형에 해당하는 K-스타 3인 목록 (쉼표로 구분)",
  "kstar_match_reason_kr": "1위 유형 설명 (한국어 3문장 이내)",
  "kstar_match_reason_en": "1위 유형 설명 (영어 3문장 이내)",
  "top_3_matches": [
    {{
      "rank": 1,
      "match_id": "A-J 분류 ID",
      "snack_name": "대표 K-과자 이름",
      "vibe_keyword_kr": "K-과자 유형",
      "vibe_keyword_en": "K-snack type",
      "match_score_percent": 75
    }},
    {{ "rank": 2, "...": "..." }},
    {{ "rank": 3, "...": "..." }}
  ]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::snack_types;

    #[test]
    fn test_prompt_contains_every_catalog_entry() {
        let prompt = build_analysis_prompt();
        for t in snack_types() {
            assert!(prompt.contains(t.id), "missing id {}", t.id);
            assert!(prompt.contains(t.vibe), "missing vibe for {}", t.id);
            assert!(prompt.contains(t.snack), "missing snack for {}", t.id);
            assert!(prompt.contains(t.stars), "missing stars for {}", t.id);
            assert!(
                prompt.contains(t.definition),
                "missing definition for {}",
                t.id
            );
        }
    }

    #[test]
    fn test_prompt_names_output_fields() {
        let prompt = build_analysis_prompt();
        assert!(prompt.contains("primary_match_id"));
        assert!(prompt.contains("all_matched_kstars"));
        assert!(prompt.contains("kstar_match_reason_kr"));
        assert!(prompt.contains("kstar_match_reason_en"));
        assert!(prompt.contains("top_3_matches"));
        assert!(prompt.contains("match_score_percent"));
    }

    #[test]
    fn test_prompt_demands_single_json_object() {
        let prompt = build_analysis_prompt();
        assert!(prompt.contains("단일 JSON 객체"));
    }

    #[test]
    fn test_type_table_has_ten_rows() {
        let table = build_type_table();
        // header + separator + 10 data rows
        assert_eq!(table.trim_end().lines().count(), 12);
    }
}
