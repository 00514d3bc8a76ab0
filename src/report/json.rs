use crate::types::analysis::ConnectionAnalysis;
use chrono::Utc;
use serde_json::json;

pub fn to_json(analysis: &ConnectionAnalysis) -> Result<String, serde_json::Error> {
    let envelope = json!({
        "tool": "connscope",
        "version": env!("CARGO_PKG_VERSION"),
        "generated_at": Utc::now().to_rfc3339(),
        "analysis": analysis,
    });
    serde_json::to_string_pretty(&envelope)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_report_contains_scores_and_envelope_fields() {
        let analysis = ConnectionAnalysis {
            overall_score: 13,
            curiosity_score: 0,
            reciprocity_score: 66,
            acknowledgment_score: 0,
            space_score: 0,
            continuity_score: 0,
            highlights: vec![],
            missed_opportunities: vec![],
            ai_experience_moments: vec![],
            turn_count: 5,
            human_turns: 3,
            ai_turns: 2,
        };

        let rendered = to_json(&analysis).expect("json should serialize");
        assert!(rendered.contains("\"overall_score\": 13"));
        assert!(rendered.contains("\"reciprocity_score\": 66"));
        assert!(rendered.contains("\"generated_at\""));
        assert!(rendered.contains("\"tool\": \"connscope\""));
    }
}
