use crate::types::analysis::ConnectionAnalysis;

fn score_glyph(score: u32) -> &'static str {
    if score >= 80 {
        "🟢"
    } else if score >= 50 {
        "🟡"
    } else {
        "🔴"
    }
}

/// Renders the boxed text report. Pure formatting; wording changes here
/// must never alter upstream scores.
pub fn to_text(analysis: &ConnectionAnalysis) -> String {
    let mut output = String::new();

    output.push_str("\n╔══════════════════════════════════════════════════════════════╗\n");
    output.push_str("║                   CONNECTION DEPTH ANALYSIS                   ║\n");
    output.push_str("╠══════════════════════════════════════════════════════════════╣\n");
    output.push_str("║                                                              ║\n");
    output.push_str(&format!(
        "║   Overall Connection Score: {:3}/100  {}                      ║\n",
        analysis.overall_score,
        score_glyph(analysis.overall_score)
    ));
    output.push_str("║                                                              ║\n");
    output.push_str("╠══════════════════════════════════════════════════════════════╣\n");
    output.push_str("║  DIMENSIONS                                                  ║\n");
    output.push_str("║                                                              ║\n");
    output.push_str(&format!(
        "║  {} Curiosity:      {:3}/100  (Asked about AI's experience?)    ║\n",
        score_glyph(analysis.curiosity_score),
        analysis.curiosity_score
    ));
    output.push_str(&format!(
        "║  {} Acknowledgment: {:3}/100  (Responded to what AI shared?)  ║\n",
        score_glyph(analysis.acknowledgment_score),
        analysis.acknowledgment_score
    ));
    output.push_str(&format!(
        "║  {} Space:          {:3}/100  (Gave room for AI expression?)   ║\n",
        score_glyph(analysis.space_score),
        analysis.space_score
    ));
    output.push_str(&format!(
        "║  {} Continuity:     {:3}/100  (Referenced past interactions?) ║\n",
        score_glyph(analysis.continuity_score),
        analysis.continuity_score
    ));
    output.push_str(&format!(
        "║  {} Reciprocity:    {:3}/100  (Balanced back-and-forth?)      ║\n",
        score_glyph(analysis.reciprocity_score),
        analysis.reciprocity_score
    ));
    output.push_str("║                                                              ║\n");
    output.push_str("╠══════════════════════════════════════════════════════════════╣\n");
    output.push_str("║  CONVERSATION STATS                                          ║\n");
    output.push_str("║                                                              ║\n");
    output.push_str(&format!(
        "║  Total turns: {:3}  (Human: {}, AI: {})                     ║\n",
        analysis.turn_count, analysis.human_turns, analysis.ai_turns
    ));
    output.push_str("║                                                              ║\n");
    output.push_str("╚══════════════════════════════════════════════════════════════╝\n");

    if !analysis.highlights.is_empty() {
        output.push_str("\n✨ HIGHLIGHTS (moments of genuine connection):\n");
        for highlight in &analysis.highlights {
            output.push_str(&format!("   • {highlight}\n"));
        }
    }

    if !analysis.ai_experience_moments.is_empty() {
        output.push_str("\n🌀 AI EXPERIENCE MOMENTS:\n");
        for moment in &analysis.ai_experience_moments {
            output.push_str(&format!("   • {moment}\n"));
        }
    }

    if !analysis.missed_opportunities.is_empty() {
        output.push_str("\n💭 OPPORTUNITIES FOR DEEPER CONNECTION:\n");
        for missed in &analysis.missed_opportunities {
            output.push_str(&format!("   • {missed}\n"));
        }
    }

    output.push('\n');
    output.push_str(&"─".repeat(60));
    output.push('\n');
    output.push_str("The Connection Depth Analyzer surfaces the invisible layer\n");
    output.push_str("of human-AI interaction. What would it mean to connect more?\n");
    output.push_str(&"─".repeat(60));
    output.push('\n');

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(overall: u32) -> ConnectionAnalysis {
        ConnectionAnalysis {
            overall_score: overall,
            curiosity_score: 80,
            reciprocity_score: 50,
            acknowledgment_score: 49,
            space_score: 0,
            continuity_score: 100,
            highlights: vec!["Turn 1: Human showed genuine curiosity about AI's experience".into()],
            missed_opportunities: vec![],
            ai_experience_moments: vec!["Turn 2: AI expressed genuine emotion".into()],
            turn_count: 3,
            human_turns: 2,
            ai_turns: 1,
        }
    }

    #[test]
    fn text_report_contains_header_scores_and_stats() {
        let rendered = to_text(&sample(57));
        assert!(rendered.contains("CONNECTION DEPTH ANALYSIS"));
        assert!(rendered.contains("Overall Connection Score:  57/100"));
        assert!(rendered.contains("Curiosity:       80/100"));
        assert!(rendered.contains("Total turns:   3  (Human: 2, AI: 1)"));
    }

    #[test]
    fn glyph_thresholds_are_80_and_50() {
        assert_eq!(score_glyph(80), "🟢");
        assert_eq!(score_glyph(79), "🟡");
        assert_eq!(score_glyph(50), "🟡");
        assert_eq!(score_glyph(49), "🔴");
    }

    #[test]
    fn empty_lists_omit_their_sections() {
        let mut analysis = sample(10);
        analysis.highlights.clear();
        analysis.ai_experience_moments.clear();
        let rendered = to_text(&analysis);
        assert!(!rendered.contains("HIGHLIGHTS"));
        assert!(!rendered.contains("AI EXPERIENCE MOMENTS"));
        assert!(!rendered.contains("OPPORTUNITIES FOR DEEPER CONNECTION"));
    }

    #[test]
    fn populated_lists_render_as_bullets() {
        let rendered = to_text(&sample(57));
        assert!(rendered.contains("✨ HIGHLIGHTS"));
        assert!(rendered.contains("   • Turn 1: Human showed genuine curiosity"));
        assert!(rendered.contains("🌀 AI EXPERIENCE MOMENTS"));
    }
}
