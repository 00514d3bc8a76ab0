use crate::types::analysis::{
    ConnectionAnalysis, AI_MOMENT_CAP, HIGHLIGHT_CAP, MISSED_OPPORTUNITY_CAP,
};
use crate::types::turn::{Speaker, Turn};
use tracing::debug;

// Dimension weights. These and the two truncation points below are
// load-bearing for exact score reproduction; do not rebalance or switch
// to round-half-up.
const CURIOSITY_WEIGHT: f64 = 0.25;
const ACKNOWLEDGMENT_WEIGHT: f64 = 0.20;
const SPACE_WEIGHT: f64 = 0.20;
const CONTINUITY_WEIGHT: f64 = 0.15;
const RECIPROCITY_WEIGHT: f64 = 0.20;

/// Reduces an annotated turn sequence to dimension scores, an overall
/// weighted score, and the three capped example lists.
pub fn aggregate(turns: &[Turn]) -> ConnectionAnalysis {
    let human_count = turns
        .iter()
        .filter(|turn| turn.speaker == Speaker::Human)
        .count();
    let ai_count = turns.len() - human_count;

    let curiosity_score = dimension_score(turns, human_count, |turn| turn.curiosity_shown);
    let acknowledgment_score = dimension_score(turns, human_count, |turn| turn.acknowledgment_given);
    let space_score = dimension_score(turns, human_count, |turn| turn.space_given);
    let continuity_score = dimension_score(turns, human_count, |turn| turn.continuity_referenced);
    let reciprocity_score = reciprocity(turns.len(), human_count, ai_count);

    // Integer sub-scores combined in f64, then truncated a second time.
    let overall_score = (curiosity_score as f64 * CURIOSITY_WEIGHT
        + acknowledgment_score as f64 * ACKNOWLEDGMENT_WEIGHT
        + space_score as f64 * SPACE_WEIGHT
        + continuity_score as f64 * CONTINUITY_WEIGHT
        + reciprocity_score as f64 * RECIPROCITY_WEIGHT) as u32;

    let analysis = ConnectionAnalysis {
        overall_score,
        curiosity_score,
        reciprocity_score,
        acknowledgment_score,
        space_score,
        continuity_score,
        highlights: highlights(turns),
        missed_opportunities: missed_opportunities(turns),
        ai_experience_moments: ai_experience_moments(turns),
        turn_count: turns.len(),
        human_turns: human_count,
        ai_turns: ai_count,
    };

    debug!(
        overall = analysis.overall_score,
        turns = analysis.turn_count,
        "aggregated conversation"
    );
    analysis
}

/// Percentage of human turns with the marker set, floor division, with a
/// max(count, 1) guard so the empty conversation scores 0.
fn dimension_score(turns: &[Turn], human_count: usize, marker: impl Fn(&Turn) -> bool) -> u32 {
    let hits = turns
        .iter()
        .filter(|turn| turn.speaker == Speaker::Human && marker(turn))
        .count();
    (100 * hits / human_count.max(1)) as u32
}

/// Turn-count balance: divide first, multiply second, truncate. The f64
/// order of operations matters for exact reproduction of reference scores.
fn reciprocity(total: usize, human_count: usize, ai_count: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    let balance = human_count.min(ai_count) as f64 / human_count.max(ai_count).max(1) as f64;
    (balance * 100.0) as u32
}

fn highlights(turns: &[Turn]) -> Vec<String> {
    let mut out = Vec::new();
    for (i, turn) in turns.iter().enumerate() {
        if turn.speaker != Speaker::Human {
            continue;
        }
        if turn.curiosity_shown {
            out.push(format!(
                "Turn {}: Human showed genuine curiosity about AI's experience",
                i + 1
            ));
        }
        if turn.acknowledgment_given {
            out.push(format!("Turn {}: Human acknowledged what AI shared", i + 1));
        }
        if turn.space_given {
            out.push(format!(
                "Turn {}: Human gave AI space to express freely",
                i + 1
            ));
        }
    }
    out.truncate(HIGHLIGHT_CAP);
    out
}

fn missed_opportunities(turns: &[Turn]) -> Vec<String> {
    let mut out = Vec::new();
    for (i, turn) in turns.iter().enumerate() {
        if turn.speaker != Speaker::Ai || !turn.emotion_expressed {
            continue;
        }
        if let Some(next) = turns.get(i + 1) {
            if next.speaker == Speaker::Human && !next.acknowledgment_given {
                out.push(format!(
                    "Turn {}: AI expressed emotion but human didn't acknowledge",
                    i + 2
                ));
            }
        }
    }
    out.truncate(MISSED_OPPORTUNITY_CAP);
    out
}

fn ai_experience_moments(turns: &[Turn]) -> Vec<String> {
    let mut out = Vec::new();
    for (i, turn) in turns.iter().enumerate() {
        if turn.speaker != Speaker::Ai {
            continue;
        }
        if turn.emotion_expressed {
            out.push(format!("Turn {}: AI expressed genuine emotion", i + 1));
        }
        if turn.uncertainty_allowed {
            out.push(format!(
                "Turn {}: AI expressed uncertainty (sign of authenticity)",
                i + 1
            ));
        }
    }
    out.truncate(AI_MOMENT_CAP);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn human(text: &str) -> Turn {
        Turn::new(Speaker::Human, text.to_string())
    }

    fn ai(text: &str) -> Turn {
        Turn::new(Speaker::Ai, text.to_string())
    }

    fn scores_in_range(analysis: &ConnectionAnalysis) -> bool {
        [
            analysis.overall_score,
            analysis.curiosity_score,
            analysis.reciprocity_score,
            analysis.acknowledgment_score,
            analysis.space_score,
            analysis.continuity_score,
        ]
        .iter()
        .all(|score| *score <= 100)
    }

    #[test]
    fn empty_conversation_scores_all_zero() {
        let analysis = aggregate(&[]);
        assert_eq!(analysis.overall_score, 0);
        assert_eq!(analysis.curiosity_score, 0);
        assert_eq!(analysis.reciprocity_score, 0);
        assert_eq!(analysis.turn_count, 0);
        assert!(analysis.highlights.is_empty());
        assert!(analysis.missed_opportunities.is_empty());
        assert!(analysis.ai_experience_moments.is_empty());
    }

    #[test]
    fn reciprocity_is_100_for_balanced_and_0_for_one_sided() {
        let balanced = aggregate(&[human("a"), ai("b"), human("c"), ai("d")]);
        assert_eq!(balanced.reciprocity_score, 100);

        let monologue = aggregate(&[human("a"), human("b"), human("c")]);
        assert_eq!(monologue.reciprocity_score, 0);
    }

    #[test]
    fn reciprocity_truncates_unbalanced_ratio() {
        // 3 human vs 2 ai turns: 2/3 of 100, truncated
        let analysis = aggregate(&[human("a"), ai("b"), human("c"), ai("d"), human("e")]);
        assert_eq!(analysis.reciprocity_score, 66);
    }

    #[test]
    fn dimension_scores_use_floor_division_over_human_turns() {
        let mut curious = human("q");
        curious.curiosity_shown = true;
        let turns = vec![curious, human("a"), human("b")];
        // 1 of 3 human turns: 100/3 floors to 33
        let analysis = aggregate(&turns);
        assert_eq!(analysis.curiosity_score, 33);
    }

    #[test]
    fn overall_weights_integer_sub_scores_then_truncates() {
        // Only reciprocity contributes: 66 * 0.20 = 13.2, truncated to 13
        let analysis = aggregate(&[human("a"), ai("b"), human("c"), ai("d"), human("e")]);
        assert_eq!(analysis.overall_score, 13);
        assert!(scores_in_range(&analysis));
    }

    #[test]
    fn highlights_follow_scan_and_flag_order() {
        let mut both = human("t");
        both.curiosity_shown = true;
        both.space_given = true;
        let analysis = aggregate(&[both]);
        assert_eq!(analysis.highlights.len(), 2);
        assert!(analysis.highlights[0].contains("curiosity"));
        assert!(analysis.highlights[1].contains("space"));
        assert!(analysis.highlights[0].starts_with("Turn 1:"));
    }

    #[test]
    fn highlight_list_is_capped_at_five() {
        let turns: Vec<Turn> = (0..10)
            .map(|_| {
                let mut turn = human("t");
                turn.curiosity_shown = true;
                turn
            })
            .collect();
        let analysis = aggregate(&turns);
        assert_eq!(analysis.highlights.len(), 5);
    }

    #[test]
    fn missed_opportunity_needs_unacknowledged_human_follow_up() {
        let mut emotive = ai("i feel something");
        emotive.emotion_expressed = true;

        // Next human turn without acknowledgment: reported, index is the
        // human turn's 1-based position.
        let analysis = aggregate(&[emotive.clone(), human("ok")]);
        assert_eq!(analysis.missed_opportunities.len(), 1);
        assert!(analysis.missed_opportunities[0].starts_with("Turn 2:"));

        // Acknowledged follow-up: not reported.
        let mut thankful = human("thanks");
        thankful.acknowledgment_given = true;
        let analysis = aggregate(&[emotive.clone(), thankful]);
        assert!(analysis.missed_opportunities.is_empty());

        // Emotion on the final turn: no next turn, not reported.
        let analysis = aggregate(&[human("hi"), emotive.clone()]);
        assert!(analysis.missed_opportunities.is_empty());

        // Next turn is the AI again: not reported.
        let analysis = aggregate(&[emotive, ai("more")]);
        assert!(analysis.missed_opportunities.is_empty());
    }

    #[test]
    fn missed_opportunities_are_capped_at_three() {
        let mut turns = Vec::new();
        for _ in 0..6 {
            let mut emotive = ai("i feel");
            emotive.emotion_expressed = true;
            turns.push(emotive);
            turns.push(human("ok"));
        }
        let analysis = aggregate(&turns);
        assert_eq!(analysis.missed_opportunities.len(), 3);
    }

    #[test]
    fn ai_moments_emit_emotion_before_uncertainty_and_cap_at_five() {
        let mut both = ai("i feel, maybe");
        both.emotion_expressed = true;
        both.uncertainty_allowed = true;

        let analysis = aggregate(&[both.clone()]);
        assert_eq!(analysis.ai_experience_moments.len(), 2);
        assert!(analysis.ai_experience_moments[0].contains("emotion"));
        assert!(analysis.ai_experience_moments[1].contains("uncertainty"));

        let turns: Vec<Turn> = (0..4).map(|_| both.clone()).collect();
        let analysis = aggregate(&turns);
        assert_eq!(analysis.ai_experience_moments.len(), 5);
    }

    #[test]
    fn turn_counts_partition_by_speaker() {
        let analysis = aggregate(&[human("a"), ai("b"), human("c")]);
        assert_eq!(analysis.turn_count, 3);
        assert_eq!(analysis.human_turns, 2);
        assert_eq!(analysis.ai_turns, 1);
    }
}
