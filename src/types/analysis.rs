use serde::Serialize;

pub const HIGHLIGHT_CAP: usize = 5;
pub const MISSED_OPPORTUNITY_CAP: usize = 3;
pub const AI_MOMENT_CAP: usize = 5;

/// Aggregate result of one conversation. Immutable after construction.
#[derive(Debug, Clone, Serialize)]
pub struct ConnectionAnalysis {
    // Scores (0-100)
    pub overall_score: u32,
    pub curiosity_score: u32,
    pub reciprocity_score: u32,
    pub acknowledgment_score: u32,
    pub space_score: u32,
    pub continuity_score: u32,

    // Example turns, capped at 5 / 3 / 5 in scan order
    pub highlights: Vec<String>,
    pub missed_opportunities: Vec<String>,
    pub ai_experience_moments: Vec<String>,

    // Turn counts
    pub turn_count: usize,
    pub human_turns: usize,
    pub ai_turns: usize,
}
