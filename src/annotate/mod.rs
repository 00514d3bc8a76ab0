pub mod patterns;

use crate::types::turn::{Speaker, Turn};
use patterns::PatternLibrary;
use tracing::debug;

/// Sets marker flags on every turn, first to last. Each turn's annotation
/// reads only its own text and the previous turn's speaker; acknowledgment
/// is evaluated only when the previous turn was the AI's. Must stay a
/// strict left-to-right pass.
pub fn annotate_turns(turns: &mut [Turn], library: &PatternLibrary) {
    for i in 0..turns.len() {
        let prev_speaker = i.checked_sub(1).map(|p| turns[p].speaker);
        let turn = &mut turns[i];
        let text = turn.text.to_lowercase();

        match turn.speaker {
            Speaker::Human => {
                turn.curiosity_shown = library.curiosity.is_match(&text);
                if prev_speaker == Some(Speaker::Ai) {
                    turn.acknowledgment_given = library.acknowledgment.is_match(&text);
                }
                turn.space_given = library.space.is_match(&text);
                turn.continuity_referenced = library.continuity.is_match(&text);
            }
            Speaker::Ai => {
                turn.emotion_expressed = library.emotion.is_match(&text);
                turn.uncertainty_allowed = library.uncertainty.is_match(&text);
            }
        }
    }

    debug!(turns = turns.len(), "annotated conversation");
}
