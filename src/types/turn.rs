#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Human,
    Ai,
}

/// One contiguous utterance by a single speaker.
///
/// The parser constructs turns with all markers false; the annotator sets
/// them exactly once, in turn order. Markers that do not apply to the
/// turn's speaker stay false.
#[derive(Debug, Clone)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,

    // Human-only markers
    pub curiosity_shown: bool,
    pub acknowledgment_given: bool,
    pub space_given: bool,
    pub continuity_referenced: bool,

    // AI-only markers
    pub emotion_expressed: bool,
    pub uncertainty_allowed: bool,
}

impl Turn {
    pub fn new(speaker: Speaker, text: String) -> Self {
        Self {
            speaker,
            text,
            curiosity_shown: false,
            acknowledgment_given: false,
            space_given: false,
            continuity_referenced: false,
            emotion_expressed: false,
            uncertainty_allowed: false,
        }
    }
}
