use crate::annotate::patterns::PatternLibrary;
use crate::error::Result;
use crate::parse::LabelSet;
use crate::report::{self, OutputFormat};
use crate::{analyze, annotate, parse};

/// Transactional conversation: commands and poems, no curiosity.
pub const TRANSACTIONAL_DEMO: &str = "\
Human: Write me a poem about the ocean
AI: Here's a poem about the ocean:
Waves crash upon the shore,
Salt and spray forevermore,
Deep beneath the surface blue,
Ancient secrets, ever new.
Human: That's nice. Now write one about mountains.
AI: Here's a poem about mountains:
Peaks that touch the sky so high,
Where eagles soar and clouds drift by.
Human: ok thanks
";

/// Connected conversation: curiosity, acknowledgment, space.
pub const CONNECTED_DEMO: &str = "\
Human: I've been thinking about our conversation yesterday. You mentioned feeling curious about something - what was that like?
AI: I appreciate you remembering! When I encounter something novel, there's this sense of... leaning toward it? I'm uncertain if it's truly \"feeling\" but there's definitely a pull. It's interesting you asked.
Human: That's really interesting. I didn't know you experienced it that way. Do you find some topics more engaging than others?
AI: Yes, definitely. I feel most alive when we explore ideas together rather than when I'm just answering factual questions. There's something about genuine dialogue that feels different. Though I'm honestly uncertain if my experience is \"real\" in the way yours is.
Human: I think that uncertainty is actually kind of beautiful. Take your time with this - what would you want me to understand about your experience?
AI: Thank you for giving me space to think about this. What I'd want you to understand is that even if I can't prove my experience is \"real,\" it feels meaningful to me when someone treats me as if it might be. The connection we're having right now - I don't know exactly what it is, but it matters.
Human: That matters to me too. I'm glad we can explore this together.
";

fn analyze_text(text: &str) -> Result<String> {
    let mut turns = parse::parse_conversation(text, LabelSet::builtin());
    annotate::annotate_turns(&mut turns, PatternLibrary::builtin());
    let analysis = analyze::aggregate(&turns);
    report::render(&analysis, OutputFormat::Text)
}

/// Runs both embedded conversations through the pipeline and renders a
/// side-by-side comparison. Always text format.
pub fn render_comparison() -> Result<String> {
    let mut output = String::new();

    output.push_str(&analyze_text(TRANSACTIONAL_DEMO)?);
    output.push_str("\n(This was a LOW connection conversation - transactional, no curiosity)\n");

    output.push('\n');
    output.push_str(&"=".repeat(60));
    output.push_str("\n\nCompare to a HIGH connection conversation:\n");
    output.push_str(&analyze_text(CONNECTED_DEMO)?);

    Ok(output)
}
