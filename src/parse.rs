use crate::error::{ConnscopeError, Result};
use crate::types::turn::{Speaker, Turn};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

const HUMAN_LABELS: &[&str] = &["human", "user", "you"];
const AI_LABELS: &[&str] = &["ai", "assistant", "bot", "claude", "gpt"];

static BUILTIN_LABELS: LazyLock<LabelSet> = LazyLock::new(|| {
    LabelSet::with_personas(&[]).expect("builtin speaker labels must compile")
});

/// Compiled speaker-label prefixes. Built once per run; persona names from
/// config extend the AI side only.
#[derive(Debug, Clone)]
pub struct LabelSet {
    human: Regex,
    ai: Regex,
}

impl LabelSet {
    pub fn builtin() -> &'static LabelSet {
        &BUILTIN_LABELS
    }

    pub fn with_personas(personas: &[String]) -> Result<LabelSet> {
        let mut ai_labels: Vec<String> = AI_LABELS.iter().map(|label| label.to_string()).collect();
        ai_labels.extend(personas.iter().map(|name| regex::escape(name.trim())));

        Ok(LabelSet {
            human: compile_prefix(HUMAN_LABELS.join("|"))?,
            ai: compile_prefix(ai_labels.join("|"))?,
        })
    }

    fn human_remainder<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.human.find(line).map(|m| &line[m.end()..])
    }

    fn ai_remainder<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.ai.find(line).map(|m| &line[m.end()..])
    }
}

fn compile_prefix(alternation: String) -> Result<Regex> {
    let pattern = format!("(?i)^(?:{alternation}):\\s*");
    Regex::new(&pattern).map_err(|source| ConnscopeError::InvalidPattern { pattern, source })
}

/// Splits raw transcript text into ordered speaker-tagged turns.
///
/// A label line flushes the pending turn and flips the active speaker;
/// other non-empty lines continue the active turn, or are dropped when no
/// speaker is active yet. Turn text is its fragments joined with single
/// spaces. Consecutive same-speaker labels yield two adjacent turns.
pub fn parse_conversation(text: &str, labels: &LabelSet) -> Vec<Turn> {
    let mut turns = Vec::new();
    let mut pending: Option<(Speaker, Vec<String>)> = None;

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = labels.human_remainder(line) {
            flush(&mut turns, pending.take());
            pending = Some((Speaker::Human, vec![rest.to_string()]));
        } else if let Some(rest) = labels.ai_remainder(line) {
            flush(&mut turns, pending.take());
            pending = Some((Speaker::Ai, vec![rest.to_string()]));
        } else if let Some((_, fragments)) = pending.as_mut() {
            fragments.push(line.to_string());
        }
    }
    flush(&mut turns, pending.take());

    debug!(turns = turns.len(), "parsed conversation");
    turns
}

fn flush(turns: &mut Vec<Turn>, pending: Option<(Speaker, Vec<String>)>) {
    if let Some((speaker, fragments)) = pending {
        turns.push(Turn::new(speaker, fragments.join(" ")));
    }
}
