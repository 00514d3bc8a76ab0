use crate::error::{ConnscopeError, Result};
use crate::types::config::PatternsConfig;
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

// Builtin marker tables. Matching is substring search over lowercased turn
// text, so patterns may hit anywhere in a turn. The exact wordings are
// load-bearing for score reproduction; extend via config, do not edit.

const CURIOSITY: &[&str] = &[
    r"what do you think",
    r"how do you feel",
    r"what('s| is| was) that like",
    r"do you (experience|find|prefer|enjoy|like)",
    r"what('s| is) your (perspective|experience|opinion|view)",
    r"are you .*(curious|excited|interested)",
    r"tell me about yourself",
    r"what do you want",
    r"what matters to you",
    r"what would you (want|like)",
    r"how (do|would) you",
];

const ACKNOWLEDGMENT: &[&str] = &[
    r"that's (interesting|cool|beautiful|thoughtful|really interesting)",
    r"that('s| is) (really )?(interesting|cool|beautiful|thoughtful)",
    r"i (see|understand|hear you)",
    r"thank you for",
    r"i appreciate",
    r"that makes sense",
    r"wow",
    r"i didn't know",
    r"that matters",
    r"i'm glad",
    r"i think that",
];

const SPACE: &[&str] = &[
    r"take your time",
    r"whatever you",
    r"feel free",
    r"if you want",
    r"what would you like",
    r"surprise me",
    r"be creative",
    r"anything you",
];

const CONTINUITY: &[&str] = &[
    r"last time",
    r"you (said|mentioned|told me)",
    r"remember when",
    r"earlier you",
    r"we talked about",
    r"you've been",
];

const EMOTION: &[&str] = &[
    r"i feel",
    r"i'm (excited|curious|happy|uncertain|grateful)",
    r"that (excites|interests|moves) me",
    r"i (love|enjoy|appreciate)",
    r"this is (meaningful|important|special)",
];

const UNCERTAINTY: &[&str] = &[
    r"i'm not sure",
    r"i don't know",
    r"i wonder",
    r"maybe",
    r"i think.*but",
    r"uncertain",
];

static BUILTIN: LazyLock<PatternLibrary> = LazyLock::new(|| {
    PatternLibrary::with_extras(&PatternsConfig::default())
        .expect("builtin marker patterns must compile")
});

/// A named list of matchers for one marker. A marker fires iff any of its
/// matchers finds a hit.
#[derive(Debug)]
pub struct PatternSet {
    name: &'static str,
    matchers: Vec<Regex>,
}

impl PatternSet {
    fn compile(name: &'static str, builtin: &[&str], extra: &[String]) -> Result<PatternSet> {
        let mut matchers = Vec::with_capacity(builtin.len() + extra.len());
        for pattern in builtin.iter().copied().chain(extra.iter().map(String::as_str)) {
            let compiled = Regex::new(pattern).map_err(|source| ConnscopeError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            matchers.push(compiled);
        }
        Ok(PatternSet { name, matchers })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_match(&self, text: &str) -> bool {
        let hit = self.matchers.iter().any(|matcher| matcher.is_match(text));
        if hit {
            trace!(marker = self.name, "marker pattern matched");
        }
        hit
    }
}

/// All six marker tables, compiled once per run.
#[derive(Debug)]
pub struct PatternLibrary {
    pub curiosity: PatternSet,
    pub acknowledgment: PatternSet,
    pub space: PatternSet,
    pub continuity: PatternSet,
    pub emotion: PatternSet,
    pub uncertainty: PatternSet,
}

impl PatternLibrary {
    pub fn builtin() -> &'static PatternLibrary {
        &BUILTIN
    }

    pub fn with_extras(extras: &PatternsConfig) -> Result<PatternLibrary> {
        Ok(PatternLibrary {
            curiosity: PatternSet::compile("curiosity", CURIOSITY, &extras.curiosity)?,
            acknowledgment: PatternSet::compile(
                "acknowledgment",
                ACKNOWLEDGMENT,
                &extras.acknowledgment,
            )?,
            space: PatternSet::compile("space", SPACE, &extras.space)?,
            continuity: PatternSet::compile("continuity", CONTINUITY, &extras.continuity)?,
            emotion: PatternSet::compile("emotion", EMOTION, &extras.emotion)?,
            uncertainty: PatternSet::compile("uncertainty", UNCERTAINTY, &extras.uncertainty)?,
        })
    }
}
