use serde::Deserialize;

/// Optional analyzer config (`connscope.toml`). Everything here extends
/// the builtin tables; config can never remove a builtin label or
/// pattern, and scoring weights are compile-time constants.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConnscopeConfig {
    pub labels: Option<LabelsConfig>,
    pub patterns: Option<PatternsConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelsConfig {
    /// Extra AI speaker label prefixes, e.g. a persona name like "Clio".
    #[serde(default)]
    pub persona: Vec<String>,
}

/// Extra regexes merged into the builtin marker tables, keyed by marker.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatternsConfig {
    #[serde(default)]
    pub curiosity: Vec<String>,
    #[serde(default)]
    pub acknowledgment: Vec<String>,
    #[serde(default)]
    pub space: Vec<String>,
    #[serde(default)]
    pub continuity: Vec<String>,
    #[serde(default)]
    pub emotion: Vec<String>,
    #[serde(default)]
    pub uncertainty: Vec<String>,
}
