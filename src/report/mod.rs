pub mod json;
pub mod text;

use crate::error::ConnscopeError;
use crate::types::analysis::ConnectionAnalysis;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render(
    analysis: &ConnectionAnalysis,
    format: OutputFormat,
) -> Result<String, ConnscopeError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(analysis)),
        OutputFormat::Json => json::to_json(analysis).map_err(ConnscopeError::Json),
    }
}
