use serde::{Deserialize, Serialize};
use super::Language;

/// Output of a successful format operation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatResult {
    pub formatted: String,
    pub language: Language,
    pub line_count: usize,
    pub message: String,
}

impl FormatResult {
    /// Build a result, deriving the line count and status message
    pub fn new(formatted: String, language: Language) -> Self {
        let line_count = formatted.split('\n').count();
        Self {
            message: format!("Successfully formatted {} code", language),
            formatted,
            language,
            line_count,
        }
    }
}
