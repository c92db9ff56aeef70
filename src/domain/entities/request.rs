use super::Language;

/// Indentation width used when a request does not set one
pub const DEFAULT_INDENT_SIZE: usize = 2;

/// A validated formatting request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRequest {
    pub code: String,
    pub language: Language,
    pub indent_size: usize,
}

impl FormatRequest {
    pub fn new(code: impl Into<String>, language: Language) -> Self {
        Self {
            code: code.into(),
            language,
            indent_size: DEFAULT_INDENT_SIZE,
        }
    }

    pub fn with_indent_size(mut self, indent_size: usize) -> Self {
        self.indent_size = indent_size;
        self
    }
}
