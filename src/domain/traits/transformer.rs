use crate::application::errors::FormatError;

/// A pure text transform applied to a code snippet
pub trait Transformer: Send + Sync {
    /// Transform `code` using `indent_size` spaces of indentation
    fn transform(&self, code: &str, indent_size: usize) -> Result<String, FormatError>;
}
