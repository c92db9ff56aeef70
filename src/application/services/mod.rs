//! Application services - Format operation and its transforms

pub mod format_service;
pub mod json_transformer;
pub mod reindent_transformer;

pub use format_service::FormatService;
pub use json_transformer::JsonTransformer;
pub use reindent_transformer::LineReindentTransformer;

/// Whitespace as the host runtime trims it: Unicode white space plus the byte-order mark
pub(crate) fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Trim both ends of a snippet
pub(crate) fn trim_code(code: &str) -> &str {
    code.trim_matches(is_trimmable)
}
