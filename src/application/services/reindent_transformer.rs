//! Naive line re-indentation for source languages

use crate::application::errors::FormatError;
use crate::domain::traits::Transformer;
use super::{is_trimmable, trim_code};

/// Strips leading whitespace from every line and re-joins them with a fixed
/// indent. The first line is never indented; every later line gets exactly
/// `indent_size` spaces regardless of nesting. Block structure is not tracked.
pub struct LineReindentTransformer;

impl Transformer for LineReindentTransformer {
    fn transform(&self, code: &str, indent_size: usize) -> Result<String, FormatError> {
        let separator = format!("\n{}", " ".repeat(indent_size));
        let lines: Vec<&str> = trim_code(code)
            .split('\n')
            .map(|line| line.trim_start_matches(is_trimmable))
            .collect();
        Ok(lines.join(&separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flattens_nesting() {
        let out = LineReindentTransformer.transform("foo\n  bar\nbaz", 2).unwrap();
        assert_eq!(out, "foo\n  bar\n  baz");

        let out = LineReindentTransformer
            .transform("def f():\n        if x:\n            return 1", 4)
            .unwrap();
        assert_eq!(out, "def f():\n    if x:\n    return 1");
    }

    #[test]
    fn test_keeps_trailing_whitespace_and_blank_lines() {
        let out = LineReindentTransformer.transform("a  \n\n   b", 2).unwrap();
        assert_eq!(out, "a  \n  \n  b");
    }

    #[test]
    fn test_trims_outer_whitespace() {
        let out = LineReindentTransformer.transform("\n\n   x = 1\n\n", 2).unwrap();
        assert_eq!(out, "x = 1");
    }

    #[test]
    fn test_strips_byte_order_mark() {
        let out = LineReindentTransformer.transform("\u{feff}let a;\n\u{feff}  let b;", 2).unwrap();
        assert_eq!(out, "let a;\n  let b;");
    }

    #[test]
    fn test_zero_indent_left_aligns() {
        let out = LineReindentTransformer.transform("a\n\t b\n  c", 0).unwrap();
        assert_eq!(out, "a\nb\nc");
    }
}
