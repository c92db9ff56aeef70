//! JSON re-serialization with a fixed indent width

use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use crate::application::errors::FormatError;
use crate::domain::traits::Transformer;
use super::trim_code;

/// Deepest array/object nesting accepted; parsing and printing recurse per level
pub const MAX_JSON_DEPTH: usize = 256;

/// Parses the snippet and writes it back out with `indent_size` spaces per level.
/// Object keys keep their input order and numbers keep their input text.
pub struct JsonTransformer;

impl Transformer for JsonTransformer {
    fn transform(&self, code: &str, indent_size: usize) -> Result<String, FormatError> {
        let value = parse(trim_code(code))?;

        // Zero width means compact output, not newlines without indentation
        if indent_size == 0 {
            return serde_json::to_string(&value).map_err(|_| FormatError::InvalidSyntax);
        }

        let indent = " ".repeat(indent_size);
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
        // A parsed Value always serializes back into memory
        value.serialize(&mut ser).map_err(|_| FormatError::InvalidSyntax)?;
        String::from_utf8(buf).map_err(|_| FormatError::InvalidSyntax)
    }
}

fn parse(text: &str) -> Result<Value, FormatError> {
    let depth = nesting_depth(text);
    if depth > MAX_JSON_DEPTH {
        return Err(FormatError::Validation(format!(
            "JSON nesting depth {} exceeds the limit of {}",
            depth, MAX_JSON_DEPTH
        )));
    }

    let invalid = |e: serde_json::Error| {
        tracing::debug!("JSON parse failed: {}", e);
        FormatError::InvalidSyntax
    };

    // Depth is bounded above, so serde_json's own 128-level guard is lifted
    let mut de = serde_json::Deserializer::from_str(text);
    de.disable_recursion_limit();
    let value = Value::deserialize(&mut de).map_err(invalid)?;
    de.end().map_err(invalid)?;
    Ok(value)
}

/// Deepest bracket nesting outside string literals
fn nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut max = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for b in text.bytes() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'[' | b'{' => {
                depth += 1;
                max = max.max(depth);
            }
            b']' | b'}' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::errors::ErrorKind;

    fn nested(levels: usize) -> String {
        format!("{}{}", "[".repeat(levels), "]".repeat(levels))
    }

    #[test]
    fn test_reindents_object() {
        let out = JsonTransformer.transform("  {\"a\":1}", 2).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_keeps_key_order() {
        let out = JsonTransformer.transform(r#"{"z":1,"a":[true,null]}"#, 4).unwrap();
        assert_eq!(out, "{\n    \"z\": 1,\n    \"a\": [\n        true,\n        null\n    ]\n}");
    }

    #[test]
    fn test_zero_indent_is_compact() {
        let out = JsonTransformer.transform("{ \"a\" : [1, 2] }", 0).unwrap();
        assert_eq!(out, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_wide_indent_is_applied_literally() {
        let out = JsonTransformer.transform("[1]", 12).unwrap();
        assert_eq!(out, format!("[\n{}1\n]", " ".repeat(12)));
    }

    #[test]
    fn test_empty_containers_and_scalars() {
        assert_eq!(JsonTransformer.transform("{}", 2).unwrap(), "{}");
        assert_eq!(JsonTransformer.transform("[]", 2).unwrap(), "[]");
        assert_eq!(JsonTransformer.transform(" \"hi\" ", 2).unwrap(), "\"hi\"");
        assert_eq!(JsonTransformer.transform("42", 2).unwrap(), "42");
    }

    #[test]
    fn test_number_text_is_preserved() {
        assert_eq!(JsonTransformer.transform("[1e400]", 0).unwrap(), "[1e400]");
        assert_eq!(
            JsonTransformer.transform("123456789012345678901234567890", 2).unwrap(),
            "123456789012345678901234567890"
        );
        assert_eq!(JsonTransformer.transform("[1e2, 1.0, -0]", 0).unwrap(), "[1e2,1.0,-0]");
    }

    #[test]
    fn test_deep_nesting_within_limit() {
        let out = JsonTransformer.transform(&nested(200), 0).unwrap();
        assert_eq!(out, nested(200));

        let out = JsonTransformer.transform(&nested(MAX_JSON_DEPTH), 1).unwrap();
        assert_eq!(out.split('\n').count(), 2 * MAX_JSON_DEPTH - 1);
    }

    #[test]
    fn test_nesting_beyond_limit_is_rejected() {
        let err = JsonTransformer.transform(&nested(MAX_JSON_DEPTH + 1), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationError);
    }

    #[test]
    fn test_brackets_in_strings_do_not_count() {
        let code = format!("[\"{}\", \"\\\"[\"]", "[".repeat(MAX_JSON_DEPTH + 10));
        assert!(JsonTransformer.transform(&code, 2).is_ok());
        assert_eq!(nesting_depth(&code), 1);
    }

    #[test]
    fn test_leading_byte_order_mark() {
        let out = JsonTransformer.transform("\u{feff}{\"a\":1}", 2).unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}");
    }

    #[test]
    fn test_invalid_json() {
        assert_eq!(JsonTransformer.transform("{bad json", 2), Err(FormatError::InvalidSyntax));
        assert_eq!(JsonTransformer.transform("{ invalid", 2), Err(FormatError::InvalidSyntax));
        assert_eq!(JsonTransformer.transform("   ", 2), Err(FormatError::InvalidSyntax));
        assert_eq!(JsonTransformer.transform("{} {}", 2), Err(FormatError::InvalidSyntax));
    }
}
