//! Request validation - turns an untyped host request into a `FormatRequest`

use serde_json::Value;
use crate::application::errors::FormatError;
use crate::domain::entities::{FormatRequest, Language};
use crate::infrastructure::config::FormatterConfig;

/// Validate a raw request object against the declared input schema.
///
/// Unknown fields are ignored. `indentSize` falls back to the configured
/// default when absent or null, and must be a whole number between zero and
/// `max_indent_size`.
pub fn validate_request(input: &Value, config: &FormatterConfig) -> Result<FormatRequest, FormatError> {
    let obj = input
        .as_object()
        .ok_or_else(|| FormatError::Validation("request must be an object".to_string()))?;

    let code = match obj.get("code") {
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            return Err(FormatError::Validation(format!(
                "'code' must be a string, got {}",
                type_name(other)
            )))
        }
        None => return Err(FormatError::Validation("missing required field 'code'".to_string())),
    };

    let language = match obj.get("language") {
        Some(Value::String(s)) => s
            .parse::<Language>()
            .map_err(|e| FormatError::Validation(e.to_string()))?,
        Some(other) => {
            return Err(FormatError::Validation(format!(
                "'language' must be a string, got {}",
                type_name(other)
            )))
        }
        None => return Err(FormatError::Validation("missing required field 'language'".to_string())),
    };

    let indent_size = match obj.get("indentSize") {
        None | Some(Value::Null) => config.default_indent_size,
        Some(value) => parse_indent_size(value)?,
    };
    check_indent_size(indent_size, config)?;

    Ok(FormatRequest::new(code, language).with_indent_size(indent_size))
}

/// Reject indent widths above the configured bound
pub fn check_indent_size(indent_size: usize, config: &FormatterConfig) -> Result<(), FormatError> {
    if indent_size > config.max_indent_size {
        return Err(FormatError::Validation(format!(
            "'indentSize' must be at most {}, got {}",
            config.max_indent_size, indent_size
        )));
    }
    Ok(())
}

fn parse_indent_size(value: &Value) -> Result<usize, FormatError> {
    let Value::Number(n) = value else {
        return Err(FormatError::Validation(format!(
            "'indentSize' must be an integer, got {}",
            type_name(value)
        )));
    };

    if let Some(u) = n.as_u64() {
        return usize::try_from(u)
            .map_err(|_| FormatError::Validation(format!("'indentSize' is out of range: {}", u)));
    }
    if let Some(i) = n.as_i64() {
        return Err(FormatError::Validation(format!(
            "'indentSize' must not be negative, got {}",
            i
        )));
    }

    // Floats are accepted only when they hold a whole, non-negative value (4.0)
    let f = n.as_f64().unwrap_or(f64::NAN);
    if f.fract() != 0.0 || !f.is_finite() {
        return Err(FormatError::Validation(format!(
            "'indentSize' must be an integer, got {}",
            n
        )));
    }
    if f < 0.0 {
        return Err(FormatError::Validation(format!(
            "'indentSize' must not be negative, got {}",
            n
        )));
    }
    if f > usize::MAX as f64 {
        return Err(FormatError::Validation(format!("'indentSize' is out of range: {}", n)));
    }
    Ok(f as usize)
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
