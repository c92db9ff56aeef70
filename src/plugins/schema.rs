//! Declared input and output shape of the code-formatter skill

use serde_json::{json, Value};
use crate::domain::entities::Language;
use crate::infrastructure::config::FormatterConfig;

/// JSON Schema for a format request
pub fn input_schema(config: &FormatterConfig) -> Value {
    json!({
        "type": "object",
        "properties": {
            "code": {
                "type": "string",
                "description": "The code to format"
            },
            "language": {
                "type": "string",
                "enum": Language::names(),
                "description": "Programming language of the code"
            },
            "indentSize": {
                "type": "integer",
                "minimum": 0,
                "maximum": config.max_indent_size,
                "default": config.default_indent_size,
                "description": "Number of spaces for indentation"
            }
        },
        "required": ["code", "language"]
    })
}

/// JSON Schema for a format result
pub fn output_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "formatted": {
                "type": "string",
                "description": "The formatted code"
            },
            "language": {
                "type": "string",
                "enum": Language::names(),
                "description": "Language of the formatted code"
            },
            "lineCount": {
                "type": "integer",
                "minimum": 1,
                "description": "Number of lines in the formatted code"
            },
            "message": {
                "type": "string",
                "description": "Status message"
            }
        },
        "required": ["formatted", "language", "lineCount", "message"]
    })
}
