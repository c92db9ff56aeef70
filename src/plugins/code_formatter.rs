//! The code-formatter skill

use std::collections::HashMap;
use crate::application::errors::PluginError;
use crate::application::services::FormatService;
use crate::infrastructure::config::FormatterConfig;
use crate::plugins::schema;
use crate::plugins::trait_def::Plugin;

pub const PLUGIN_NAME: &str = "code-formatter";
pub const PLUGIN_DESCRIPTION: &str = "Format and beautify code snippets in various languages";

/// Formats code snippets: JSON re-serialization and line re-indentation
pub struct CodeFormatterPlugin {
    service: FormatService,
}

impl CodeFormatterPlugin {
    pub fn new(config: FormatterConfig) -> Self {
        Self {
            service: FormatService::new(config),
        }
    }

    pub fn service(&self) -> &FormatService {
        &self.service
    }
}

impl Default for CodeFormatterPlugin {
    fn default() -> Self {
        Self::new(FormatterConfig::default())
    }
}

impl Plugin for CodeFormatterPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }
    
    fn description(&self) -> &str {
        PLUGIN_DESCRIPTION
    }

    fn input_schema(&self) -> serde_json::Value {
        schema::input_schema(self.service.config())
    }

    fn output_schema(&self) -> serde_json::Value {
        schema::output_schema()
    }
    
    fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, PluginError> {
        let result = self.service.format_value(&args)?;
        serde_json::to_value(&result).map_err(|e| PluginError::Serialization(e.to_string()))
    }

    fn metadata(&self) -> HashMap<String, String> {
        let languages = crate::domain::entities::Language::names().join(",");
        HashMap::from([
            ("author".to_string(), "code-formatter contributors".to_string()),
            ("languages".to_string(), languages),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_execute_returns_result_object() {
        let plugin = CodeFormatterPlugin::default();
        let out = plugin
            .execute(json!({"code": "  {\"a\":1}", "language": "json", "indentSize": 2}))
            .unwrap();
        assert_eq!(
            out,
            json!({
                "formatted": "{\n  \"a\": 1\n}",
                "language": "json",
                "lineCount": 3,
                "message": "Successfully formatted json code"
            })
        );
    }

    #[test]
    fn test_execute_surfaces_kind() {
        let plugin = CodeFormatterPlugin::default();
        let err = plugin.execute(json!({"code": "{bad json", "language": "json"})).unwrap_err();
        assert_eq!(err.kind(), "InvalidSyntax");
        assert_eq!(err.to_string(), "Invalid JSON syntax");

        let err = plugin.execute(json!({"code": "x", "language": "ruby"})).unwrap_err();
        assert_eq!(err.kind(), "ValidationError");
    }

    #[test]
    fn test_schema_follows_config() {
        let plugin = CodeFormatterPlugin::new(FormatterConfig {
            default_indent_size: 4,
            max_indent_size: 8,
        });
        let schema = plugin.input_schema();
        assert_eq!(schema["properties"]["indentSize"]["default"], 4);
        assert_eq!(schema["properties"]["indentSize"]["maximum"], 8);
    }
}
