use serde_json::Value;
use crate::application::errors::FormatError;
use crate::application::validation::{check_indent_size, validate_request};
use crate::domain::entities::{FormatRequest, FormatResult, Language};
use crate::domain::traits::Transformer;
use crate::infrastructure::config::FormatterConfig;
use super::json_transformer::JsonTransformer;
use super::reindent_transformer::LineReindentTransformer;

/// Service running the format operation: validate, transform, build the result
#[derive(Debug, Clone, Default)]
pub struct FormatService {
    config: FormatterConfig,
}

impl FormatService {
    pub fn new(config: FormatterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FormatterConfig {
        &self.config
    }

    /// Pick the transform for a language
    pub fn transformer_for(language: Language) -> &'static dyn Transformer {
        match language {
            Language::Json => &JsonTransformer,
            Language::Javascript | Language::Typescript | Language::Python => &LineReindentTransformer,
        }
    }

    /// Format an already typed request
    pub fn format(&self, request: &FormatRequest) -> Result<FormatResult, FormatError> {
        check_indent_size(request.indent_size, &self.config)?;

        let formatted = Self::transformer_for(request.language)
            .transform(&request.code, request.indent_size)?;
        let result = FormatResult::new(formatted, request.language);

        tracing::debug!(
            language = %request.language,
            indent_size = request.indent_size,
            line_count = result.line_count,
            "Formatted snippet"
        );
        Ok(result)
    }

    /// Validate a raw request object, then format it
    pub fn format_value(&self, input: &Value) -> Result<FormatResult, FormatError> {
        let request = validate_request(input, &self.config)?;
        self.format(&request)
    }
}
