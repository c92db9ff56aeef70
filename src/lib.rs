//! code-formatter - an example skill plugin for an agent host
//!
//! The plugin accepts `{code, language, indentSize?}`, re-serializes JSON or
//! re-indents source lines, and returns `{formatted, language, lineCount, message}`.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod plugins;

pub use application::errors::{ConfigError, ErrorKind, FormatError, PluginError};
pub use application::services::FormatService;
pub use application::validation::validate_request;
pub use domain::entities::{FormatRequest, FormatResult, Language};
pub use infrastructure::config::{Config, FormatterConfig};
pub use plugins::{CodeFormatterPlugin, Plugin, PluginManager};
