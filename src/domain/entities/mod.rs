//! Domain entities - Core formatting objects with no external dependencies

pub mod language;
pub mod request;
pub mod result;

pub use language::{Language, UnsupportedLanguage};
pub use request::{FormatRequest, DEFAULT_INDENT_SIZE};
pub use result::FormatResult;
