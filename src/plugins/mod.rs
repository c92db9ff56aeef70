//! Plugin system for the code formatter
//! 
//! Provides the `Plugin` extension point, the code-formatter skill that
//! implements it, and an in-process manager that plays the host's role.

pub mod code_formatter;
pub mod manager;
pub mod manifest;
pub mod schema;
pub mod trait_def;

pub use code_formatter::CodeFormatterPlugin;
pub use manager::{PluginManager, PluginInfo, SharedPluginManager, create_plugin_manager};
pub use manifest::PluginManifest;
pub use trait_def::{Plugin, PluginFailure, PluginResult};
