//! Plugin trait definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::application::errors::PluginError;

/// Core plugin trait that all plugins must implement
pub trait Plugin: Send + Sync {
    /// Unique identifier for the plugin
    fn name(&self) -> &str;
    
    /// Human-readable description
    fn description(&self) -> &str;

    /// Plugin version
    fn version(&self) -> &str {
        env!("CARGO_PKG_VERSION")
    }

    /// JSON Schema of the accepted request object
    fn input_schema(&self) -> serde_json::Value;

    /// JSON Schema of the returned result object
    fn output_schema(&self) -> serde_json::Value {
        serde_json::json!({ "type": "object" })
    }
    
    /// Execute the plugin with given arguments
    fn execute(&self, args: serde_json::Value) -> Result<serde_json::Value, PluginError>;
    
    /// Optional: Cleanup resources when plugin is unloaded
    fn cleanup(&self) {}
    
    /// Optional: Get plugin metadata
    fn metadata(&self) -> HashMap<String, String> {
        HashMap::new()
    }
}

/// Plugin execution result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluginResult {
    pub success: bool,
    pub output: Option<serde_json::Value>,
    pub error: Option<PluginFailure>,
}

/// Error reported back to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginFailure {
    pub kind: String,
    pub message: String,
}

impl PluginResult {
    pub fn success(output: serde_json::Value) -> Self {
        Self {
            success: true,
            output: Some(output),
            error: None,
        }
    }
    
    pub fn error(err: &PluginError) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(PluginFailure {
                kind: err.kind().to_string(),
                message: err.to_string(),
            }),
        }
    }
}
