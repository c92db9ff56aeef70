//! Plugin manifest definition

use serde::{Deserialize, Serialize};
use super::trait_def::Plugin;

/// Plugin metadata published to a host
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct PluginManifest {
    /// Plugin name (required)
    pub name: String,
    
    /// Plugin version (required)
    pub version: String,
    
    /// Plugin description
    pub description: Option<String>,
    
    /// Plugin author
    pub author: Option<String>,

    /// Accepted request shape
    pub input_schema: serde_json::Value,

    /// Returned result shape
    pub output_schema: serde_json::Value,
}

impl PluginManifest {
    /// Describe a plugin instance
    pub fn from_plugin(plugin: &dyn Plugin) -> Self {
        let metadata = plugin.metadata();
        Self {
            name: plugin.name().to_string(),
            version: plugin.version().to_string(),
            description: Some(plugin.description().to_string()),
            author: metadata.get("author").cloned(),
            input_schema: plugin.input_schema(),
            output_schema: plugin.output_schema(),
        }
    }

    pub fn to_yaml(&self) -> Result<String, crate::application::errors::PluginError> {
        // Schemas go through serde_yaml's own Value so numbers render as plain scalars
        let doc = YamlManifest {
            name: &self.name,
            version: &self.version,
            description: self.description.as_deref(),
            author: self.author.as_deref(),
            input_schema: to_yaml_value(&self.input_schema),
            output_schema: to_yaml_value(&self.output_schema),
        };
        serde_yaml::to_string(&doc)
            .map_err(|e| crate::application::errors::PluginError::Serialization(format!("Failed to write manifest: {}", e)))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct YamlManifest<'a> {
    name: &'a str,
    version: &'a str,
    description: Option<&'a str>,
    author: Option<&'a str>,
    input_schema: serde_yaml::Value,
    output_schema: serde_yaml::Value,
}

fn to_yaml_value(value: &serde_json::Value) -> serde_yaml::Value {
    use serde_json::Value as Json;
    use serde_yaml::Value as Yaml;

    match value {
        Json::Null => Yaml::Null,
        Json::Bool(b) => Yaml::Bool(*b),
        Json::Number(n) => {
            if let Some(u) = n.as_u64() {
                Yaml::from(u)
            } else if let Some(i) = n.as_i64() {
                Yaml::from(i)
            } else {
                n.as_f64().map(Yaml::from).unwrap_or(Yaml::Null)
            }
        }
        Json::String(s) => Yaml::String(s.clone()),
        Json::Array(items) => Yaml::Sequence(items.iter().map(to_yaml_value).collect()),
        Json::Object(map) => Yaml::Mapping(
            map.iter()
                .map(|(k, v)| (Yaml::String(k.clone()), to_yaml_value(v)))
                .collect(),
        ),
    }
}
