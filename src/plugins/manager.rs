//! Plugin manager - handles plugin lifecycle and execution

use crate::application::errors::PluginError;
use crate::infrastructure::config::PluginsConfig;
use crate::plugins::trait_def::{Plugin, PluginResult};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tracing::{info, warn, error};

/// Manages the plugins available to a host
pub struct PluginManager {
    plugins: HashMap<String, Arc<dyn Plugin>>,
    config: PluginsConfig,
}

impl PluginManager {
    /// Create a new plugin manager with config
    pub fn new(config: PluginsConfig) -> Self {
        Self {
            plugins: HashMap::new(),
            config,
        }
    }
    
    /// Register a plugin
    pub fn register<P: Plugin + 'static>(&mut self, plugin: P) -> Result<(), PluginError> {
        let name = plugin.name().to_string();
        
        if self.plugins.contains_key(&name) {
            return Err(PluginError::AlreadyRegistered(name));
        }
        
        info!("Registering plugin: {} v{}", name, plugin.version());
        self.plugins.insert(name, Arc::new(plugin));
        Ok(())
    }
    
    /// Unregister a plugin
    pub fn unregister(&mut self, name: &str) -> Result<(), PluginError> {
        if let Some(plugin) = self.plugins.remove(name) {
            plugin.cleanup();
            info!("Unregistered plugin: {}", name);
            Ok(())
        } else {
            Err(PluginError::NotFound(name.to_string()))
        }
    }

    /// Get a plugin by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Plugin>> {
        self.plugins.get(name).cloned()
    }

    /// Invoke a plugin, propagating its error
    pub fn invoke(&self, name: &str, args: serde_json::Value) -> Result<serde_json::Value, PluginError> {
        if !self.config.enabled {
            return Err(PluginError::Internal("Plugin system disabled".to_string()));
        }

        let plugin = self.plugins.get(name).ok_or_else(|| {
            warn!("Plugin '{}' not found", name);
            PluginError::NotFound(name.to_string())
        })?;

        let invocation = uuid::Uuid::new_v4();
        let span = tracing::info_span!("plugin", name = %name, %invocation);
        let _enter = span.enter();

        plugin.execute(args).map_err(|e| {
            error!("Plugin '{}' error: {}", name, e);
            e
        })
    }
    
    /// Execute a plugin by name
    pub fn execute(&self, name: &str, args: serde_json::Value) -> PluginResult {
        match self.invoke(name, args) {
            Ok(output) => PluginResult::success(output),
            Err(e) => PluginResult::error(&e),
        }
    }
    
    /// List all registered plugins
    pub fn list_plugins(&self) -> Vec<PluginInfo> {
        let mut list: Vec<PluginInfo> = self.plugins.iter().map(|(name, plugin)| {
            PluginInfo {
                name: name.clone(),
                version: plugin.version().to_string(),
                description: plugin.description().to_string(),
                metadata: plugin.metadata(),
            }
        }).collect();
        list.sort_by(|a, b| a.name.cmp(&b.name));
        list
    }

    /// Input schema of a registered plugin
    pub fn schema(&self, name: &str) -> Option<serde_json::Value> {
        self.plugins.get(name).map(|p| p.input_schema())
    }
    
    /// Check if a plugin exists
    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.contains_key(name)
    }
    
    /// Get config
    pub fn config(&self) -> &PluginsConfig {
        &self.config
    }
}

/// Plugin information for listing
#[derive(Debug, Clone, serde::Serialize)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub metadata: std::collections::HashMap<String, String>,
}

/// Thread-safe wrapper for PluginManager
pub type SharedPluginManager = Arc<RwLock<PluginManager>>;

/// Create a new shared plugin manager
pub fn create_plugin_manager(config: PluginsConfig) -> SharedPluginManager {
    Arc::new(RwLock::new(PluginManager::new(config)))
}
