//! Runtime configuration

use serde::Deserialize;

/// Runtime configuration (logging)
#[derive(Debug, Clone, Deserialize)]
pub struct RuntimeConfig {
    /// Log filter directive, standard `EnvFilter` syntax
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit logs as JSON instead of human-readable text
    #[serde(default)]
    pub log_json: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

fn default_log_level() -> String {
    "info,petition_builder=debug".to_string()
}
