// Configuration structs

use serde::Deserialize;
use std::path::PathBuf;

/// Default bind address for the HTTP daemon
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Default cap on `message` length, in characters
pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 5000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1:5000")
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Longest accepted message for POST /analyze
    #[serde(default = "default_max_message_chars")]
    pub max_message_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            max_message_chars: default_max_message_chars(),
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

fn default_max_message_chars() -> usize {
    DEFAULT_MAX_MESSAGE_CHARS
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    /// JSON file replacing the built-in reference data
    #[serde(default)]
    pub data_path: Option<PathBuf>,

    /// Append logs here instead of stderr
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}
