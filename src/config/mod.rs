// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{default_config_path, load_config, BIND_ENV_VAR};
pub use settings::{Config, ServerConfig, DEFAULT_BIND_ADDRESS, DEFAULT_MAX_MESSAGE_CHARS};
