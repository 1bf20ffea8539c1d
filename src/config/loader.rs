// Configuration loader
// Loads settings from an explicit path, ~/.crisis-support/config.toml, or defaults

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;

/// Environment variable overriding `server.bind_address`
pub const BIND_ENV_VAR: &str = "CRISIS_SUPPORT_BIND";

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the user config file is used
/// when present and defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let mut config = match path {
        Some(path) => {
            if !path.exists() {
                bail!(crate::errors::file_not_found_error(
                    &path.display().to_string(),
                    "Config file"
                ));
            }
            load_from_file(path)?
        }
        None => match default_config_path() {
            Some(path) if path.exists() => load_from_file(&path)?,
            _ => Config::default(),
        },
    };

    if let Ok(bind) = std::env::var(BIND_ENV_VAR) {
        if !bind.is_empty() {
            config.server.bind_address = bind;
        }
    }

    Ok(config)
}

/// ~/.crisis-support/config.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".crisis-support").join("config.toml"))
}

fn load_from_file(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    parse_config(&contents).with_context(|| format!("Failed to load {}", path.display()))
}

fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents)
        .map_err(|e| anyhow::anyhow!(crate::errors::config_parse_error(&e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::{DEFAULT_BIND_ADDRESS, DEFAULT_MAX_MESSAGE_CHARS};
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(config.server.max_message_chars, DEFAULT_MAX_MESSAGE_CHARS);
        assert!(config.data_path.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            data_path = "/etc/crisis-support/reference.json"

            [server]
            max_message_chars = 200
            "#,
        )
        .unwrap();

        assert_eq!(config.server.max_message_chars, 200);
        assert_eq!(config.server.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(
            config.data_path,
            Some(PathBuf::from("/etc/crisis-support/reference.json"))
        );
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = parse_config("api_key = \"secret\"").unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nbind_address = \"0.0.0.0:8080\"").unwrap();

        let config = load_from_file(file.path()).unwrap();
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        let result = load_config(Some(Path::new("/nonexistent/crisis-support.toml")));
        assert!(result.is_err());
    }
}
