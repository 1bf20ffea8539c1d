// User-friendly error messages
//
// Turns startup failures (config file, reference data, bind address) into
// actionable messages for whoever is deploying the service.

use std::fmt;

use crate::crisis::ConfigError;

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(error: &str) -> String {
    format!(
        "Failed to parse config file\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat ~/.crisis-support/config.toml\x1b[0m\n\n\
        2. Known keys are:\n\
           • data_path, log_file\n\
           • [server] bind_address, max_message_chars\n\n\
        3. Common mistakes:\n\
           • Missing quotes around strings\n\
           • Keys placed under the wrong [section]",
        error
    )
}

/// Format a file not found error with helpful suggestions
pub fn file_not_found_error(path: &str, description: &str) -> String {
    format!(
        "{} not found: {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • File has been deleted\n\
        • Wrong path specified\n\
        • Permissions issue\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check if file exists:\n\
           \x1b[36mls -la {}\x1b[0m\n\n\
        2. Omit --config to use ~/.crisis-support/config.toml or built-in defaults",
        description, path, path
    )
}

/// Format a reference data integrity failure.
///
/// These come from hand-edited data files; the service refuses to start.
pub fn reference_data_error(source: &str, error: &ConfigError) -> String {
    format!(
        "Reference data from {} is inconsistent\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Every category needs a response template:\n\
           high_risk, mental_distress, disaster, medical, violence, general\n\n\
        2. Every helpline listed in a template must exist under \"helplines\"\n\n\
        3. Validate the file without starting the server:\n\
           \x1b[36mcrisis-support check\x1b[0m",
        source, error
    )
}

/// Format an address-in-use / bind failure
pub fn bind_error(address: &str, error: impl fmt::Display) -> String {
    format!(
        "Could not listen on {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Pick another address:\n\
           \x1b[36mcrisis-support serve --bind 127.0.0.1:5001\x1b[0m\n\n\
        2. Or set it in the environment:\n\
           \x1b[36mexport CRISIS_SUPPORT_BIND=127.0.0.1:5001\x1b[0m",
        address, error
    )
}

/// Wrap a generic error with suggestions
pub fn wrap_error_with_suggestion(error: impl fmt::Display, suggestion: &str) -> String {
    format!(
        "{}\n\n\
        \x1b[1;33mSuggestion:\x1b[0m {}",
        error, suggestion
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crisis::Category;

    #[test]
    fn test_reference_data_error_names_defect() {
        let msg = reference_data_error(
            "data.json",
            &ConfigError::MissingTemplate(Category::Medical),
        );
        assert!(msg.contains("data.json"));
        assert!(msg.contains("no response template for category 'medical'"));
        assert!(msg.contains("crisis-support check"));
    }

    #[test]
    fn test_bind_error_suggests_env_var() {
        let msg = bind_error("127.0.0.1:5000", "address in use");
        assert!(msg.contains("CRISIS_SUPPORT_BIND"));
    }

    #[test]
    fn test_wrap_error_with_suggestion() {
        let msg = wrap_error_with_suggestion("boom", "try again");
        assert!(msg.starts_with("boom"));
        assert!(msg.contains("try again"));
    }
}
