// Error types for the classification core

use thiserror::Error;

use super::category::Category;

/// Defect in the static reference tables.
///
/// These are authoring bugs, caught when the tables are loaded. A validated
/// `CrisisAnalyzer` never produces one at request time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no response template for category '{0}'")]
    MissingTemplate(Category),

    #[error("template for '{category}' references unknown helpline '{helpline}'")]
    UnknownHelpline { category: Category, helpline: String },

    #[error("keyword set for '{0}' contains an empty phrase")]
    EmptyPhrase(Category),

    #[error("keyword set for '{0}' is empty")]
    EmptyKeywordSet(Category),

    #[error("'general' must not carry keyword phrases")]
    GeneralHasKeywords,

    #[error("helpline directory contains an empty identifier")]
    EmptyHelplineId,
}

/// Caller-facing validation failure for an analysis request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("request body is not valid JSON: {0}")]
    MalformedBody(String),

    #[error("missing required field 'message'")]
    MissingMessage,

    #[error("field 'message' must be a string")]
    InvalidMessageType,

    #[error("message is {len} characters long, limit is {max}")]
    MessageTooLong { len: usize, max: usize },
}
