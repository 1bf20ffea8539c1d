// Helpline directory

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::error::ConfigError;

/// Contact record for a support hotline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelplineRecord {
    pub name: String,
    /// Literal contact string, may hold several numbers ("1078 / 1070")
    pub number: String,
    /// Availability window, free text
    pub available: String,
    pub languages: String,
}

impl HelplineRecord {
    pub fn new(name: &str, number: &str, available: &str, languages: &str) -> Self {
        Self {
            name: name.to_string(),
            number: number.to_string(),
            available: available.to_string(),
            languages: languages.to_string(),
        }
    }
}

/// Immutable mapping from helpline identifier to record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HelplineDirectory {
    entries: BTreeMap<String, HelplineRecord>,
}

impl HelplineDirectory {
    pub fn new<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, HelplineRecord)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Helplines shipped with the service (India)
    pub fn builtin() -> Self {
        Self::new([
            (
                "mental_health".to_string(),
                HelplineRecord::new(
                    "KIRAN Mental Health Helpline",
                    "1800-599-0019",
                    "24/7",
                    "Hindi, English, and 13 regional languages",
                ),
            ),
            (
                "suicide_prevention".to_string(),
                HelplineRecord::new(
                    "iCall Suicide Prevention",
                    "9152987821",
                    "Mon-Sat 8AM-10PM",
                    "Hindi, English, Marathi",
                ),
            ),
            (
                "disaster".to_string(),
                HelplineRecord::new(
                    "National Disaster Helpline",
                    "1078 / 1070",
                    "24/7",
                    "All Indian languages",
                ),
            ),
            (
                "medical".to_string(),
                HelplineRecord::new("Medical Emergency", "108", "24/7", "Regional languages"),
            ),
            (
                "police".to_string(),
                HelplineRecord::new("Police Emergency", "100", "24/7", "Regional languages"),
            ),
            (
                "women_helpline".to_string(),
                HelplineRecord::new("Women Helpline", "1091 / 181", "24/7", "Regional languages"),
            ),
        ])
    }

    pub fn get(&self, id: &str) -> Option<&HelplineRecord> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &HelplineRecord)> {
        self.entries.iter().map(|(id, record)| (id.as_str(), record))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.entries.keys().any(|id| id.trim().is_empty()) {
            return Err(ConfigError::EmptyHelplineId);
        }
        Ok(())
    }
}

impl Default for HelplineDirectory {
    fn default() -> Self {
        Self::builtin()
    }
}
