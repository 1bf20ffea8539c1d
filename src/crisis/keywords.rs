// Keyword taxonomy: trigger phrases per crisis category

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use super::category::Category;
use super::error::ConfigError;

const HIGH_RISK: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "can't go on",
    "no reason to live",
    "better off dead",
    "harm myself",
];

const MENTAL_DISTRESS: &[&str] = &[
    "depressed",
    "hopeless",
    "anxious",
    "panic",
    "scared",
    "worthless",
    "alone",
    "overwhelmed",
    "can't cope",
];

const DISASTER: &[&str] = &[
    "flood",
    "earthquake",
    "cyclone",
    "fire",
    "evacuation",
    "trapped",
    "emergency shelter",
    "rescue",
];

const MEDICAL: &[&str] = &[
    "chest pain",
    "breathing difficulty",
    "bleeding",
    "unconscious",
    "poisoning",
    "allergic reaction",
    "seizure",
];

const VIOLENCE: &[&str] = &[
    "abuse",
    "domestic violence",
    "assault",
    "threatened",
    "unsafe",
];

/// Immutable mapping from category to its ordered trigger phrases.
///
/// Phrases are stored lower-cased so matching only has to fold the input.
/// The same phrase may appear under several categories.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "BTreeMap<Category, Vec<String>>")]
pub struct KeywordTaxonomy {
    sets: BTreeMap<Category, Vec<String>>,
}

impl KeywordTaxonomy {
    pub fn new<I>(sets: I) -> Self
    where
        I: IntoIterator<Item = (Category, Vec<String>)>,
    {
        let sets = sets
            .into_iter()
            .map(|(category, phrases)| {
                let phrases = phrases.into_iter().map(|p| p.to_lowercase()).collect();
                (category, phrases)
            })
            .collect();

        Self { sets }
    }

    /// The taxonomy shipped with the service
    pub fn builtin() -> Self {
        let table: [(Category, &[&str]); 5] = [
            (Category::HighRisk, HIGH_RISK),
            (Category::MentalDistress, MENTAL_DISTRESS),
            (Category::Disaster, DISASTER),
            (Category::Medical, MEDICAL),
            (Category::Violence, VIOLENCE),
        ];

        Self::new(table.into_iter().map(|(category, phrases)| {
            (category, phrases.iter().map(|p| p.to_string()).collect())
        }))
    }

    /// Phrases for a category (empty for General)
    pub fn phrases(&self, category: Category) -> &[String] {
        self.sets.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of phrases across categories
    pub fn len(&self) -> usize {
        self.sets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check every scored category has at least one non-blank phrase
    /// and that General carries none.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.phrases(Category::General).is_empty() {
            return Err(ConfigError::GeneralHasKeywords);
        }

        for category in Category::PRIORITY {
            let phrases = self.phrases(category);
            if phrases.is_empty() {
                return Err(ConfigError::EmptyKeywordSet(category));
            }
            if phrases.iter().any(|p| p.trim().is_empty()) {
                return Err(ConfigError::EmptyPhrase(category));
            }
        }

        Ok(())
    }
}

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

impl From<BTreeMap<Category, Vec<String>>> for KeywordTaxonomy {
    fn from(sets: BTreeMap<Category, Vec<String>>) -> Self {
        Self::new(sets)
    }
}

impl Serialize for KeywordTaxonomy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sets.serialize(serializer)
    }
}
