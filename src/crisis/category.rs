// Crisis categories

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification assigned to an incoming message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Suicidal ideation or self-harm
    HighRisk,
    /// Anxiety, hopelessness, panic
    MentalDistress,
    /// Natural disasters, fire, people trapped
    Disaster,
    /// Physical medical emergencies
    Medical,
    /// Abuse, assault, threats
    Violence,
    /// No crisis phrase matched
    General,
}

impl Category {
    /// Every category, General included
    pub const ALL: [Category; 6] = [
        Category::HighRisk,
        Category::MentalDistress,
        Category::Disaster,
        Category::Medical,
        Category::Violence,
        Category::General,
    ];

    /// Categories that carry keyword phrases, in tie-break priority order.
    ///
    /// When two categories share the top score, the one listed first wins.
    /// This order is independent of how the taxonomy is stored.
    pub const PRIORITY: [Category; 5] = [
        Category::HighRisk,
        Category::MentalDistress,
        Category::Disaster,
        Category::Medical,
        Category::Violence,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::HighRisk => "high_risk",
            Category::MentalDistress => "mental_distress",
            Category::Disaster => "disaster",
            Category::Medical => "medical",
            Category::Violence => "violence",
            Category::General => "general",
        }
    }

    /// Whether this category is scored by keyword matching
    pub fn is_scored(&self) -> bool {
        !matches!(self, Category::General)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
