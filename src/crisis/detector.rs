// Crisis keyword detector

use serde::Serialize;
use std::collections::BTreeMap;

use super::category::Category;
use super::keywords::KeywordTaxonomy;

/// Outcome of scoring a message against the taxonomy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    /// Selected category
    pub category: Category,
    /// Distinct matching phrases per scored category
    pub scores: BTreeMap<Category, usize>,
    /// Phrases that matched, grouped by category
    pub matched: BTreeMap<Category, Vec<String>>,
}

impl Classification {
    /// Score of the selected category (0 for General)
    pub fn top_score(&self) -> usize {
        self.scores.get(&self.category).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone)]
pub struct CrisisDetector {
    keywords: KeywordTaxonomy,
}

impl CrisisDetector {
    pub fn new(keywords: KeywordTaxonomy) -> Self {
        Self { keywords }
    }

    /// Classify a message into a single category
    pub fn classify(&self, text: &str) -> Category {
        self.score(text).category
    }

    /// Returns true if any crisis category is detected
    pub fn is_crisis(&self, text: &str) -> bool {
        self.classify(text) != Category::General
    }

    /// Score every category and pick the winner.
    ///
    /// Each phrase contributes at most 1 to its category no matter how often
    /// it occurs. Matching is plain substring search on the lower-cased text.
    /// Ties go to the earlier entry of `Category::PRIORITY`.
    pub fn score(&self, text: &str) -> Classification {
        let text_lower = text.to_lowercase();

        let mut scores = BTreeMap::new();
        let mut matched = BTreeMap::new();
        let mut best = Category::General;
        let mut best_score = 0;

        for category in Category::PRIORITY {
            let hits: Vec<String> = self
                .keywords
                .phrases(category)
                .iter()
                .filter(|phrase| text_lower.contains(phrase.as_str()))
                .cloned()
                .collect();

            let score = hits.len();
            if score > best_score {
                best = category;
                best_score = score;
            }

            scores.insert(category, score);
            if !hits.is_empty() {
                matched.insert(category, hits);
            }
        }

        match best {
            Category::HighRisk => {
                tracing::warn!(
                    phrases = ?matched.get(&best),
                    "Crisis detected: high-risk phrases"
                );
            }
            Category::General => {
                tracing::debug!("No crisis phrases matched");
            }
            _ => {
                tracing::info!(
                    category = %best,
                    score = best_score,
                    phrases = ?matched.get(&best),
                    "Crisis detected"
                );
            }
        }

        Classification {
            category: best,
            scores,
            matched,
        }
    }
}

impl Default for CrisisDetector {
    fn default() -> Self {
        Self::new(KeywordTaxonomy::builtin())
    }
}
