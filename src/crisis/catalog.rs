// Response catalog: pre-authored support content per category

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::category::Category;
use super::error::ConfigError;
use super::helplines::HelplineDirectory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    High,
    Urgent,
    Normal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Urgent => "URGENT",
            Severity::Normal => "NORMAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display color tag for front-ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    Red,
    Orange,
    Yellow,
    Green,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseTemplate {
    pub severity: Severity,
    pub message: String,
    pub immediate_action: String,
    /// Helpline identifiers, in display order
    pub helplines: Vec<String>,
    pub tips: Vec<String>,
    pub color: DisplayColor,
}

impl ResponseTemplate {
    fn new(
        severity: Severity,
        message: &str,
        immediate_action: &str,
        helplines: &[&str],
        tips: &[&str],
        color: DisplayColor,
    ) -> Self {
        Self {
            severity,
            message: message.to_string(),
            immediate_action: immediate_action.to_string(),
            helplines: helplines.iter().map(|h| h.to_string()).collect(),
            tips: tips.iter().map(|t| t.to_string()).collect(),
            color,
        }
    }
}

/// Immutable mapping from category to response template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseCatalog {
    templates: BTreeMap<Category, ResponseTemplate>,
}

impl ResponseCatalog {
    pub fn new<I>(templates: I) -> Self
    where
        I: IntoIterator<Item = (Category, ResponseTemplate)>,
    {
        Self {
            templates: templates.into_iter().collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new([
            (
                Category::HighRisk,
                ResponseTemplate::new(
                    Severity::Critical,
                    "I'm really concerned about you. Your life matters, and there are people who want to help.",
                    "Please call the suicide prevention helpline RIGHT NOW. They have trained counselors available.",
                    &["suicide_prevention", "mental_health"],
                    &[
                        "Remove any means of self-harm from your immediate area",
                        "Call a trusted friend or family member immediately",
                        "Go to a public place if you're alone",
                        "Text a crisis counselor if calling feels hard",
                        "Remember: This feeling is temporary, even if it doesn't feel that way",
                    ],
                    DisplayColor::Red,
                ),
            ),
            (
                Category::MentalDistress,
                ResponseTemplate::new(
                    Severity::High,
                    "I hear you, and what you're feeling is valid. You don't have to face this alone.",
                    "Consider reaching out to a mental health professional or helpline for support.",
                    &["mental_health", "suicide_prevention"],
                    &[
                        "Take 5 deep breaths: inhale for 4, hold for 4, exhale for 6",
                        "Write down what you're feeling - getting it out helps",
                        "Reach out to someone you trust",
                        "Remember: You've survived 100% of your worst days so far",
                        "Consider professional help - it's a sign of strength, not weakness",
                    ],
                    DisplayColor::Orange,
                ),
            ),
            (
                Category::Disaster,
                ResponseTemplate::new(
                    Severity::Urgent,
                    "Stay calm. Your safety is the priority. Follow these steps carefully.",
                    "If you're in immediate danger, call the disaster helpline or move to safety.",
                    &["disaster", "police"],
                    &[
                        "Move to higher ground if flooding",
                        "Stay indoors during cyclone/storm",
                        "Have emergency supplies ready (water, food, flashlight)",
                        "Keep phone charged and with you",
                        "Follow official evacuation orders immediately",
                    ],
                    DisplayColor::Yellow,
                ),
            ),
            (
                Category::Medical,
                ResponseTemplate::new(
                    Severity::Urgent,
                    "Medical emergencies require immediate professional care.",
                    "Call 108 (medical emergency) NOW if symptoms are severe.",
                    &["medical"],
                    &[
                        "Stay calm and keep the person calm",
                        "Don't move person if spinal injury suspected",
                        "Apply pressure to bleeding wounds with clean cloth",
                        "If unconscious, check breathing and place in recovery position",
                        "Write down all symptoms to tell the emergency team",
                    ],
                    DisplayColor::Red,
                ),
            ),
            (
                Category::Violence,
                ResponseTemplate::new(
                    Severity::Urgent,
                    "Your safety comes first. You deserve to be safe.",
                    "If you're in immediate danger, call 100 (police) or move to a safe location.",
                    &["women_helpline", "police"],
                    &[
                        "Trust your instincts - if you feel unsafe, you probably are",
                        "Have an escape plan and practice it",
                        "Keep important documents and emergency money accessible",
                        "Tell someone you trust about the situation",
                        "Remember: This is NOT your fault",
                    ],
                    DisplayColor::Red,
                ),
            ),
            (
                Category::General,
                ResponseTemplate::new(
                    Severity::Normal,
                    "I'm here to help. Tell me what's on your mind.",
                    "Feel free to share more, or ask me anything about safety and wellbeing.",
                    &["mental_health"],
                    &[
                        "Take care of basic needs: sleep, food, water",
                        "Reach out to friends and family",
                        "Practice self-care activities you enjoy",
                        "Remember: It's okay to ask for help",
                        "You deserve support and understanding",
                    ],
                    DisplayColor::Green,
                ),
            ),
        ])
    }

    /// Template for a category. There is no fallback: a missing entry is a
    /// data defect.
    pub fn template(&self, category: Category) -> Result<&ResponseTemplate, ConfigError> {
        self.templates
            .get(&category)
            .ok_or(ConfigError::MissingTemplate(category))
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Check every category has a template and every helpline reference
    /// resolves against `directory`.
    pub fn validate(&self, directory: &HelplineDirectory) -> Result<(), ConfigError> {
        for category in Category::ALL {
            let template = self.template(category)?;
            if let Some(missing) = template.helplines.iter().find(|id| !directory.contains(id)) {
                return Err(ConfigError::UnknownHelpline {
                    category,
                    helpline: missing.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for ResponseCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_category() {
        let catalog = ResponseCatalog::builtin();

        assert_eq!(catalog.len(), Category::ALL.len());
        assert!(catalog.validate(&HelplineDirectory::builtin()).is_ok());
    }

    #[test]
    fn test_severity_per_category() {
        let catalog = ResponseCatalog::builtin();

        let severity = |c| catalog.template(c).unwrap().severity;
        assert_eq!(severity(Category::HighRisk), Severity::Critical);
        assert_eq!(severity(Category::MentalDistress), Severity::High);
        assert_eq!(severity(Category::Disaster), Severity::Urgent);
        assert_eq!(severity(Category::Medical), Severity::Urgent);
        assert_eq!(severity(Category::Violence), Severity::Urgent);
        assert_eq!(severity(Category::General), Severity::Normal);
    }

    #[test]
    fn test_missing_template_is_reported() {
        let mut catalog = ResponseCatalog::builtin();
        catalog.templates.remove(&Category::Violence);

        assert_eq!(
            catalog.validate(&HelplineDirectory::builtin()),
            Err(ConfigError::MissingTemplate(Category::Violence))
        );
    }

    #[test]
    fn test_unknown_helpline_is_reported() {
        let mut catalog = ResponseCatalog::builtin();
        catalog
            .templates
            .get_mut(&Category::Medical)
            .unwrap()
            .helplines
            .push("ambulance".to_string());

        assert_eq!(
            catalog.validate(&HelplineDirectory::builtin()),
            Err(ConfigError::UnknownHelpline {
                category: Category::Medical,
                helpline: "ambulance".to_string(),
            })
        );
    }

    #[test]
    fn test_wire_format() {
        let catalog = ResponseCatalog::builtin();
        let json = serde_json::to_value(&catalog).unwrap();

        assert_eq!(json["high_risk"]["severity"], "CRITICAL");
        assert_eq!(json["mental_distress"]["color"], "orange");
    }
}
