// Responder: turns a category into a fully resolved support payload

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::{DisplayColor, ResponseCatalog, Severity};
use super::category::Category;
use super::error::ConfigError;
use super::helplines::{HelplineDirectory, HelplineRecord};

/// Per-request output, discarded once returned to the caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: Category,
    pub severity: Severity,
    pub message: String,
    pub immediate_action: String,
    /// Helpline identifiers from the template
    pub helplines: Vec<String>,
    /// Resolved records, same order as `helplines`
    pub helpline_details: Vec<HelplineRecord>,
    pub tips: Vec<String>,
    pub color: DisplayColor,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct Responder {
    catalog: ResponseCatalog,
    directory: HelplineDirectory,
}

impl Responder {
    pub fn new(catalog: ResponseCatalog, directory: HelplineDirectory) -> Self {
        Self { catalog, directory }
    }

    pub fn catalog(&self) -> &ResponseCatalog {
        &self.catalog
    }

    pub fn directory(&self) -> &HelplineDirectory {
        &self.directory
    }

    /// Build the response for a category, stamped with the current time
    pub fn respond(&self, category: Category) -> Result<AnalysisResult, ConfigError> {
        let template = self.catalog.template(category)?;

        let helpline_details = template
            .helplines
            .iter()
            .map(|id| {
                self.directory
                    .get(id)
                    .cloned()
                    .ok_or_else(|| ConfigError::UnknownHelpline {
                        category,
                        helpline: id.clone(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(AnalysisResult {
            category,
            severity: template.severity,
            message: template.message.clone(),
            immediate_action: template.immediate_action.clone(),
            helplines: template.helplines.clone(),
            helpline_details,
            tips: template.tips.clone(),
            color: template.color,
            timestamp: Utc::now(),
        })
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(ResponseCatalog::builtin(), HelplineDirectory::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helplines_resolve_in_order() {
        let responder = Responder::default();

        for category in Category::ALL {
            let template = responder.catalog().template(category).unwrap();
            let result = responder.respond(category).unwrap();

            assert_eq!(result.helpline_details.len(), template.helplines.len());
            for (id, record) in template.helplines.iter().zip(&result.helpline_details) {
                assert_eq!(responder.directory().get(id), Some(record));
            }
        }
    }

    #[test]
    fn test_medical_uses_108() {
        let result = Responder::default().respond(Category::Medical).unwrap();

        assert_eq!(result.severity, Severity::Urgent);
        assert_eq!(result.helpline_details.len(), 1);
        assert_eq!(result.helpline_details[0].number, "108");
    }

    #[test]
    fn test_timestamp_taken_at_call_time() {
        let responder = Responder::default();

        let before = Utc::now();
        let result = responder.respond(Category::General).unwrap();
        let after = Utc::now();

        assert!(result.timestamp >= before);
        assert!(result.timestamp <= after);
    }

    #[test]
    fn test_unresolved_helpline_fails() {
        let directory = HelplineDirectory::new(Vec::new());
        let responder = Responder::new(ResponseCatalog::builtin(), directory);

        let err = responder.respond(Category::General).unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownHelpline {
                category: Category::General,
                helpline: "mental_health".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_template_fails() {
        let responder = Responder::new(ResponseCatalog::new(Vec::new()), HelplineDirectory::builtin());

        assert_eq!(
            responder.respond(Category::Disaster).unwrap_err(),
            ConfigError::MissingTemplate(Category::Disaster)
        );
    }

    #[test]
    fn test_payload_field_names() {
        let result = Responder::default().respond(Category::Disaster).unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["severity"], "URGENT");
        assert_eq!(json["color"], "yellow");
        assert_eq!(json["category"], "disaster");
        assert_eq!(json["helpline_details"][0]["name"], "National Disaster Helpline");
        assert_eq!(json["helpline_details"][1]["number"], "100");
        assert!(json["immediate_action"].is_string());
        assert!(json["timestamp"].is_string());
    }
}
