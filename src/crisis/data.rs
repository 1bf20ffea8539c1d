// Reference data bundle: every static table the service reads

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::catalog::ResponseCatalog;
use super::error::ConfigError;
use super::helplines::HelplineDirectory;
use super::keywords::KeywordTaxonomy;
use super::resources::{default_emergency_numbers, EmergencyNumbers, ResourceListing, SelfCare};

static BUILTIN: Lazy<ReferenceData> = Lazy::new(|| ReferenceData {
    keywords: KeywordTaxonomy::builtin(),
    helplines: HelplineDirectory::builtin(),
    responses: ResponseCatalog::builtin(),
    self_care: SelfCare::default(),
    emergency_numbers: default_emergency_numbers(),
});

/// All static tables, loaded once at startup.
///
/// A JSON override file has the same shape as the serialized value; the
/// self-care and emergency-number sections may be omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceData {
    pub keywords: KeywordTaxonomy,
    pub helplines: HelplineDirectory,
    pub responses: ResponseCatalog,
    #[serde(default)]
    pub self_care: SelfCare,
    #[serde(default = "default_emergency_numbers")]
    pub emergency_numbers: EmergencyNumbers,
}

impl ReferenceData {
    /// The tables compiled into the binary
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Load reference data from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference data file: {}", path.display()))?;

        let data: ReferenceData = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        Ok(data)
    }

    /// Check the full closure Category -> Template -> Helpline
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.keywords.validate()?;
        self.helplines.validate()?;
        self.responses.validate(&self.helplines)?;
        Ok(())
    }

    pub fn resource_listing(&self) -> ResourceListing {
        ResourceListing {
            helplines: self.helplines.clone(),
            self_care: self.self_care.clone(),
            emergency_numbers: self.emergency_numbers.clone(),
        }
    }
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self::builtin()
    }
}
