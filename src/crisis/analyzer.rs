// Crisis analyzer: classifier + responder over validated reference data

use super::category::Category;
use super::data::ReferenceData;
use super::detector::{Classification, CrisisDetector};
use super::error::ConfigError;
use super::resources::ResourceListing;
use super::responder::{AnalysisResult, Responder};

/// Entry point used by the HTTP handlers and the CLI.
///
/// Can only be built from reference data that passed validation, so
/// `analyze` fails only if that invariant is broken.
#[derive(Debug, Clone)]
pub struct CrisisAnalyzer {
    detector: CrisisDetector,
    responder: Responder,
    resources: ResourceListing,
}

impl CrisisAnalyzer {
    pub fn new(data: ReferenceData) -> Result<Self, ConfigError> {
        data.validate()?;

        let resources = data.resource_listing();
        let ReferenceData {
            keywords,
            helplines,
            responses,
            ..
        } = data;

        tracing::info!(
            phrases = keywords.len(),
            helplines = helplines.len(),
            templates = responses.len(),
            "Reference data validated"
        );

        Ok(Self {
            detector: CrisisDetector::new(keywords),
            responder: Responder::new(responses, helplines),
            resources,
        })
    }

    /// Analyzer over the built-in tables
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::new(ReferenceData::builtin())
    }

    pub fn classify(&self, text: &str) -> Category {
        self.detector.classify(text)
    }

    pub fn score(&self, text: &str) -> Classification {
        self.detector.score(text)
    }

    pub fn respond(&self, category: Category) -> Result<AnalysisResult, ConfigError> {
        self.responder.respond(category)
    }

    /// Classify `text` and build the matching support response
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, ConfigError> {
        let category = self.classify(text);
        self.respond(category)
    }

    pub fn resources(&self) -> &ResourceListing {
        &self.resources
    }
}
