// Crisis triage core
// Keyword classification and pre-authored support responses

mod analyzer;
mod catalog;
mod category;
mod data;
mod detector;
mod error;
mod helplines;
mod keywords;
mod resources;
mod responder;

pub use analyzer::CrisisAnalyzer;
pub use catalog::{DisplayColor, ResponseCatalog, ResponseTemplate, Severity};
pub use category::Category;
pub use data::ReferenceData;
pub use detector::{Classification, CrisisDetector};
pub use error::{ConfigError, RequestError};
pub use helplines::{HelplineDirectory, HelplineRecord};
pub use keywords::KeywordTaxonomy;
pub use resources::{default_emergency_numbers, EmergencyNumbers, ResourceListing, SelfCare};
pub use responder::{AnalysisResult, Responder};
