// Crisis Support - keyword crisis triage service
// Library exports

pub mod config;
pub mod crisis;
pub mod errors; // User-facing startup error messages
pub mod metrics;
pub mod server; // HTTP daemon
