// Metrics module
// Prometheus counters for the HTTP daemon

use anyhow::{Context, Result};
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

use crate::crisis::Category;

/// Request and classification counters, exported on `/metrics`
#[derive(Clone)]
pub struct ServiceMetrics {
    registry: Registry,
    requests: IntCounterVec,
    classifications: IntCounterVec,
    rejected: IntCounter,
}

impl ServiceMetrics {
    pub fn new() -> Result<Self> {
        let registry = Registry::new();

        let requests = IntCounterVec::new(
            Opts::new("crisis_support_requests_total", "Requests served per endpoint"),
            &["endpoint"],
        )?;
        let classifications = IntCounterVec::new(
            Opts::new(
                "crisis_support_classifications_total",
                "Analyzed messages per detected category",
            ),
            &["category"],
        )?;
        let rejected = IntCounter::new(
            "crisis_support_rejected_requests_total",
            "Analysis requests rejected by input validation",
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(classifications.clone()))?;
        registry.register(Box::new(rejected.clone()))?;

        // Expose every category at zero so dashboards see the full set
        for category in Category::ALL {
            classifications.with_label_values(&[category.as_str()]);
        }

        Ok(Self {
            registry,
            requests,
            classifications,
            rejected,
        })
    }

    pub fn record_request(&self, endpoint: &str) {
        self.requests.with_label_values(&[endpoint]).inc();
    }

    pub fn record_classification(&self, category: Category) {
        self.classifications
            .with_label_values(&[category.as_str()])
            .inc();
    }

    pub fn record_rejected(&self) {
        self.rejected.inc();
    }

    pub fn classification_count(&self, category: Category) -> u64 {
        self.classifications
            .with_label_values(&[category.as_str()])
            .get()
    }

    /// Render all metrics in the Prometheus text format
    pub fn render(&self) -> Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new()
            .encode(&self.registry.gather(), &mut buffer)
            .context("Failed to encode metrics")?;
        String::from_utf8(buffer).context("Metrics output is not UTF-8")
    }
}
