//! JSON format report generation

use super::ReportGenerator;
use crate::detector::Detection;
use crate::error::RipplesError;

/// Compact single-line JSON keyed by project name
pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, detection: &Detection) -> Result<String, RipplesError> {
        Ok(serde_json::to_string(detection.report())?)
    }
}
