//! Backend health report.

#[cfg(feature = "http")]
pub mod client;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Response of `GET /health`: overall status plus one entry per backend
/// dependency (`mongodb`, `mysql`, ...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthReport {
    pub status: String,
    #[serde(flatten)]
    pub dependencies: BTreeMap<String, serde_json::Value>,
}

impl HealthReport {
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }

    /// Dependencies not reporting `connected`.
    pub fn degraded_dependencies(&self) -> Vec<&str> {
        self.dependencies
            .iter()
            .filter(|(_, v)| v.as_str() != Some("connected"))
            .map(|(k, _)| k.as_str())
            .collect()
    }
}
