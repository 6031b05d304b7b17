//! Monitored endpoint and health check outcome types.
//!
//! These are the inbound contract with the caller's health check engine;
//! the crate reads them when rendering messages and never mutates them.

use serde::{Deserialize, Serialize};

/// A monitored target with a name and group classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Endpoint {
    /// Group the endpoint belongs to, used to route webhook overrides.
    #[serde(default)]
    pub group: String,

    /// Display name.
    pub name: String,

    /// URL being monitored.
    pub url: String,
}

/// Evaluation outcome of a single health check assertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionResult {
    /// The literal condition expression, e.g. `[STATUS] == 200`.
    pub condition: String,

    /// Whether the condition held.
    pub success: bool,
}

/// Result of one health check evaluation against an endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckResult {
    /// Per-condition outcomes, in evaluation order.
    #[serde(default)]
    pub condition_results: Vec<ConditionResult>,
}
