//! Request types for the shift roster API.
//!
//! This module defines the JSON request body for `POST /model`. The body of
//! `POST /roster` is a [`SampleSet`](crate::models::SampleSet) as returned
//! by the solver.

use serde::{Deserialize, Serialize};

use crate::config::{Scenario, ScenarioMetadata, ShiftRules};
use crate::models::PreferenceTable;

/// Request body for the `POST /model` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelRequest {
    /// Scenario name, used in logs.
    #[serde(default = "default_name")]
    pub name: String,
    /// Solver job label.
    #[serde(default = "default_label")]
    pub label: String,
    /// Ordered employee preference vectors.
    pub employees: PreferenceTable,
    /// Shift count, headcount and pairing rules.
    pub rules: ShiftRules,
}

fn default_name() -> String {
    "adhoc".to_string()
}

fn default_label() -> String {
    crate::formulation::DEFAULT_MODEL_LABEL.to_string()
}

impl From<ModelRequest> for Scenario {
    fn from(req: ModelRequest) -> Self {
        Scenario::new(
            ScenarioMetadata {
                name: req.name,
                label: req.label,
                description: None,
            },
            req.employees,
            req.rules,
        )
    }
}
