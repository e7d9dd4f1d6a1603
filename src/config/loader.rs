//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading scheduling
//! scenarios from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{SchedulerError, SchedulerResult};
use crate::models::{Model, PreferenceTable};

use super::types::{EmployeesConfig, Scenario, ScenarioMetadata, ShiftRules};

/// Loads and provides access to a scheduling scenario.
///
/// # Directory Structure
///
/// ```text
/// config/reference/
/// ├── scenario.yaml   # Name, solver job label, description
/// ├── employees.yaml  # Ordered employee preference vectors
/// └── rules.yaml      # Shift count, headcount, pairing rules
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/reference").unwrap();
/// let model = loader.build_model().unwrap();
/// println!("{} variables", model.variable_count());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    scenario: Scenario,
}

impl ConfigLoader {
    /// Loads a scenario from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> SchedulerResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<ScenarioMetadata>(&path.join("scenario.yaml"))?;
        let employees = Self::load_yaml::<EmployeesConfig>(&path.join("employees.yaml"))?;
        let rules = Self::load_yaml::<ShiftRules>(&path.join("rules.yaml"))?;

        debug!(
            scenario = %metadata.name,
            employees = employees.employees.len(),
            num_shifts = rules.num_shifts,
            "Loaded scenario configuration"
        );

        Ok(Self {
            scenario: Scenario::new(metadata, employees.employees, rules),
        })
    }

    /// Wraps an already constructed scenario.
    pub fn from_scenario(scenario: Scenario) -> Self {
        Self { scenario }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> SchedulerResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| SchedulerError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| SchedulerError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded scenario.
    pub fn scenario(&self) -> &Scenario {
        &self.scenario
    }

    /// Returns the scenario metadata.
    pub fn metadata(&self) -> &ScenarioMetadata {
        self.scenario.metadata()
    }

    /// Returns the preference table.
    pub fn preferences(&self) -> &PreferenceTable {
        self.scenario.preferences()
    }

    /// Returns the shift rules.
    pub fn rules(&self) -> &ShiftRules {
        self.scenario.rules()
    }

    /// Builds the model for the loaded scenario.
    pub fn build_model(&self) -> SchedulerResult<Model> {
        crate::formulation::build_scenario_model(&self.scenario)
    }
}
