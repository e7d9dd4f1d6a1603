//! Scenario configuration loading for the shift roster engine.
//!
//! This module loads scheduling scenarios (employee preferences and shift
//! rules) from YAML files and passes them around as an immutable
//! [`Scenario`] value.
//!
//! # Example
//!
//! ```no_run
//! use shift_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/reference").unwrap();
//! println!("Loaded scenario: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EmployeePair, EmployeesConfig, Scenario, ScenarioMetadata, ShiftRules, Unavailability,
};
