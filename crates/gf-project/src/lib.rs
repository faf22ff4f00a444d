//! gf-project: scenario file format, validation and evaluation.

pub mod builtin;
pub mod evaluate;
pub mod schema;
pub mod validate;

use std::path::Path;

use gf_gas::GasError;
use tracing::info;

pub use builtin::natural_gas_scenario;
pub use evaluate::{Evaluation, build_catalog, build_streams, evaluate};
pub use schema::*;
pub use validate::{SCENARIO_VERSION, ValidationError, validate_scenario};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Gas error: {0}")]
    Gas(#[from] GasError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_yaml::from_str(&content)?;
    validate_scenario(&scenario)?;
    info!(path = %path.display(), streams = scenario.streams.len(), "loaded scenario");
    Ok(scenario)
}

pub fn save_yaml(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_yaml::to_string(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = serde_json::from_str(&content)?;
    validate_scenario(&scenario)?;
    info!(path = %path.display(), streams = scenario.streams.len(), "loaded scenario");
    Ok(scenario)
}

pub fn save_json(path: &Path, scenario: &Scenario) -> ProjectResult<()> {
    validate_scenario(scenario)?;
    let content = serde_json::to_string_pretty(scenario)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

/// Parse a scenario without validating it, choosing JSON for `.json` files
/// and YAML otherwise.
pub fn read_scenario(path: &Path) -> ProjectResult<Scenario> {
    let content = std::fs::read_to_string(path)?;
    let scenario: Scenario = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(scenario)
}

/// Load and validate a scenario, choosing JSON for `.json` files and YAML otherwise.
pub fn load_scenario(path: &Path) -> ProjectResult<Scenario> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}
