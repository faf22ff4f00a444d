//! Scenario validation logic.

use std::collections::HashSet;

use gf_gas::{Catalog, GasError};

use crate::evaluate::scenario_catalog;
use crate::schema::{PolicyDef, Scenario, StreamDef};

pub const SCENARIO_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Scenario has no streams")]
    NoStreams,

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(GasError),
}

/// Validate a scenario.
///
/// Structure (ids, names, catalog entries) is always checked. Stream values
/// are range-checked only under the strict policy.
pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version != SCENARIO_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    let catalog = scenario_catalog(scenario).map_err(ValidationError::InvalidCatalog)?;

    if scenario.streams.is_empty() {
        return Err(ValidationError::NoStreams);
    }

    let strict = scenario.policy == PolicyDef::Strict;
    let mut stream_ids = HashSet::new();
    for stream in &scenario.streams {
        if stream.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "stream id".to_string(),
                value: format!("{:?}", stream.id),
                reason: "must not be empty".to_string(),
            });
        }
        if !stream_ids.insert(&stream.id) {
            return Err(ValidationError::DuplicateId {
                id: stream.id.clone(),
                context: "streams".to_string(),
            });
        }
        validate_stream(stream, &catalog, strict)?;
    }

    Ok(())
}

fn validate_stream(
    stream: &StreamDef,
    catalog: &Catalog,
    strict: bool,
) -> Result<(), ValidationError> {
    // Keys resolve case-insensitively, so `C1` and `c1` name the same chemical
    let mut seen = HashSet::new();
    for name in stream.mass_fractions.keys() {
        let context = || format!("stream '{}' mass_fractions", stream.id);
        let Some(index) = catalog.index_of(name) else {
            return Err(ValidationError::MissingReference {
                id: name.clone(),
                context: context(),
            });
        };
        if !seen.insert(index) {
            return Err(ValidationError::DuplicateId {
                id: name.clone(),
                context: context(),
            });
        }
    }

    if !strict {
        return Ok(());
    }

    validate_positive_finite("temperature_k", stream.temperature_k, &stream.id)?;
    validate_positive_finite("pressure_atm", stream.pressure_atm, &stream.id)?;
    validate_non_negative_finite(
        "mass_flux_kg_per_s",
        stream.mass_flux_kg_per_s,
        &stream.id,
    )?;
    for (name, fraction) in &stream.mass_fractions {
        validate_non_negative_finite(&format!("mass fraction {name}"), *fraction, &stream.id)?;
    }
    Ok(())
}

fn validate_positive_finite(field: &str, value: f64, owner: &str) -> Result<(), ValidationError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("'{}' {}", owner, field),
            value: value.to_string(),
            reason: "must be positive and finite".to_string(),
        });
    }
    Ok(())
}

fn validate_non_negative_finite(
    field: &str,
    value: f64,
    owner: &str,
) -> Result<(), ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: format!("'{}' {}", owner, field),
            value: value.to_string(),
            reason: "must be non-negative and finite".to_string(),
        });
    }
    Ok(())
}
