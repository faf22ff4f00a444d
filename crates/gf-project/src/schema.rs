//! Scenario schema definitions.

use std::collections::BTreeMap;

use gf_gas::ValidationPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub policy: PolicyDef,
    /// Custom component catalog; the standard catalog when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<ChemicalDef>>,
    #[serde(default)]
    pub streams: Vec<StreamDef>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PolicyDef {
    #[default]
    Strict,
    Permissive,
}

impl From<PolicyDef> for ValidationPolicy {
    fn from(def: PolicyDef) -> Self {
        match def {
            PolicyDef::Strict => ValidationPolicy::Strict,
            PolicyDef::Permissive => ValidationPolicy::Permissive,
        }
    }
}

impl From<ValidationPolicy> for PolicyDef {
    fn from(policy: ValidationPolicy) -> Self {
        match policy {
            ValidationPolicy::Strict => PolicyDef::Strict,
            ValidationPolicy::Permissive => PolicyDef::Permissive,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChemicalDef {
    pub name: String,
    pub molar_mass_kg_per_mol: f64,
    pub heat_capacity_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StreamDef {
    pub id: String,
    pub temperature_k: f64,
    pub pressure_atm: f64,
    pub mass_flux_kg_per_s: f64,
    /// Chemical name to mass fraction; unlisted chemicals are 0.
    #[serde(default)]
    pub mass_fractions: BTreeMap<String, f64>,
}
