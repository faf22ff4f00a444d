//! Turn a scenario into gases and mix them.

use std::sync::Arc;

use gf_core::units::{k, kgps};
use gf_gas::{Catalog, Chemical, Composition, Gas, GasResult, ValidationPolicy};
use tracing::debug;

use crate::ProjectResult;
use crate::schema::Scenario;

/// Inlet streams (with their ids) and the mixed outlet.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub streams: Vec<(String, Gas)>,
    pub mixture: Gas,
}

/// The scenario's catalog, or the shared standard catalog when none is given.
pub fn build_catalog(scenario: &Scenario) -> ProjectResult<Arc<Catalog>> {
    Ok(scenario_catalog(scenario)?)
}

pub(crate) fn scenario_catalog(scenario: &Scenario) -> GasResult<Arc<Catalog>> {
    match &scenario.catalog {
        Some(defs) => {
            let chemicals = defs
                .iter()
                .map(|d| {
                    Chemical::new(d.name.clone(), d.molar_mass_kg_per_mol, d.heat_capacity_ratio)
                })
                .collect();
            Catalog::new(chemicals)
        }
        None => Ok(Catalog::standard()),
    }
}

/// Build every inlet stream.
pub fn build_streams(
    scenario: &Scenario,
    policy: ValidationPolicy,
) -> ProjectResult<Vec<(String, Gas)>> {
    let catalog = build_catalog(scenario)?;
    scenario
        .streams
        .iter()
        .map(|stream| -> ProjectResult<(String, Gas)> {
            let composition = Composition::from_named(
                Arc::clone(&catalog),
                stream.mass_fractions.iter().map(|(n, f)| (n.as_str(), *f)),
            )?;
            let gas = Gas::from_characteristics(
                composition,
                k(stream.temperature_k),
                stream.pressure_atm,
                kgps(stream.mass_flux_kg_per_s),
                policy,
            )?;
            debug!(stream = %stream.id, gas = %gas.summary(), "built stream");
            Ok((stream.id.clone(), gas))
        })
        .collect()
}

/// Build all streams and mix them into one.
///
/// `policy` overrides the scenario's own policy when given.
pub fn evaluate(
    scenario: &Scenario,
    policy: Option<ValidationPolicy>,
) -> ProjectResult<Evaluation> {
    let policy = policy.unwrap_or_else(|| scenario.policy.into());
    let streams = build_streams(scenario, policy)?;
    let gases: Vec<Gas> = streams.iter().map(|(_, gas)| gas.clone()).collect();
    let mixture = Gas::mix_all(&gases, policy)?;
    Ok(Evaluation { streams, mixture })
}
