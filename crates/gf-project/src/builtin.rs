//! The default two-stream natural-gas scenario.

use std::collections::BTreeMap;

use gf_gas::Catalog;

use crate::schema::{PolicyDef, Scenario, StreamDef};
use crate::validate::SCENARIO_VERSION;

/// Mass fractions aligned with the standard catalog order.
const INLET_1_FRACTIONS: [f64; 11] = [
    0.87, 0.07, 0.01, 0.01, 0.01, 0.015, 0.0, 0.0, 0.005, 0.005, 0.005,
];
const INLET_2_FRACTIONS: [f64; 11] = [
    0.97, 0.02, 0.003, 0.003, 0.001, 0.002, 0.0, 0.0, 0.001, 0.0, 0.0,
];

fn named_fractions(fractions: &[f64]) -> BTreeMap<String, f64> {
    Catalog::standard()
        .iter()
        .zip(fractions.iter().copied())
        .map(|(chemical, fraction)| (chemical.name().to_string(), fraction))
        .collect()
}

/// Two inlets on the standard catalog: 318 K / 4 atm / 10 kg/s and
/// 260 K / 6 atm / 20 kg/s.
pub fn natural_gas_scenario() -> Scenario {
    Scenario {
        version: SCENARIO_VERSION,
        name: "Natural gas mixing".to_string(),
        policy: PolicyDef::Strict,
        catalog: None,
        streams: vec![
            StreamDef {
                id: "gas1".to_string(),
                temperature_k: 318.0,
                pressure_atm: 4.0,
                mass_flux_kg_per_s: 10.0,
                mass_fractions: named_fractions(&INLET_1_FRACTIONS),
            },
            StreamDef {
                id: "gas2".to_string(),
                temperature_k: 260.0,
                pressure_atm: 6.0,
                mass_flux_kg_per_s: 20.0,
                mass_fractions: named_fractions(&INLET_2_FRACTIONS),
            },
        ],
    }
}
