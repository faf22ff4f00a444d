//! Flux-weighted mixing of gas streams.
//!
//! With Q the mass flux and c the isobaric heat capacity of each inlet:
//! - fractions, cp and R are Q-weighted means
//! - temperature is the (Q·c)-weighted mean, so the enthalpy flux is conserved
//! - pressure is the lower inlet pressure
//! - the outlet flux is Q1 + Q2
//!
//! The weighted means are associative, so folding more than two streams
//! pairwise gives the same outlet regardless of order (within rounding).

use std::sync::Arc;

use gf_core::numeric::weighted_mean;
use gf_core::units::{k, kgps};
use tracing::debug;

use crate::catalog::Catalog;
use crate::composition::Composition;
use crate::error::{GasError, GasResult};
use crate::gas::{Gas, density_of};
use crate::policy::ValidationPolicy;

impl Gas {
    /// Mix two streams built on the same catalog.
    pub fn mix(gas1: &Gas, gas2: &Gas, policy: ValidationPolicy) -> GasResult<Gas> {
        if !Catalog::same(gas1.catalog(), gas2.catalog()) {
            return Err(GasError::CatalogMismatch);
        }

        let q1 = gas1.mass_flux.value;
        let q2 = gas2.mass_flux.value;
        let c1 = gas1.isobaric_heat_capacity;
        let c2 = gas2.isobaric_heat_capacity;

        if policy.is_strict() {
            let total = q1 + q2;
            if total.is_nan() || total <= 0.0 {
                return Err(GasError::DegenerateFlux {
                    what: "total mass flux is not positive",
                });
            }
            if q1 * c1 + q2 * c2 == 0.0 {
                return Err(GasError::DegenerateFlux {
                    what: "heat capacity flux is zero",
                });
            }
        }

        let catalog = Arc::clone(gas1.catalog());
        let fractions = (0..catalog.len())
            .map(|i| weighted_mean(q1, gas1.mass_fraction(i), q2, gas2.mass_fraction(i)))
            .collect();
        let composition = Composition::from_aligned(catalog, fractions);

        let isobaric_heat_capacity = weighted_mean(q1, c1, q2, c2);
        let specific_gas_constant = weighted_mean(
            q1,
            gas1.specific_gas_constant,
            q2,
            gas2.specific_gas_constant,
        );
        let temperature = k(weighted_mean(
            q1 * c1,
            gas1.temperature.value,
            q2 * c2,
            gas2.temperature.value,
        ));
        let pressure_atm = if gas1.pressure_atm < gas2.pressure_atm {
            gas1.pressure_atm
        } else {
            gas2.pressure_atm
        };
        let mass_flux = kgps(q1 + q2);
        let density = density_of(pressure_atm, temperature, specific_gas_constant);

        let mixture = Gas {
            composition,
            temperature,
            pressure_atm,
            mass_flux,
            density,
            isobaric_heat_capacity,
            specific_gas_constant,
        };
        if policy.is_strict() {
            mixture.check_derived()?;
        }

        debug!(mixture = %mixture.summary(), "mixed two streams");
        Ok(mixture)
    }

    /// Mix any number of streams by folding them pairwise.
    pub fn mix_all(gases: &[Gas], policy: ValidationPolicy) -> GasResult<Gas> {
        let (first, rest) = gases.split_first().ok_or(GasError::InvalidArg {
            what: "no streams to mix",
        })?;
        rest.iter()
            .try_fold(first.clone(), |acc, gas| Gas::mix(&acc, gas, policy))
    }
}
