//! Gas stream with derived ideal-gas properties.

use std::sync::Arc;

use gf_core::numeric::{Tolerances, ensure_finite, nearly_equal};
use gf_core::units::constants::STANDARD_ATMOSPHERE_PA;
use gf_core::units::{Density, MassRate, Pressure, SpecHeatCapacity, Temperature, atm, kgpm3};
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::composition::Composition;
use crate::error::{GasError, GasResult};
use crate::policy::ValidationPolicy;
use crate::report::GasReport;

/// Fraction sums further than this from 1 are logged.
const FRACTION_SUM_TOLERANCE: Tolerances = Tolerances {
    abs: 1e-6,
    rel: 0.0,
};

/// A gas stream: composition, state, flux and derived properties.
///
/// Immutable once built. Pressure is held in atmospheres exactly as given;
/// `density = p · 101325 / (T · R)` holds for every constructor path.
#[derive(Debug, Clone, PartialEq)]
pub struct Gas {
    pub(crate) composition: Composition,
    pub(crate) temperature: Temperature,
    pub(crate) pressure_atm: f64,
    pub(crate) mass_flux: MassRate,
    pub(crate) density: Density,
    pub(crate) isobaric_heat_capacity: SpecHeatCapacity,
    pub(crate) specific_gas_constant: SpecHeatCapacity,
}

impl Gas {
    /// Build a gas from its characteristics under the strict policy.
    pub fn new(
        composition: Composition,
        temperature: Temperature,
        pressure_atm: f64,
        mass_flux: MassRate,
    ) -> GasResult<Self> {
        Self::from_characteristics(
            composition,
            temperature,
            pressure_atm,
            mass_flux,
            ValidationPolicy::Strict,
        )
    }

    /// Build a gas from composition, temperature, pressure [atm] and mass flux.
    ///
    /// cp and R are mass-fraction sums over the catalog; density follows
    /// from the ideal gas law.
    pub fn from_characteristics(
        composition: Composition,
        temperature: Temperature,
        pressure_atm: f64,
        mass_flux: MassRate,
        policy: ValidationPolicy,
    ) -> GasResult<Self> {
        if policy.is_strict() {
            check_conditions(temperature, pressure_atm, mass_flux)?;
            composition.validate()?;
        }

        let sum = composition.sum();
        if !nearly_equal(sum, 1.0, FRACTION_SUM_TOLERANCE) {
            warn!(sum, "mass fractions do not sum to 1");
        }

        let isobaric_heat_capacity = composition.isobaric_heat_capacity();
        let specific_gas_constant = composition.specific_gas_constant();
        let density = density_of(pressure_atm, temperature, specific_gas_constant);

        let gas = Self {
            composition,
            temperature,
            pressure_atm,
            mass_flux,
            density,
            isobaric_heat_capacity,
            specific_gas_constant,
        };
        if policy.is_strict() {
            gas.check_derived()?;
        }

        debug!(gas = %gas.summary(), "built gas from characteristics");
        Ok(gas)
    }

    pub fn composition(&self) -> &Composition {
        &self.composition
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        self.composition.catalog()
    }

    /// Temperature [K].
    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn pressure(&self) -> Pressure {
        atm(self.pressure_atm)
    }

    /// Pressure in standard atmospheres, as given.
    pub fn pressure_atm(&self) -> f64 {
        self.pressure_atm
    }

    /// Mass flux [kg/s].
    pub fn mass_flux(&self) -> MassRate {
        self.mass_flux
    }

    /// Density [kg/m³].
    pub fn density(&self) -> Density {
        self.density
    }

    /// Isobaric heat capacity [J/(kg·K)].
    pub fn isobaric_heat_capacity(&self) -> SpecHeatCapacity {
        self.isobaric_heat_capacity
    }

    /// Specific gas constant [J/(kg·K)].
    pub fn specific_gas_constant(&self) -> SpecHeatCapacity {
        self.specific_gas_constant
    }

    /// Mass fraction at catalog index `i`, or 0 when `i` is out of range.
    pub fn mass_fraction(&self, i: usize) -> f64 {
        self.composition.mass_fraction(i)
    }

    /// Mass fraction of a chemical by name, or 0 when the catalog lacks it.
    pub fn mass_fraction_of(&self, name: &str) -> f64 {
        self.composition.mass_fraction_of(name)
    }

    /// Printable characteristics report.
    pub fn report(&self) -> GasReport<'_> {
        GasReport::new(self)
    }

    /// Return a one-line summary of the stream (for debugging).
    pub fn summary(&self) -> String {
        format!(
            "Gas(T={:.2}K,P={:.4}atm,Q={:.3}kg/s,ρ={:.4}kg/m³,cp={:.1}J/kg·K,R={:.2}J/kg·K)",
            self.temperature.value,
            self.pressure_atm,
            self.mass_flux.value,
            self.density.value,
            self.isobaric_heat_capacity,
            self.specific_gas_constant
        )
    }

    /// Reject non-finite or non-positive derived properties.
    pub(crate) fn check_derived(&self) -> GasResult<()> {
        if !self.specific_gas_constant.is_finite() || self.specific_gas_constant <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "specific gas constant must be positive and finite",
            });
        }
        if !self.isobaric_heat_capacity.is_finite() || self.isobaric_heat_capacity <= 0.0 {
            return Err(GasError::NonPhysical {
                what: "isobaric heat capacity must be positive and finite",
            });
        }
        ensure_finite(self.temperature.value, "temperature")?;
        ensure_finite(self.density.value, "density")?;
        Ok(())
    }
}

/// Ideal gas density p · 101325 / (T · R), with p in atmospheres.
pub(crate) fn density_of(
    pressure_atm: f64,
    temperature: Temperature,
    specific_gas_constant: SpecHeatCapacity,
) -> Density {
    kgpm3(pressure_atm * STANDARD_ATMOSPHERE_PA / (temperature.value * specific_gas_constant))
}

fn check_conditions(
    temperature: Temperature,
    pressure_atm: f64,
    mass_flux: MassRate,
) -> GasResult<()> {
    let t = temperature.value;
    if !t.is_finite() || t <= 0.0 {
        return Err(GasError::NonPhysical {
            what: "temperature must be positive and finite",
        });
    }

    let p = pressure_atm;
    if !p.is_finite() || p <= 0.0 {
        return Err(GasError::NonPhysical {
            what: "pressure must be positive and finite",
        });
    }

    let q = mass_flux.value;
    if !q.is_finite() || q < 0.0 {
        return Err(GasError::NonPhysical {
            what: "mass flux must be non-negative and finite",
        });
    }
    Ok(())
}
