//! Plain-text characteristics report.

use std::fmt;

use crate::gas::Gas;

/// Renders temperature, pressure, mass flux, density and one composition
/// line per catalog chemical.
#[derive(Debug, Clone, Copy)]
pub struct GasReport<'a> {
    gas: &'a Gas,
}

impl<'a> GasReport<'a> {
    pub fn new(gas: &'a Gas) -> Self {
        Self { gas }
    }
}

impl fmt::Display for GasReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gas = self.gas;
        writeln!(f, "Temperature: {} K", gas.temperature().value)?;
        writeln!(f, "Pressure: {} atm", gas.pressure_atm)?;
        writeln!(f, "Mass flux: {} kg/s", gas.mass_flux().value)?;
        writeln!(f, "Density: {} kg/m^3", gas.density().value)?;
        writeln!(f, "Composition:")?;
        for (chemical, fraction) in gas.composition().iter() {
            writeln!(f, "{} - {}", chemical.name(), fraction)?;
        }
        Ok(())
    }
}
