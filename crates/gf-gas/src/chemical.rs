//! Chemical component definitions.

use gf_core::units::{SpecHeatCapacity, constants::GAS_CONSTANT_J_PER_MOL_K};

/// A named substance with its molar mass and heat capacity ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct Chemical {
    name: String,
    /// Molar mass [kg/mol]
    molar_mass: f64,
    /// k = cp/cv (dimensionless)
    heat_capacity_ratio: f64,
}

impl Chemical {
    pub fn new(name: impl Into<String>, molar_mass: f64, heat_capacity_ratio: f64) -> Self {
        Self {
            name: name.into(),
            molar_mass,
            heat_capacity_ratio,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Molar mass [kg/mol].
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    pub fn heat_capacity_ratio(&self) -> f64 {
        self.heat_capacity_ratio
    }

    /// Specific gas constant R/M [J/(kg·K)].
    pub fn specific_gas_constant(&self) -> SpecHeatCapacity {
        GAS_CONSTANT_J_PER_MOL_K / self.molar_mass
    }

    /// Ideal-gas isobaric heat capacity R/M · k/(k-1) [J/(kg·K)].
    pub fn isobaric_heat_capacity(&self) -> SpecHeatCapacity {
        let k = self.heat_capacity_ratio;
        GAS_CONSTANT_J_PER_MOL_K / self.molar_mass * k / (k - 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::{Tolerances, nearly_equal};

    #[test]
    fn methane_properties() {
        let c1 = Chemical::new("C1", 0.01604, 1.303);
        let tol = Tolerances::default();

        assert_eq!(c1.name(), "C1");
        assert!(nearly_equal(
            c1.specific_gas_constant(),
            518.358_018_588_107_3,
            tol
        ));
        assert!(nearly_equal(
            c1.isobaric_heat_capacity(),
            518.358_018_588_107_3 * 1.303 / 0.303,
            tol
        ));
    }

    #[test]
    fn cp_exceeds_gas_constant() {
        // cp - cv = R and cv > 0 for k > 1
        let n2 = Chemical::new("N2", 0.028_013_4, 1.4);
        assert!(n2.isobaric_heat_capacity() > n2.specific_gas_constant());
    }
}
