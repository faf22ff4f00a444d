//! Mass-fraction composition bound to a catalog.

use std::sync::Arc;

use gf_core::units::{SpecHeatCapacity, constants::GAS_CONSTANT_J_PER_MOL_K};

use crate::catalog::Catalog;
use crate::chemical::Chemical;
use crate::error::{GasError, GasResult};

/// One mass fraction per catalog entry, aligned by index.
///
/// Fractions are stored as given. They are expected to sum to 1 but this is
/// not enforced.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    catalog: Arc<Catalog>,
    fractions: Vec<f64>,
}

impl Composition {
    /// Create a composition from fractions aligned with the catalog order.
    pub fn new(catalog: Arc<Catalog>, fractions: Vec<f64>) -> GasResult<Self> {
        if fractions.len() != catalog.len() {
            return Err(GasError::LengthMismatch {
                components: catalog.len(),
                fractions: fractions.len(),
            });
        }
        Ok(Self { catalog, fractions })
    }

    /// Create a composition from `(name, fraction)` pairs.
    ///
    /// Chemicals not named get fraction 0. Names are matched case-insensitively.
    pub fn from_named<S, I>(catalog: Arc<Catalog>, pairs: I) -> GasResult<Self>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let mut fractions = vec![0.0; catalog.len()];
        let mut assigned = vec![false; catalog.len()];
        for (name, fraction) in pairs {
            let name = name.as_ref();
            let index = catalog
                .index_of(name)
                .ok_or_else(|| GasError::UnknownChemical {
                    name: name.to_string(),
                })?;
            if assigned[index] {
                return Err(GasError::DuplicateChemical {
                    name: name.to_string(),
                });
            }
            assigned[index] = true;
            fractions[index] = fraction;
        }
        Ok(Self { catalog, fractions })
    }

    /// Single chemical at mass fraction 1.
    pub fn pure(catalog: Arc<Catalog>, name: &str) -> GasResult<Self> {
        Self::from_named(catalog, [(name, 1.0)])
    }

    /// Built by mixing; length already matches the catalog.
    pub(crate) fn from_aligned(catalog: Arc<Catalog>, fractions: Vec<f64>) -> Self {
        debug_assert_eq!(fractions.len(), catalog.len());
        Self { catalog, fractions }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.fractions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fractions.is_empty()
    }

    /// Mass fraction at catalog index `i`, or 0 when `i` is out of range.
    pub fn mass_fraction(&self, i: usize) -> f64 {
        self.fractions.get(i).copied().unwrap_or(0.0)
    }

    /// Mass fraction of a chemical by name, or 0 when the catalog lacks it.
    pub fn mass_fraction_of(&self, name: &str) -> f64 {
        self.catalog
            .index_of(name)
            .map(|i| self.mass_fraction(i))
            .unwrap_or(0.0)
    }

    pub fn fractions(&self) -> &[f64] {
        &self.fractions
    }

    /// Iterate over catalog chemicals with their fractions, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&Chemical, f64)> + '_ {
        self.catalog.iter().zip(self.fractions.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.fractions.iter().sum()
    }

    /// Check that every fraction is finite and non-negative.
    pub fn validate(&self) -> GasResult<()> {
        for &fraction in &self.fractions {
            if !fraction.is_finite() {
                return Err(GasError::NonPhysical {
                    what: "non-finite mass fraction",
                });
            }
            if fraction < 0.0 {
                return Err(GasError::NonPhysical {
                    what: "negative mass fraction",
                });
            }
        }
        Ok(())
    }

    /// Σ g_i · R / M_i [J/(kg·K)].
    pub fn specific_gas_constant(&self) -> SpecHeatCapacity {
        self.iter()
            .map(|(c, g)| g * GAS_CONSTANT_J_PER_MOL_K / c.molar_mass())
            .sum()
    }

    /// Σ g_i · R / M_i · k_i / (k_i - 1) [J/(kg·K)].
    pub fn isobaric_heat_capacity(&self) -> SpecHeatCapacity {
        self.iter()
            .map(|(c, g)| {
                let k = c.heat_capacity_ratio();
                g * GAS_CONSTANT_J_PER_MOL_K / c.molar_mass() * k / (k - 1.0)
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_core::{Tolerances, nearly_equal};

    #[test]
    fn positional_length_must_match() {
        let result = Composition::new(Catalog::standard(), vec![1.0, 0.0]);
        assert_eq!(
            result.unwrap_err(),
            GasError::LengthMismatch {
                components: 11,
                fractions: 2
            }
        );
    }

    #[test]
    fn named_fills_missing_with_zero() {
        let comp =
            Composition::from_named(Catalog::standard(), [("C1", 0.9), ("CO2", 0.1)]).unwrap();
        assert_eq!(comp.len(), 11);
        assert_eq!(comp.mass_fraction(0), 0.9);
        assert_eq!(comp.mass_fraction(9), 0.1);
        assert_eq!(comp.mass_fraction(7), 0.0);
        assert_eq!(comp.mass_fraction_of("co2"), 0.1);
    }

    #[test]
    fn named_rejects_unknown_and_duplicates() {
        let err = Composition::from_named(Catalog::standard(), [("Ar", 1.0)]).unwrap_err();
        assert_eq!(err, GasError::UnknownChemical { name: "Ar".into() });

        let err =
            Composition::from_named(Catalog::standard(), [("N2", 0.5), ("n2", 0.5)]).unwrap_err();
        assert!(matches!(err, GasError::DuplicateChemical { .. }));
    }

    #[test]
    fn out_of_range_fraction_is_zero() {
        let comp = Composition::pure(Catalog::standard(), "N2").unwrap();
        assert_eq!(comp.mass_fraction(11), 0.0);
        assert_eq!(comp.mass_fraction(usize::MAX), 0.0);
        assert_eq!(comp.mass_fraction_of("Helium"), 0.0);
    }

    #[test]
    fn sums_are_not_normalized() {
        let comp =
            Composition::from_named(Catalog::standard(), [("C1", 0.5), ("C2", 0.25)]).unwrap();
        assert_eq!(comp.sum(), 0.75);
        assert_eq!(comp.mass_fraction(0), 0.5);
    }

    #[test]
    fn validate_rejects_negative_and_nan() {
        let comp = Composition::from_named(Catalog::standard(), [("C1", -0.1)]).unwrap();
        assert!(comp.validate().is_err());

        let comp = Composition::from_named(Catalog::standard(), [("C1", f64::NAN)]).unwrap();
        assert!(comp.validate().is_err());

        let comp = Composition::pure(Catalog::standard(), "C1").unwrap();
        assert!(comp.validate().is_ok());
    }

    #[test]
    fn pure_component_properties() {
        let catalog = Catalog::standard();
        let comp = Composition::pure(catalog.clone(), "N2").unwrap();
        let n2 = catalog.get(7).unwrap();
        let tol = Tolerances::default();

        assert!(nearly_equal(
            comp.specific_gas_constant(),
            n2.specific_gas_constant(),
            tol
        ));
        assert!(nearly_equal(
            comp.isobaric_heat_capacity(),
            n2.isobaric_heat_capacity(),
            tol
        ));
    }
}
