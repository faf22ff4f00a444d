//! Shared, read-only component catalog.
//!
//! Every [`Composition`](crate::Composition) holds an `Arc<Catalog>`, so index `i`
//! names the same chemical for every gas built on one catalog.

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::chemical::Chemical;
use crate::error::{GasError, GasResult};

/// Name, molar mass [kg/mol], heat capacity ratio.
const STANDARD_CHEMICALS: [(&str, f64, f64); 11] = [
    ("C1", 0.01604, 1.303),
    ("C2", 0.03007, 1.188),
    ("C3", 0.044097, 1.127),
    ("C4", 0.05812, 1.092),
    ("C5", 0.07215, 1.074),
    ("C6", 0.086_178_48, 1.062),
    ("C7", 0.100205, 1.053),
    ("N2", 0.028_013_4, 1.4),
    ("H2S", 0.034082, 1.32),
    ("CO2", 0.04401, 1.28),
    ("H2O", 0.018_015_28, 1.33),
];

static STANDARD_CATALOG: LazyLock<Arc<Catalog>> = LazyLock::new(|| {
    Arc::new(Catalog {
        chemicals: STANDARD_CHEMICALS
            .iter()
            .map(|&(name, molar_mass, k)| Chemical::new(name, molar_mass, k))
            .collect(),
    })
});

/// Ordered, immutable list of chemicals.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    chemicals: Vec<Chemical>,
}

impl Catalog {
    /// The standard natural-gas catalog (C1..C7, N2, H2S, CO2, H2O).
    ///
    /// Always returns the same shared handle.
    pub fn standard() -> Arc<Catalog> {
        Arc::clone(&STANDARD_CATALOG)
    }

    /// Build a custom catalog.
    ///
    /// Rejects empty lists, duplicate names (case-insensitive), non-positive
    /// molar masses and heat capacity ratios not above 1.
    pub fn new(chemicals: Vec<Chemical>) -> GasResult<Arc<Catalog>> {
        if chemicals.is_empty() {
            return Err(GasError::InvalidArg {
                what: "empty catalog",
            });
        }

        let mut seen = HashSet::new();
        for chemical in &chemicals {
            if chemical.name().trim().is_empty() {
                return Err(GasError::InvalidArg {
                    what: "chemical name is empty",
                });
            }
            if !seen.insert(chemical.name().to_ascii_lowercase()) {
                return Err(GasError::DuplicateChemical {
                    name: chemical.name().to_string(),
                });
            }
            let m = chemical.molar_mass();
            if !m.is_finite() || m <= 0.0 {
                return Err(GasError::NonPhysical {
                    what: "molar mass must be positive and finite",
                });
            }
            let k = chemical.heat_capacity_ratio();
            if !k.is_finite() || k <= 1.0 {
                return Err(GasError::NonPhysical {
                    what: "heat capacity ratio must be finite and greater than 1",
                });
            }
        }

        Ok(Arc::new(Catalog { chemicals }))
    }

    pub fn len(&self) -> usize {
        self.chemicals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chemicals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Chemical> {
        self.chemicals.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Chemical> + '_ {
        self.chemicals.iter()
    }

    /// Position of a chemical by name (case-insensitive).
    pub fn index_of(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.chemicals
            .iter()
            .position(|c| c.name().eq_ignore_ascii_case(name))
    }

    /// Chemicals whose name contains `query` (case-insensitive), with their indices.
    ///
    /// An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<(usize, &Chemical)> {
        let query = query.trim().to_ascii_lowercase();
        self.chemicals
            .iter()
            .enumerate()
            .filter(|(_, c)| query.is_empty() || c.name().to_ascii_lowercase().contains(&query))
            .collect()
    }

    /// Whether two handles describe the same catalog (same allocation or equal content).
    pub fn same(a: &Arc<Catalog>, b: &Arc<Catalog>) -> bool {
        Arc::ptr_eq(a, b) || **a == **b
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_layout() {
        let catalog = Catalog::standard();
        let names: Vec<&str> = catalog.iter().map(|c| c.name()).collect();
        assert_eq!(
            names,
            ["C1", "C2", "C3", "C4", "C5", "C6", "C7", "N2", "H2S", "CO2", "H2O"]
        );
        assert_eq!(catalog.get(8).map(|c| c.molar_mass()), Some(0.034082));
        assert_eq!(catalog.get(7).map(|c| c.heat_capacity_ratio()), Some(1.4));
        assert!(catalog.get(11).is_none());
    }

    #[test]
    fn standard_is_one_shared_handle() {
        assert!(Arc::ptr_eq(&Catalog::standard(), &Catalog::standard()));
    }

    #[test]
    fn index_lookup_ignores_case() {
        let catalog = Catalog::standard();
        assert_eq!(catalog.index_of("co2"), Some(9));
        assert_eq!(catalog.index_of(" H2S "), Some(8));
        assert_eq!(catalog.index_of("Ar"), None);
    }

    #[test]
    fn filter_by_substring() {
        let catalog = Catalog::standard();
        let hits: Vec<usize> = catalog.filter("h2").iter().map(|(i, _)| *i).collect();
        assert_eq!(hits, vec![8, 10]);
        assert_eq!(catalog.filter("").len(), 11);
    }

    #[test]
    fn rejects_duplicates() {
        let result = Catalog::new(vec![
            Chemical::new("N2", 0.028, 1.4),
            Chemical::new("n2", 0.028, 1.4),
        ]);
        assert_eq!(
            result.unwrap_err(),
            GasError::DuplicateChemical { name: "n2".into() }
        );
    }

    #[test]
    fn rejects_non_physical_entries() {
        assert!(Catalog::new(vec![]).is_err());
        assert!(Catalog::new(vec![Chemical::new("X", 0.0, 1.4)]).is_err());
        assert!(Catalog::new(vec![Chemical::new("X", 0.02, 1.0)]).is_err());
        assert!(Catalog::new(vec![Chemical::new("X", f64::NAN, 1.3)]).is_err());
    }

    #[test]
    fn equal_content_counts_as_same() {
        let a = Catalog::new(vec![Chemical::new("N2", 0.028, 1.4)]).unwrap();
        let b = Catalog::new(vec![Chemical::new("N2", 0.028, 1.4)]).unwrap();
        let c = Catalog::new(vec![Chemical::new("CO2", 0.044, 1.28)]).unwrap();
        assert!(Catalog::same(&a, &b));
        assert!(!Catalog::same(&a, &c));
    }
}
