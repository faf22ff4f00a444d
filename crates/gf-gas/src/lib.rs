//! gf-gas: ideal-gas stream properties and two-stream mixing.
//!
//! Provides:
//! - Chemical definitions (molar mass, heat capacity ratio)
//! - A shared, read-only component catalog
//! - Mass-fraction compositions bound to a catalog
//! - `Gas`: a stream with derived density, cp and specific gas constant
//! - Flux-weighted mixing of streams
//! - A plain-text characteristics report
//!
//! # Example
//!
//! ```
//! use gf_core::units::{k, kgps};
//! use gf_gas::{Catalog, Composition, Gas};
//!
//! let catalog = Catalog::standard();
//! let comp = Composition::from_named(catalog.clone(), [("C1", 0.9), ("N2", 0.1)]).unwrap();
//! let a = Gas::new(comp.clone(), k(318.0), 4.0, kgps(10.0)).unwrap();
//! let b = Gas::new(comp, k(260.0), 6.0, kgps(20.0)).unwrap();
//!
//! let mixture = Gas::mix(&a, &b, Default::default()).unwrap();
//! print!("{}", mixture.report());
//! ```

pub mod catalog;
pub mod chemical;
pub mod composition;
pub mod error;
pub mod gas;
mod mixing;
pub mod policy;
pub mod report;

// Re-exports for ergonomics
pub use catalog::Catalog;
pub use chemical::Chemical;
pub use composition::Composition;
pub use error::{GasError, GasResult};
pub use gas::Gas;
pub use policy::ValidationPolicy;
pub use report::GasReport;
