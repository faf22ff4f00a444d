//! Gas model errors.

use gf_core::GfError;
use thiserror::Error;

/// Result type for gas operations.
pub type GasResult<T> = Result<T, GasError>;

/// Errors that can occur while building or mixing gases.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GasError {
    /// Positional fractions do not line up with the catalog.
    #[error("Mass fraction count {fractions} does not match catalog size {components}")]
    LengthMismatch { components: usize, fractions: usize },

    /// Two gases were built on different component catalogs.
    #[error("Gases do not share the same component catalog")]
    CatalogMismatch,

    /// Name lookup failed against the catalog.
    #[error("Unknown chemical: {name}")]
    UnknownChemical { name: String },

    /// Same chemical named twice (in a catalog or a named composition).
    #[error("Duplicate chemical: {name}")]
    DuplicateChemical { name: String },

    /// Non-physical values (non-positive temperature, negative fraction, etc.).
    #[error("Non-physical value for {what}")]
    NonPhysical { what: &'static str },

    /// Mixing weights collapse to zero.
    #[error("Degenerate flux: {what}")]
    DegenerateFlux { what: &'static str },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Shared numeric check failed.
    #[error(transparent)]
    Core(#[from] GfError),
}
