//! How construction treats non-physical inputs.

/// Validation policy for [`Gas`](crate::Gas) construction and mixing.
///
/// Structural errors (length mismatch, catalog mismatch, unknown chemical)
/// are reported under both policies. For well-formed inputs both policies
/// produce identical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationPolicy {
    /// Fail fast: reject non-positive temperature or pressure, negative flux
    /// or fractions, zero mixing weights and non-finite derived values.
    #[default]
    Strict,

    /// Run the arithmetic as written and carry NaN/Inf into the result.
    Permissive,
}

impl ValidationPolicy {
    pub fn is_strict(self) -> bool {
        matches!(self, ValidationPolicy::Strict)
    }
}
