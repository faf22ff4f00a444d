use thiserror::Error;

pub type GfResult<T> = Result<T, GfError>;

/// Numeric failures raised by the shared helpers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
