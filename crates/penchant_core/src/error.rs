use thiserror::Error;

/// Errors returned by draw operations.
///
/// A failed call never advances the generator's call counter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomError {
    #[error("cannot draw an entry from an empty container")]
    EmptyContainer,

    #[error("invalid range: min {min} is greater than max {max} or not finite")]
    InvalidRange { min: f64, max: f64 },
}

pub type Result<T> = std::result::Result<T, RandomError>;
