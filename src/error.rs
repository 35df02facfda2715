use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// A cursor was used in a way its current state does not allow, e.g. dereferenced after
    /// exhaustion. Raised as a panic by the non-`try_` cursor methods.
    #[error("Invalid state reached: {0}")]
    InvalidState(&'static str),

    /// Text could not be read as the requested value
    #[error("Cannot parse {0:?}: {1}")]
    Parse(String, &'static str),
}
