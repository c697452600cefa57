//! Assertion extraction error types.

/// Errors raised while extracting a login assertion from widget
/// redirect parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum AssertionError {
    /// A required parameter is absent.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A numeric parameter is not a valid base-10 integer.
    #[error("invalid numeric field: {0}")]
    InvalidNumber(&'static str),
}
