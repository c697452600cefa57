//! Verification rejection reasons.

/// Reasons a login assertion is rejected.
///
/// The variants exist for operator diagnostics; callers should surface
/// every rejection to the end user as a single opaque authentication
/// failure, without distinguishing between them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum VerifyError {
    /// No bot token is configured; every assertion is rejected.
    #[error("bot token is not configured")]
    MissingCredential,

    /// The assertion carries no signature.
    #[error("missing signature")]
    MissingSignature,

    /// The recomputed digest does not match the supplied signature.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// The assertion is older than the freshness window.
    #[error("assertion expired")]
    Expired,

    /// The assertion timestamp is too far in the future.
    #[error("assertion timestamp in future")]
    TimestampInFuture,
}
