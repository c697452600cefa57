//! Login assertion verification.
//!
//! Recomputes the widget signature over the canonical data-check string
//! with HMAC-SHA256 under a key derived from the bot token, compares it
//! in constant time, and enforces the freshness window.

pub mod canonical;
pub mod error;
pub mod verifier;

pub use canonical::data_check_string;
pub use error::VerifyError;
pub use verifier::{sign_payload, LoginVerifier};
