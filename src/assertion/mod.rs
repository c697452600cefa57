//! Claimed identity assertions from the login widget.
//!
//! The Telegram login widget appends identity fields and a signature to
//! its redirect query string. This module models those fields and
//! extracts them from raw query input; verification lives in
//! [`crate::verify`].

pub mod error;
pub mod query;
pub mod types;

pub use error::AssertionError;
pub use types::LoginAssertion;
