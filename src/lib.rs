//! Telegram Login Widget verification.
//!
//! Verifies the signed identity assertion the login widget appends to its
//! redirect URL and maps it into a normalized record for account linking.
//! The embedding web layer hands the redirect query to [`LoginAssertion`],
//! passes the result through a [`LoginVerifier`], and consumes the
//! [`VerifiedLogin`] on success.
//!
//! Verification follows the widget protocol: the non-empty identity
//! fields (everything except `hash`) are canonicalized into a sorted
//! `name=value` list joined by newlines, signed with HMAC-SHA256 under a
//! key derived as the SHA-256 digest of the bot token, and compared in
//! constant time against the supplied signature. Assertions outside the
//! freshness window are rejected.
//!
//! ```
//! use telegram_login::{ConnectorConfig, LoginAssertion, LoginVerifier};
//!
//! let config = ConnectorConfig {
//!     bot_token: "123456:bot-token".to_string(),
//!     ..Default::default()
//! };
//! let verifier = LoginVerifier::new(&config);
//!
//! let assertion =
//!     LoginAssertion::from_query("id=42&first_name=Ann&auth_date=1700000000&hash=abc")
//!         .unwrap();
//!
//! // The widget's hash was forged here, so verification rejects it.
//! assert!(verifier.verify(&assertion).is_err());
//! ```

pub mod assertion;
pub mod config;
pub mod identity;
pub mod verify;

pub use assertion::{AssertionError, LoginAssertion};
pub use config::ConnectorConfig;
pub use identity::VerifiedLogin;
pub use verify::{data_check_string, sign_payload, LoginVerifier, VerifyError};
