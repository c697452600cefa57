//! Claimed identity assertion from the login widget.

use serde::{Deserialize, Serialize};

/// Identity fields asserted by the Telegram login widget, plus the
/// issuer's signature over them.
///
/// Everything here is untrusted input until
/// [`LoginVerifier`](crate::verify::LoginVerifier) accepts it. Field names
/// match the widget's redirect parameters and must not be renamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginAssertion {
    /// Telegram user ID.
    pub id: i64,

    /// User's first name.
    #[serde(default)]
    pub first_name: String,

    /// User's last name, if set on the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Telegram username, if set on the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Profile photo URL, if the user has a public photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,

    /// Unix timestamp (seconds) at which Telegram signed the assertion.
    pub auth_date: i64,

    /// Hex-encoded HMAC-SHA256 over the data-check string.
    pub hash: String,
}

impl LoginAssertion {
    /// Serialize the full assertion, including `hash`, as a JSON audit
    /// blob. Absent optional fields are omitted.
    pub fn meta_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
