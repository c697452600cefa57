//! Normalized identity record for account linking.

use serde::Serialize;

use crate::assertion::LoginAssertion;

/// Identity produced by successful verification, shaped for the
/// embedding account-linking layer.
///
/// Telegram provides no email address, so the record carries none; the
/// embedding layer must collect one itself if it needs to.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerifiedLogin {
    /// Issuer-stable subject identifier: the Telegram user ID in decimal.
    pub external_id: String,

    /// First and last name joined with a space, trimmed.
    pub display_name: String,

    /// Telegram username; falls back to `external_id` when the account
    /// has none.
    pub username: String,

    /// Profile photo URL, when the user has a public photo.
    pub avatar_url: Option<String>,

    /// The original assertion as JSON, for audit and storage.
    pub meta_info: String,
}

impl VerifiedLogin {
    /// Map a verified assertion into the normalized record.
    pub(crate) fn from_assertion(assertion: &LoginAssertion) -> Self {
        let external_id = assertion.id.to_string();

        let display_name = format!(
            "{} {}",
            assertion.first_name,
            assertion.last_name.as_deref().unwrap_or("")
        )
        .trim()
        .to_string();

        let username = match assertion.username.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => external_id.clone(),
        };

        let avatar_url = assertion
            .photo_url
            .clone()
            .filter(|url| !url.is_empty());

        let meta_info = assertion.meta_json().unwrap_or_default();

        Self {
            external_id,
            display_name,
            username,
            avatar_url,
            meta_info,
        }
    }
}
