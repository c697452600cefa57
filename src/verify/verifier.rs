//! Login assertion verification.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use crate::assertion::LoginAssertion;
use crate::config::ConnectorConfig;
use crate::identity::VerifiedLogin;

use super::canonical::data_check_string;
use super::error::VerifyError;

type HmacSha256 = Hmac<Sha256>;

/// Verifies signed login assertions against the configured bot token.
///
/// Read-only after construction; a single verifier can be shared across
/// threads for concurrent verification.
#[derive(Clone)]
pub struct LoginVerifier {
    bot_token: String,
    max_age_secs: i64,
    future_skew_secs: i64,
}

impl LoginVerifier {
    /// Create a verifier from connector configuration.
    pub fn new(config: &ConnectorConfig) -> Self {
        Self {
            bot_token: config.bot_token.clone(),
            max_age_secs: config.max_age_secs,
            future_skew_secs: config.future_skew_secs,
        }
    }

    /// Verify an assertion against the wall clock.
    #[must_use = "verification result must be checked"]
    pub fn verify(&self, assertion: &LoginAssertion) -> Result<VerifiedLogin, VerifyError> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0);
        self.verify_at(assertion, now)
    }

    /// Verify an assertion at an explicit point in time (Unix seconds).
    ///
    /// The signature is checked before the freshness window, and an
    /// assertion exactly `max_age_secs` old is still accepted. On success
    /// the assertion is mapped into a [`VerifiedLogin`]; there are no
    /// partial-success states.
    #[must_use = "verification result must be checked"]
    pub fn verify_at(
        &self,
        assertion: &LoginAssertion,
        now: i64,
    ) -> Result<VerifiedLogin, VerifyError> {
        if self.bot_token.is_empty() {
            warn!("bot token is not configured, rejecting login assertion");
            return Err(VerifyError::MissingCredential);
        }

        if assertion.hash.is_empty() {
            debug!(user_id = %assertion.id, "login assertion carries no signature");
            return Err(VerifyError::MissingSignature);
        }

        let expected = sign_payload(&self.bot_token, &data_check_string(assertion));
        let matches: bool = expected
            .as_bytes()
            .ct_eq(assertion.hash.as_bytes())
            .into();
        if !matches {
            debug!(user_id = %assertion.id, "login assertion signature mismatch");
            return Err(VerifyError::SignatureMismatch);
        }

        let age = now.saturating_sub(assertion.auth_date);
        if age > self.max_age_secs {
            debug!(
                user_id = %assertion.id,
                age_secs = age,
                "login assertion expired"
            );
            return Err(VerifyError::Expired);
        }

        let ahead = assertion.auth_date.saturating_sub(now);
        if ahead > self.future_skew_secs {
            debug!(
                user_id = %assertion.id,
                ahead_secs = ahead,
                "login assertion timestamp in future"
            );
            return Err(VerifyError::TimestampInFuture);
        }

        debug!(user_id = %assertion.id, "login assertion verified");
        Ok(VerifiedLogin::from_assertion(assertion))
    }
}

/// Compute the hex signature Telegram produces for `payload` under
/// `bot_token`: HMAC-SHA256 keyed with the SHA-256 digest of the token,
/// lowercase hex encoded.
pub fn sign_payload(bot_token: &str, payload: &str) -> String {
    let secret_key = Sha256::digest(bot_token.as_bytes());

    let mut mac =
        HmacSha256::new_from_slice(&secret_key).expect("HMAC accepts any key length");
    mac.update(payload.as_bytes());

    hex::encode(mac.finalize().into_bytes())
}
