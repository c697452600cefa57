//! Extraction of login assertions from the widget redirect query string.

use super::error::AssertionError;
use super::types::LoginAssertion;

impl LoginAssertion {
    /// Parse the query string the login widget appends to its redirect.
    ///
    /// Values are percent-decoded; unknown parameters are ignored. `id`,
    /// `auth_date` and `hash` are required, and the numeric fields must
    /// parse as base-10 integers or the assertion is rejected outright.
    pub fn from_query(query: &str) -> Result<Self, AssertionError> {
        let query = query.strip_prefix('?').unwrap_or(query);

        let mut pairs = Vec::with_capacity(7);
        for pair in query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                let decoded = urlencoding::decode(value)
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| value.to_string());
                pairs.push((key, decoded));
            }
        }

        Self::from_pairs(pairs.iter().map(|(k, v)| (*k, v.as_str())))
    }

    /// Build an assertion from already-decoded `(name, value)` pairs.
    ///
    /// Empty optional values are treated as absent; a later duplicate of a
    /// parameter overrides an earlier one.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, AssertionError> {
        let mut id = None;
        let mut first_name = None;
        let mut last_name = None;
        let mut username = None;
        let mut photo_url = None;
        let mut auth_date = None;
        let mut hash = None;

        for (key, value) in pairs {
            match key {
                "id" => id = Some(value.to_string()),
                "first_name" => first_name = Some(value.to_string()),
                "last_name" => last_name = Some(value.to_string()),
                "username" => username = Some(value.to_string()),
                "photo_url" => photo_url = Some(value.to_string()),
                "auth_date" => auth_date = Some(value.to_string()),
                "hash" => hash = Some(value.to_string()),
                _ => {}
            }
        }

        let id = parse_required_i64(id.as_deref(), "id")?;
        let auth_date = parse_required_i64(auth_date.as_deref(), "auth_date")?;
        let hash = hash.ok_or(AssertionError::MissingField("hash"))?;

        Ok(Self {
            id,
            first_name: first_name.unwrap_or_default(),
            last_name: non_empty(last_name),
            username: non_empty(username),
            photo_url: non_empty(photo_url),
            auth_date,
            hash,
        })
    }
}

/// Parse a required base-10 integer parameter.
fn parse_required_i64(value: Option<&str>, field: &'static str) -> Result<i64, AssertionError> {
    let value = value.ok_or(AssertionError::MissingField(field))?;
    value
        .parse()
        .map_err(|_| AssertionError::InvalidNumber(field))
}

/// Treat empty optional parameters as absent.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
