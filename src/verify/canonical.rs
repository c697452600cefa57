//! Data-check string construction.

use crate::assertion::LoginAssertion;

/// Build the data-check string Telegram signs: every non-empty field
/// except `hash`, rendered as `name=value` pairs, sorted and joined with
/// `\n` (no trailing newline).
///
/// `id` and `auth_date` are structural and always present, rendered as
/// base-10 decimals. The schema is fixed, so pair names cannot collide.
pub fn data_check_string(assertion: &LoginAssertion) -> String {
    let optional: [(&str, Option<&str>); 4] = [
        ("first_name", non_empty(&assertion.first_name)),
        ("last_name", assertion.last_name.as_deref().and_then(non_empty)),
        ("username", assertion.username.as_deref().and_then(non_empty)),
        ("photo_url", assertion.photo_url.as_deref().and_then(non_empty)),
    ];

    let mut pairs = Vec::with_capacity(6);
    pairs.push(format!("id={}", assertion.id));
    pairs.push(format!("auth_date={}", assertion.auth_date));
    for (name, value) in optional {
        if let Some(value) = value {
            pairs.push(format!("{}={}", name, value));
        }
    }

    // Pair names are distinct and none is a prefix of another, so sorting
    // the rendered pairs orders them by name.
    pairs.sort();
    pairs.join("\n")
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
