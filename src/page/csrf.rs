//! Anti-forgery token for state-changing requests.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderValue};
use reqwest::Method;
use tracing::trace;

/// Header the server reads the token from.
pub static XSRF_TOKEN: HeaderName = HeaderName::from_static("xsrf-token");

/// Name of the hidden form field the server renders the token into.
pub const TOKEN_FIELD: &str = "__RequestVerificationToken";

/// Adds the token to POST, PATCH, PUT and DELETE requests. Other methods, and
/// pages without a token, are left untouched. Returns whether the header was
/// set.
pub fn attach_csrf_token(
    method: &Method,
    headers: &mut HeaderMap,
    token: Option<&str>,
) -> Result<bool, InvalidHeaderValue> {
    let Some(token) = token else {
        return Ok(false);
    };
    if !requires_token(method) {
        return Ok(false);
    }
    headers.insert(XSRF_TOKEN.clone(), HeaderValue::from_str(token)?);
    trace!(%method, "CSRF token attached");
    Ok(true)
}

/// Extension methods keep their spelling, so compare case-insensitively.
fn requires_token(method: &Method) -> bool {
    matches!(
        method.as_str().to_ascii_uppercase().as_str(),
        "POST" | "PATCH" | "PUT" | "DELETE"
    )
}

/// Finds the token among a form's `(name, value)` fields.
pub fn token_from_form<'a>(fields: impl IntoIterator<Item = (&'a str, &'a str)>) -> Option<&'a str> {
    fields
        .into_iter()
        .find(|(name, _)| *name == TOKEN_FIELD)
        .map(|(_, value)| value)
}
