//! Media-type filtering. Only JSON-compatible endpoints are generated.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches `application/json` and structured-syntax suffixes such as
/// `application/vnd.api+json` or `application/hal+json`.
static JSON_MEDIA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^application/([a-z0-9!#$&^_.\-]+\+)?json$").expect("json media regex")
});

/// Returns the first entry of `media_types` that is, in full, a JSON media
/// type. Parameterized entries such as `application/json; charset=utf-8`
/// do not match.
pub fn first_json_type(media_types: &[String]) -> Option<&str> {
    media_types
        .iter()
        .map(String::as_str)
        .find(|ty| JSON_MEDIA_RE.is_match(ty))
}

/// Method-level declarations override service-level ones; an empty
/// method-level list means "inherit".
pub fn effective<'a>(method_level: &'a [String], service_level: &'a [String]) -> &'a [String] {
    if method_level.is_empty() {
        service_level
    } else {
        method_level
    }
}
