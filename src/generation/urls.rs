//! URL template normalization and base/suffix joining.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::generation::errors::MethodErrorKind;

/// Placeholder with an optional constraint expression, after nested braces
/// have been masked out: `{id}` or `{id: [0-9]2,4}`.
static PLACEHOLDER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z0-9_-]+)\s*(?::[^{}]*)?\}").expect("placeholder regex")
});

/// Sentinel used to mask nested brace characters before the regex pass.
const MASK: char = '\u{6}';

/// Reduces every path-parameter placeholder of `template` to `{name}`,
/// stripping constraint expressions such as `{id: [0-9]{2,4}}`.
///
/// A single regex cannot match nested braces, so brace characters at
/// nesting depth > 1 are first masked out and removed, then one regex pass
/// strips the remaining `name: constraint` form.
pub fn normalize_template(template: &str) -> Result<String, MethodErrorKind> {
    let mut depth: i32 = 0;
    let mut masked = String::with_capacity(template.len());

    for ch in template.chars() {
        match ch {
            '{' => {
                masked.push(if depth == 0 { '{' } else { MASK });
                depth += 1;
            }
            '}' => {
                depth -= 1;
                if depth < 0 {
                    return Err(MethodErrorKind::MalformedUrlTemplate);
                }
                masked.push(if depth == 0 { '}' } else { MASK });
            }
            _ => masked.push(ch),
        }
    }
    if depth != 0 {
        return Err(MethodErrorKind::MalformedUrlTemplate);
    }

    let stripped: String = masked.chars().filter(|&c| c != MASK).collect();
    Ok(PLACEHOLDER_RE.replace_all(&stripped, "{$1}").into_owned())
}

/// Joins a base URL and a path suffix with exactly one separating `/`.
/// `join_url("hello/", "/{id}")`, `join_url("hello", "{id}")` and
/// `join_url("hello", "/{id}")` all yield `hello/{id}`.
pub fn join_url(base: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        return base.to_string();
    }
    match (base.ends_with('/'), suffix.starts_with('/')) {
        (true, true) => format!("{}{}", base, &suffix[1..]),
        (false, false) => format!("{base}/{suffix}"),
        _ => format!("{base}{suffix}"),
    }
}
