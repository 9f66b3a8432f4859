//! Placeholder scanning and substitution
//!
//! A placeholder is `{name}` where `name` is an identifier
//! (`[A-Za-z_][A-Za-z0-9_]*`). Any other brace text is literal.

use std::sync::LazyLock;

use regex::Regex;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder regex is valid"));

/// Placeholder names in first-occurrence order, without duplicates
pub fn scan(body: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for caps in PLACEHOLDER_RE.captures_iter(body) {
        let name = &caps[1];
        if !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    }
    names
}

/// Replace every placeholder using `lookup`
///
/// Substituted values are copied literally and never re-scanned.
///
/// # Returns
/// The substituted text, or the name of the first placeholder `lookup`
/// could not resolve
pub fn substitute<'a, F>(body: &str, lookup: F) -> Result<String, String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(body.len());
    let mut last = 0;

    for caps in PLACEHOLDER_RE.captures_iter(body) {
        let whole = caps.get(0).expect("group 0 always matches");
        let name = &caps[1];
        let value = lookup(name).ok_or_else(|| name.to_string())?;
        out.push_str(&body[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }

    out.push_str(&body[last..]);
    Ok(out)
}
