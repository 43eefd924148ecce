//! Cell text helpers: null sentinels and identifier normalization

/// Spellings that mean "no value" in source data (compared trimmed and
/// case-insensitively). The empty string is handled separately.
pub const NULL_SENTINELS: [&str; 6] = ["na", "null", "nan", "n.a", "n.d.", "n/a"];

/// Placeholder used by [`normalize_identifier`]
pub const DEFAULT_PLACEHOLDER: char = '-';

/// Check whether `text` represents absence of data
///
/// True for empty or whitespace-only text and for any [`NULL_SENTINELS`]
/// spelling, ignoring case and surrounding whitespace.
pub fn is_null_sentinel(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || NULL_SENTINELS.iter().any(|s| text.eq_ignore_ascii_case(s))
}

/// Characters allowed in a normalized identifier (RFC 3986 unreserved)
fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

/// Normalize text into an identifier-safe local name using `-`
///
/// ```
/// use tabgraph_mapping::normalize_identifier;
///
/// assert_eq!(normalize_identifier("foo bar!!baz"), "foo-bar-baz");
/// ```
pub fn normalize_identifier(text: &str) -> String {
    normalize_identifier_with(text, DEFAULT_PLACEHOLDER)
}

/// Normalize text into an identifier-safe local name
///
/// Every character outside ASCII letters, digits and `- _ . ~` becomes
/// `placeholder`. Runs of `placeholder` collapse to one, including runs that
/// were already present in the input, and leading/trailing placeholders are
/// stripped. `placeholder` should itself be unreserved for the result to
/// stay within the unreserved set.
pub fn normalize_identifier_with(text: &str, placeholder: char) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        let c = if is_unreserved(c) { c } else { placeholder };
        if c == placeholder && out.ends_with(placeholder) {
            continue;
        }
        out.push(c);
    }
    out.trim_matches(placeholder).to_string()
}
