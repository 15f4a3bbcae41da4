//! Removal of characters that carry no meaning in a formula.

/// Whether `ch` is dropped before parsing: whitespace, `_`, `.`, `+`, `-` and `=`.
///
/// Charge markers, bond notation and hydrate dots all fall in this set.
pub fn is_ignored(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '_' | '.' | '+' | '-' | '=')
}

/// Strip ignorable characters, keeping everything else in its original order.
pub fn normalize(raw: &str) -> String {
    raw.chars().filter(|&ch| !is_ignored(ch)).collect()
}
