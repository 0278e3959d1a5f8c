//! Domain name normalization and ancestor enumeration.
//!
//! A normalized domain is a lowercased, dot-joined label sequence with no
//! trailing root dot. Comparison is always exact byte equality after
//! normalization — never substring matching.

/// Normalize a raw domain string as presented in a query or list entry.
///
/// Strips a single trailing root dot, lowercases, and rejects the empty
/// string. Does not validate label syntax beyond that.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}

/// Enumerate `domain` and its ancestors along label boundaries, most
/// specific first: `a.b.c` yields `["a.b.c", "b.c", "c"]`.
pub fn ancestors(domain: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(domain);
    std::iter::from_fn(move || {
        let current = rest?;
        rest = current.split_once('.').map(|(_, tail)| tail);
        Some(current)
    })
}
