use palisade_dns_domain::normalize_domain;
use std::collections::HashSet;

/// Parse one line of a hosts-format blocklist feed into a normalized domain.
///
/// - Blank lines and lines starting with `#` are discarded.
/// - `<ip> <domain> [trailing ignored]` is recognized when `<ip>` is
///   `0.0.0.0` or `127.0.0.1`; only `<domain>` is kept.
/// - A single bare token is taken as a domain.
/// - Anything else is ignored.
fn parse_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    let candidate = match tokens.as_slice() {
        [addr, domain, ..] if matches!(*addr, "0.0.0.0" | "127.0.0.1") => *domain,
        [single] => *single,
        _ => return None,
    };

    normalize_domain(candidate)
}

/// Parse an entire hosts-format feed body into the set of domains it names.
pub fn parse_feed(body: &str) -> HashSet<String> {
    body.lines().filter_map(parse_line).collect()
}
