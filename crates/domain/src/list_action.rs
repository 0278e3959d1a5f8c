//! The hierarchical list match rule.
//!
//! Three overlapping sets — denylist, allowlist, blocklist — are consulted
//! ancestor-by-ancestor, most specific first. Within one ancestor, denylist
//! beats allowlist beats blocklist: an administrator override to block always
//! wins, an administrator override to allow beats the default feed.

use crate::domain_name::ancestors;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Denylist,
    Allowlist,
    Blocklist,
}

impl ListAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListAction::Denylist => "DENYLIST",
            ListAction::Allowlist => "ALLOWLIST",
            ListAction::Blocklist => "BLOCKLIST",
        }
    }
}

/// Find the closest ancestor of `qname` (itself included) present in any of
/// the three sets, and report which set won at that ancestor.
///
/// `qname` must already be normalized (lowercased, no trailing dot).
pub fn hierarchical_match(
    qname: &str,
    denylist: &HashSet<String>,
    allowlist: &HashSet<String>,
    blocklist: &HashSet<String>,
) -> Option<(ListAction, String)> {
    for candidate in ancestors(qname) {
        if denylist.contains(candidate) {
            return Some((ListAction::Denylist, candidate.to_string()));
        }
        if allowlist.contains(candidate) {
            return Some((ListAction::Allowlist, candidate.to_string()));
        }
        if blocklist.contains(candidate) {
            return Some((ListAction::Blocklist, candidate.to_string()));
        }
    }
    None
}
