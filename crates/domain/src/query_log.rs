use crate::dns_record::RecordType;
use chrono::Local;
use std::fmt;
use std::net::IpAddr;

/// Outcome of a single processed query, used both for the counter
/// (`blocked_queries` increments iff the outcome is one of the two
/// `*Blocked` variants) and for the log line rendered by `Display`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Forwarded { upstream: String, annotation: String },
    Timeout { upstream: String },
    Error { upstream: String, message: String },
    BlocklistBlocked { matched: String },
    DenylistBlocked { matched: String },
}

impl Outcome {
    pub fn is_blocked(&self) -> bool {
        matches!(
            self,
            Outcome::BlocklistBlocked { .. } | Outcome::DenylistBlocked { .. }
        )
    }
}

/// A single DNS query event, ready to be appended to the log ring.
#[derive(Debug, Clone)]
pub struct QueryEvent {
    pub timestamp: String,
    pub client_ip: IpAddr,
    pub qname: String,
    pub qtype: RecordType,
    pub outcome: Outcome,
}

impl QueryEvent {
    pub fn new(client_ip: IpAddr, qname: impl Into<String>, qtype: RecordType, outcome: Outcome) -> Self {
        Self {
            timestamp: Local::now().format("%H:%M:%S").to_string(),
            client_ip,
            qname: qname.into(),
            qtype,
            outcome,
        }
    }
}

impl fmt::Display for QueryEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::BlocklistBlocked { matched } => write!(
                f,
                "{} - BLOCKLIST BLOCKED: {} (matched {})",
                self.timestamp, self.qname, matched
            ),
            Outcome::DenylistBlocked { matched } => write!(
                f,
                "{} - DENYLIST BLOCKED: {} (matched {})",
                self.timestamp, self.qname, matched
            ),
            Outcome::Forwarded { upstream, annotation } => write!(
                f,
                "{} - FORWARDED: {} to {}{}",
                self.timestamp, self.qname, upstream, annotation
            ),
            Outcome::Timeout { upstream } => write!(
                f,
                "{} - TIMEOUT: Forwarding {} to {}",
                self.timestamp, self.qname, upstream
            ),
            Outcome::Error { upstream, message } => write!(
                f,
                "{} - ERROR: Forwarding DNS query for {} to {}: {}",
                self.timestamp, self.qname, upstream, message
            ),
        }
    }
}

/// The initial arrival of a query, before a block/forward decision is made.
/// Rendered and logged separately so the dashboard log tail reads the way
/// an operator watching traffic would expect.
pub fn arrival_line(client_ip: IpAddr, qname: &str, qtype: RecordType) -> String {
    format!(
        "{} - Query from {} for {} (Type: {})",
        Local::now().format("%H:%M:%S"),
        client_ip,
        qname,
        qtype
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::new(192, 168, 1, 50))
    }

    #[test]
    fn blocklist_line_matches_expected_shape() {
        let event = QueryEvent::new(
            ip(),
            "sub.example.com",
            RecordType::A,
            Outcome::BlocklistBlocked {
                matched: "example.com".to_string(),
            },
        );
        let line = event.to_string();
        assert!(line.contains("BLOCKLIST BLOCKED: sub.example.com (matched example.com)"));
    }

    #[test]
    fn forwarded_line_includes_annotation() {
        let event = QueryEvent::new(
            ip(),
            "sub.example.com",
            RecordType::A,
            Outcome::Forwarded {
                upstream: "8.8.8.8".to_string(),
                annotation: " (matched example.com, overriding deny/block lists)".to_string(),
            },
        );
        let line = event.to_string();
        assert!(line.contains(
            "FORWARDED: sub.example.com to 8.8.8.8 (matched example.com, overriding deny/block lists)"
        ));
    }

    #[test]
    fn is_blocked_reflects_outcome() {
        assert!(Outcome::DenylistBlocked { matched: "x".into() }.is_blocked());
        assert!(!Outcome::Timeout { upstream: "x".into() }.is_blocked());
    }
}
