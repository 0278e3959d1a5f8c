use super::wire;
use palisade_dns_application::ports::{DnsForwarderPort, ListStorePort, StatsLogPort};
use palisade_dns_domain::{arrival_line, ListAction, Outcome, QueryEvent};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use tracing::{info, warn};

/// The DNS request path: parse, match against the list store,
/// sinkhole or forward, and always return wire bytes (or nothing, to drop).
pub struct DnsEngine {
    list_store: Arc<dyn ListStorePort>,
    stats_log: Arc<dyn StatsLogPort>,
    forwarder: Arc<dyn DnsForwarderPort>,
    upstream: String,
    sinkhole_ip: Ipv4Addr,
}

impl DnsEngine {
    pub fn new(
        list_store: Arc<dyn ListStorePort>,
        stats_log: Arc<dyn StatsLogPort>,
        forwarder: Arc<dyn DnsForwarderPort>,
        upstream: String,
        sinkhole_ip: Ipv4Addr,
    ) -> Self {
        Self {
            list_store,
            stats_log,
            forwarder,
            upstream,
            sinkhole_ip,
        }
    }

    /// Process one received datagram. Returns the bytes to write back, or
    /// `None` to drop silently.
    pub async fn process_datagram(&self, datagram: &[u8], client_ip: IpAddr) -> Option<Vec<u8>> {
        let message = match wire::parse_message(datagram) {
            Ok(message) => message,
            Err(err) => {
                warn!(client = %client_ip, error = %err, "Dropping unparseable datagram");
                return None;
            }
        };

        let question = wire::first_question(&message)?;
        let arrival = arrival_line(client_ip, &question.qname, question.qtype);
        info!("{arrival}");
        self.stats_log.record_arrival(arrival);

        let snapshot = self.list_store.snapshot();
        let decision = self.list_store.match_domain(&question.qname, &snapshot);

        match decision {
            Some((action @ (ListAction::Denylist | ListAction::Blocklist), matched)) => {
                Some(self.sinkhole(&message, &question.qname, question.qtype, action, matched, client_ip))
            }
            Some((ListAction::Allowlist, matched)) => {
                let annotation = format!(" (matched {matched}, overriding deny/block lists)");
                self.forward(&message, &question.qname, question.qtype, annotation, client_ip)
                    .await
            }
            None => {
                self.forward(&message, &question.qname, question.qtype, String::new(), client_ip)
                    .await
            }
        }
    }

    fn sinkhole(
        &self,
        message: &hickory_proto::op::Message,
        qname: &str,
        qtype: palisade_dns_domain::RecordType,
        action: ListAction,
        matched: String,
        client_ip: IpAddr,
    ) -> Vec<u8> {
        let bytes = match wire::sinkhole_response(message, self.sinkhole_ip) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(qname, error = %err, "Failed to synthesize sinkhole response");
                return wire::servfail_response(message).unwrap_or_default();
            }
        };

        let outcome = match action {
            ListAction::Denylist => Outcome::DenylistBlocked { matched },
            ListAction::Blocklist => Outcome::BlocklistBlocked { matched },
            ListAction::Allowlist => unreachable!("sinkhole is never reached for allowlist matches"),
        };
        self.stats_log
            .record_outcome(QueryEvent::new(client_ip, qname, qtype, outcome));
        bytes
    }

    async fn forward(
        &self,
        message: &hickory_proto::op::Message,
        qname: &str,
        qtype: palisade_dns_domain::RecordType,
        annotation: String,
        client_ip: IpAddr,
    ) -> Option<Vec<u8>> {
        let wire_query = match wire_bytes_of(message) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(qname, error = %err, "Failed to re-encode query for forwarding");
                return wire::servfail_response(message).ok();
            }
        };

        match self.forwarder.forward(&wire_query, &self.upstream).await {
            Ok(response) => {
                let outcome = Outcome::Forwarded {
                    upstream: self.upstream.clone(),
                    annotation,
                };
                self.stats_log
                    .record_outcome(QueryEvent::new(client_ip, qname, qtype, outcome));
                Some(response)
            }
            Err(palisade_dns_domain::DomainError::QueryTimeout) => {
                warn!(qname, upstream = %self.upstream, "Upstream query timed out");
                let outcome = Outcome::Timeout {
                    upstream: self.upstream.clone(),
                };
                self.stats_log
                    .record_outcome(QueryEvent::new(client_ip, qname, qtype, outcome));
                wire::servfail_response(message).ok()
            }
            Err(err) => {
                warn!(qname, upstream = %self.upstream, error = %err, "Upstream query failed");
                let outcome = Outcome::Error {
                    upstream: self.upstream.clone(),
                    message: err.to_string(),
                };
                self.stats_log
                    .record_outcome(QueryEvent::new(client_ip, qname, qtype, outcome));
                wire::servfail_response(message).ok()
            }
        }
    }
}

fn wire_bytes_of(message: &hickory_proto::op::Message) -> Result<Vec<u8>, palisade_dns_domain::DomainError> {
    use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| palisade_dns_domain::DomainError::DnsParseError(e.to_string()))?;
    Ok(buf)
}
