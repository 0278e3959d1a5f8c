//! Wire-format parsing and synthesis for the DNS request path.
//!
//! Builds on `hickory-proto` directly rather than `hickory-server`: the
//! engine owns the raw datagram end to end, which is what lets it hand back
//! a synthesized sinkhole/SERVFAIL answer without a general-purpose
//! authority abstraction in the way.

use super::record_type_map;
use palisade_dns_domain::{normalize_domain, DomainError, RecordType};
use hickory_proto::op::{Message, MessageType, OpCode, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{DNSClass, RData, Record};
use hickory_proto::serialize::binary::{BinDecodable, BinEncodable, BinEncoder};
use std::net::Ipv4Addr;

pub const SINKHOLE_TTL: u32 = 60;

/// The first question of a parsed query, plus the owning message (needed to
/// preserve the transaction ID and RD flag in the synthesized reply).
pub struct ParsedQuery {
    pub message: Message,
    pub qname: String,
    pub qtype: RecordType,
}

/// Parse a raw UDP datagram as a DNS message.
pub fn parse_message(bytes: &[u8]) -> Result<Message, DomainError> {
    Message::from_bytes(bytes).map_err(|e| DomainError::DnsParseError(e.to_string()))
}

/// Extract and normalize the first question, if any.
pub fn first_question(message: &Message) -> Option<ParsedQuery> {
    let query = message.queries().first()?;
    let qname = normalize_domain(&query.name().to_utf8())?;
    let qtype = record_type_map::from_hickory(query.query_type());
    Some(ParsedQuery {
        message: message.clone(),
        qname,
        qtype,
    })
}

/// Build a sinkhole response: the original question, one A answer pointing
/// at `sinkhole_ip` with TTL 60, RCODE=NOERROR ("Sinkhole response
/// synthesis"). Returned as wire-format bytes.
pub fn sinkhole_response(original: &Message, sinkhole_ip: Ipv4Addr) -> Result<Vec<u8>, DomainError> {
    let query = original
        .queries()
        .first()
        .ok_or_else(|| DomainError::DnsParseError("no question to answer".to_string()))?
        .clone();

    let mut response = Message::new(original.id(), MessageType::Response, OpCode::Query);
    response.set_recursion_desired(original.recursion_desired());
    response.set_recursion_available(true);
    response.set_response_code(ResponseCode::NoError);
    response.add_query(query.clone());

    let mut answer = Record::from_rdata(query.name().clone(), SINKHOLE_TTL, RData::A(A(sinkhole_ip)));
    answer.set_dns_class(DNSClass::IN);
    response.add_answer(answer);

    encode(&response)
}

/// Build a SERVFAIL response: the original question, no answers, RCODE=2.
pub fn servfail_response(original: &Message) -> Result<Vec<u8>, DomainError> {
    let mut response = Message::new(original.id(), MessageType::Response, OpCode::Query);
    response.set_recursion_desired(original.recursion_desired());
    response.set_recursion_available(true);
    response.set_response_code(ResponseCode::ServFail);
    if let Some(query) = original.queries().first() {
        response.add_query(query.clone());
    }

    encode(&response)
}

fn encode(message: &Message) -> Result<Vec<u8>, DomainError> {
    let mut buf = Vec::with_capacity(512);
    let mut encoder = BinEncoder::new(&mut buf);
    message
        .emit(&mut encoder)
        .map_err(|e| DomainError::DnsParseError(e.to_string()))?;
    Ok(buf)
}
