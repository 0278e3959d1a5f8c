use hickory_proto::rr::RecordType as HickoryRecordType;
use palisade_dns_domain::RecordType;

/// Translate a wire-format `hickory_proto` record type into the domain's own
/// `RecordType`, used only for textualizing the query in log lines.
pub fn from_hickory(hickory_type: HickoryRecordType) -> RecordType {
    match hickory_type {
        HickoryRecordType::A => RecordType::A,
        HickoryRecordType::AAAA => RecordType::AAAA,
        HickoryRecordType::CNAME => RecordType::CNAME,
        HickoryRecordType::MX => RecordType::MX,
        HickoryRecordType::TXT => RecordType::TXT,
        HickoryRecordType::PTR => RecordType::PTR,
        HickoryRecordType::NS => RecordType::NS,
        HickoryRecordType::SOA => RecordType::SOA,
        HickoryRecordType::SRV => RecordType::SRV,
        HickoryRecordType::CAA => RecordType::CAA,
        HickoryRecordType::NAPTR => RecordType::NAPTR,
        HickoryRecordType::HTTPS => RecordType::HTTPS,
        HickoryRecordType::SVCB => RecordType::SVCB,
        HickoryRecordType::ANY => RecordType::Any,
        other => RecordType::Unknown(u16::from(other)),
    }
}
