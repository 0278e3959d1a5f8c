use std::net::Ipv4Addr;

/// IP address the fake upstream resolver in `test_server` answers with for
/// any query it receives.
pub const UPSTREAM_ANSWER_IP: Ipv4Addr = Ipv4Addr::new(93, 184, 216, 34);

pub struct TestDomains;

impl TestDomains {
    pub fn clean() -> &'static str {
        "example.com"
    }

    pub fn blocked() -> &'static str {
        "ads.evil.com"
    }

    pub fn blocked_subdomain() -> &'static str {
        "tracker.ads.evil.com"
    }

    pub fn denied_but_allowlisted() -> &'static str {
        "internal.corp.example"
    }
}
