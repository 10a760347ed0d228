use reconflux_domain::{AsnRecord, DiscoveryTag, RecordType, ResolvedQuery, ResourceRecord};

pub const RUN_ID: &str = "run-e2e";

/// Answer set for `www.example.com` aliased onto a CDN, with the CDN's
/// address records that a recursive resolver would append.
pub fn cdn_alias_answer() -> ResolvedQuery {
    ResolvedQuery::new("www.EXAMPLE.com.", "example.com")
        .with_record(ResourceRecord::new(
            "www.EXAMPLE.com.",
            RecordType::CNAME,
            "edge.cdn.example.net.",
        ))
        .with_record(ResourceRecord::new(
            "edge.cdn.example.net.",
            RecordType::A,
            "198.51.100.10",
        ))
}

pub fn spf_answer() -> ResolvedQuery {
    ResolvedQuery::new("example.com", "example.com").with_record(ResourceRecord::new(
        "example.com",
        RecordType::TXT,
        "v=spf1 include:_spf.example.com ip4:203.0.113.5 -all",
    ))
}

pub fn apex_answer() -> ResolvedQuery {
    ResolvedQuery::new("example.com", "example.com")
        .with_tag(DiscoveryTag::Brute)
        .with_source("Brute Forcing")
        .with_record(ResourceRecord::new("example.com", RecordType::A, "192.0.2.80"))
        .with_record(ResourceRecord::new("example.com", RecordType::NS, "ns1.dns-host.net."))
        .with_record(ResourceRecord::new("example.com", RecordType::MX, "10 mx.example.com."))
}

pub fn asn_observation() -> AsnRecord {
    AsnRecord {
        asn: 64500,
        description: "EXAMPLE-HOSTING".to_string(),
        address: "192.0.2.80".to_string(),
        prefix: "192.0.2.0/24".to_string(),
        source: "RADb".to_string(),
        tag: DiscoveryTag::Api,
    }
}
