use crate::dns_record::{RecordType, ResourceRecord};
use crate::names::normalize_name;
use crate::tag::DiscoveryTag;
use serde::{Deserialize, Serialize};

/// One DNS lookup's full answer set, processed as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedQuery {
    /// Name that was queried
    pub name: String,
    /// Root domain the query belongs to
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub tag: DiscoveryTag,
    /// Data source that produced the name
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub records: Vec<ResourceRecord>,
}

impl ResolvedQuery {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
            tag: DiscoveryTag::Dns,
            source: "DNS".to_string(),
            records: Vec::new(),
        }
    }

    pub fn with_tag(mut self, tag: DiscoveryTag) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    pub fn with_record(mut self, record: ResourceRecord) -> Self {
        self.records.push(record);
        self
    }

    /// Normalizes the query name, its domain and every record in place.
    pub fn normalize(&mut self) {
        self.name = normalize_name(&self.name);
        self.domain = normalize_name(&self.domain);
        for record in &mut self.records {
            record.normalize();
        }
    }

    /// Index of the first CNAME record, if the answer set has one.
    pub fn first_cname(&self) -> Option<usize> {
        self.records
            .iter()
            .position(|r| r.record_type == RecordType::CNAME)
    }
}
