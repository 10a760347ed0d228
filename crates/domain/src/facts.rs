//! Facts persisted to graph sinks.

use crate::tag::DiscoveryTag;
use serde::{Deserialize, Serialize};

/// Autonomous-system / netblock observation delivered to the infrastructure path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsnRecord {
    pub asn: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    /// Announced prefix in CIDR notation
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub tag: DiscoveryTag,
}

impl AsnRecord {
    /// Address, prefix and description are all required before anything is written.
    pub fn is_complete(&self) -> bool {
        !self.address.is_empty() && !self.prefix.is_empty() && !self.description.is_empty()
    }
}

/// Lineage attached to every sink write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub source: String,
    pub tag: DiscoveryTag,
    pub run_id: String,
}

/// A typed fact, one variant per sink insert operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphFact {
    Cname { name: String, target: String },
    A { name: String, address: String },
    Aaaa { name: String, address: String },
    Ptr { name: String, target: String },
    Srv { name: String, service: String, target: String },
    Ns { name: String, target: String },
    Mx { name: String, target: String },
    Infrastructure {
        asn: u32,
        description: String,
        address: String,
        prefix: String,
    },
}

impl GraphFact {
    /// Label used in failure diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            GraphFact::Cname { .. } => "CNAME",
            GraphFact::A { .. } => "A record",
            GraphFact::Aaaa { .. } => "AAAA record",
            GraphFact::Ptr { .. } => "PTR record",
            GraphFact::Srv { .. } => "SRV record",
            GraphFact::Ns { .. } => "NS record",
            GraphFact::Mx { .. } => "MX record",
            GraphFact::Infrastructure { .. } => "infrastructure data",
        }
    }
}
