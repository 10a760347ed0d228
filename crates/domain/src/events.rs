//! Discovery events exchanged over the publish/subscribe bus.

use crate::tag::DiscoveryTag;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Bus topics produced by the ingestion pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    SetActive,
    NewName,
    NewAddress,
    Log,
}

impl Topic {
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::SetActive => "set-active",
            Topic::NewName => "new-name",
            Topic::NewAddress => "new-address",
            Topic::Log => "log",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    High,
    Critical,
}

/// Request to resolve a newly discovered name.
///
/// `domain` is never empty: the pipeline only builds a `NameEvent` once the
/// registrable (or in-scope) domain of `name` is known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEvent {
    pub name: String,
    pub domain: String,
    pub tag: DiscoveryTag,
    pub source: String,
}

/// Announcement of a discovered IPv4/IPv6 address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEvent {
    pub address: String,
    pub domain: String,
    pub tag: DiscoveryTag,
    pub source: String,
}

/// Message published on the bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "topic", content = "payload", rename_all = "kebab-case")]
pub enum BusEvent {
    /// Liveness heartbeat carrying the publishing component's identity
    SetActive(String),
    NewName(NameEvent),
    NewAddress(AddressEvent),
    /// Human-readable, non-fatal diagnostic
    Log(String),
}

impl BusEvent {
    pub fn topic(&self) -> Topic {
        match self {
            BusEvent::SetActive(_) => Topic::SetActive,
            BusEvent::NewName(_) => Topic::NewName,
            BusEvent::NewAddress(_) => Topic::NewAddress,
            BusEvent::Log(_) => Topic::Log,
        }
    }

    pub fn priority(&self) -> Priority {
        match self {
            BusEvent::SetActive(_) => Priority::Critical,
            BusEvent::NewName(_) | BusEvent::NewAddress(_) | BusEvent::Log(_) => Priority::High,
        }
    }

    pub fn is_heartbeat(&self) -> bool {
        matches!(self, BusEvent::SetActive(_))
    }
}
