//! Reconflux Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod events;
pub mod facts;
pub mod names;
pub mod resolved_query;
pub mod tag;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{RecordType, ResourceRecord};
pub use errors::DomainError;
pub use events::{AddressEvent, BusEvent, NameEvent, Priority, Topic};
pub use facts::{AsnRecord, GraphFact, Provenance};
pub use names::{is_same_or_subdomain, normalize_name, rdata_target, registrable_domain};
pub use resolved_query::ResolvedQuery;
pub use tag::DiscoveryTag;
