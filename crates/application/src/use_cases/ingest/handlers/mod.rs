//! Per-record-type processing.
//!
//! Every handler follows the same shape: validate the record, write the
//! derived fact to all sinks, optionally publish a follow-up discovery
//! event, then heartbeat. Handlers expect the query to be normalized.

mod address;
mod cname;
mod mx;
mod ns;
mod ptr;
mod srv;
mod text;

use crate::ports::{EventBus, ScopeOracle};
use crate::services::{LivenessSignal, SinkFanout, TextMiner};
use reconflux_domain::{
    BusEvent, DiscoveryTag, NameEvent, Provenance, RecordType, ResolvedQuery, ResourceRecord,
};
use std::sync::Arc;
use tracing::trace;

/// Source label attached to follow-up events this pipeline originates.
pub(crate) const DNS_SOURCE: &str = "DNS";

#[derive(Clone)]
pub struct RecordHandlers {
    fanout: SinkFanout,
    bus: Arc<dyn EventBus>,
    scope: Arc<dyn ScopeOracle>,
    miner: Arc<TextMiner>,
    liveness: LivenessSignal,
}

impl RecordHandlers {
    pub fn new(
        fanout: SinkFanout,
        bus: Arc<dyn EventBus>,
        scope: Arc<dyn ScopeOracle>,
        miner: Arc<TextMiner>,
        liveness: LivenessSignal,
    ) -> Self {
        Self {
            fanout,
            bus,
            scope,
            miner,
            liveness,
        }
    }

    /// Routes one record to its handler. Returns `false` when the record
    /// type has no handler.
    pub async fn handle(&self, query: &ResolvedQuery, record: &ResourceRecord) -> bool {
        match record.record_type {
            RecordType::CNAME => self.handle_cname(query, record).await,
            RecordType::A | RecordType::AAAA => self.handle_address(query, record).await,
            RecordType::PTR => self.handle_ptr(query, record).await,
            RecordType::SRV => self.handle_srv(query, record).await,
            RecordType::NS => self.handle_ns(query, record).await,
            RecordType::MX => self.handle_mx(query, record).await,
            RecordType::TXT | RecordType::SPF => self.handle_text(query, record),
            RecordType::Unknown(code) => {
                trace!(code, name = %record.name, "Skipping unsupported record type");
                return false;
            }
        }
        true
    }

    fn provenance(&self, source: &str, tag: DiscoveryTag) -> Provenance {
        Provenance {
            source: source.to_string(),
            tag,
            run_id: self.scope.run_id(),
        }
    }

    /// Publishes a `new-name` event unless `domain` is empty.
    fn publish_name(&self, name: &str, domain: &str, tag: DiscoveryTag, source: &str) -> bool {
        if name.is_empty() || domain.is_empty() {
            trace!(name, "Suppressed name event without a domain");
            return false;
        }
        self.bus.publish(BusEvent::NewName(NameEvent {
            name: name.to_string(),
            domain: domain.to_string(),
            tag,
            source: source.to_string(),
        }));
        true
    }
}

impl std::fmt::Debug for RecordHandlers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordHandlers")
            .field("sinks", &self.fanout.sink_count())
            .field("liveness", &self.liveness)
            .finish()
    }
}
