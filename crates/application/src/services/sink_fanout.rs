use crate::ports::{EventBus, GraphSink};
use reconflux_domain::{BusEvent, DomainError, GraphFact, Provenance};
use std::sync::Arc;
use tracing::{debug, warn};

/// Per-write tally of sink outcomes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FanoutReport {
    pub written: usize,
    pub failed: usize,
}

/// Applies one fact to every configured sink.
///
/// Each sink is written independently: a failure is logged through
/// `tracing` and published on the bus `log` topic, then the next sink is
/// tried. Nothing is ever returned to the caller as an error, so event
/// emission that follows a write always proceeds.
#[derive(Clone)]
pub struct SinkFanout {
    sinks: Arc<[Arc<dyn GraphSink>]>,
    bus: Arc<dyn EventBus>,
}

impl SinkFanout {
    pub fn new(sinks: Vec<Arc<dyn GraphSink>>, bus: Arc<dyn EventBus>) -> Self {
        Self {
            sinks: sinks.into(),
            bus,
        }
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub async fn write(&self, fact: &GraphFact, provenance: &Provenance) -> FanoutReport {
        let mut report = FanoutReport::default();

        for sink in self.sinks.iter() {
            match Self::apply(sink.as_ref(), fact, provenance).await {
                Ok(()) => report.written += 1,
                Err(e) => {
                    report.failed += 1;
                    warn!(
                        sink = sink.name(),
                        fact = fact.kind(),
                        error = %e,
                        "Sink write failed (non-critical)"
                    );
                    self.bus.publish(BusEvent::Log(format!(
                        "{} failed to insert {}: {}",
                        sink.name(),
                        fact.kind(),
                        e
                    )));
                }
            }
        }

        debug!(
            fact = fact.kind(),
            written = report.written,
            failed = report.failed,
            "Fact fanned out"
        );
        report
    }

    async fn apply(
        sink: &dyn GraphSink,
        fact: &GraphFact,
        p: &Provenance,
    ) -> Result<(), DomainError> {
        match fact {
            GraphFact::Cname { name, target } => {
                sink.insert_cname(name, target, &p.source, p.tag, &p.run_id)
                    .await
            }
            GraphFact::A { name, address } => {
                sink.insert_a(name, address, &p.source, p.tag, &p.run_id).await
            }
            GraphFact::Aaaa { name, address } => {
                sink.insert_aaaa(name, address, &p.source, p.tag, &p.run_id)
                    .await
            }
            GraphFact::Ptr { name, target } => {
                sink.insert_ptr(name, target, &p.source, p.tag, &p.run_id).await
            }
            GraphFact::Srv {
                name,
                service,
                target,
            } => {
                sink.insert_srv(name, service, target, &p.source, p.tag, &p.run_id)
                    .await
            }
            GraphFact::Ns { name, target } => {
                sink.insert_ns(name, target, &p.source, p.tag, &p.run_id).await
            }
            GraphFact::Mx { name, target } => {
                sink.insert_mx(name, target, &p.source, p.tag, &p.run_id).await
            }
            GraphFact::Infrastructure {
                asn,
                description,
                address,
                prefix,
            } => {
                sink.insert_infrastructure(
                    *asn,
                    description,
                    address,
                    prefix,
                    &p.source,
                    p.tag,
                    &p.run_id,
                )
                .await
            }
        }
    }
}
