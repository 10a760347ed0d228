use crate::ports::ScopeOracle;
use crate::services::{FanoutReport, LivenessSignal, SinkFanout};
use reconflux_domain::{AsnRecord, GraphFact, Provenance};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Writes ASN / netblock observations straight to the sinks.
///
/// This path bypasses admission control and never produces discovery events.
pub struct RecordInfrastructureUseCase {
    fanout: SinkFanout,
    scope: Arc<dyn ScopeOracle>,
    liveness: LivenessSignal,
}

impl RecordInfrastructureUseCase {
    pub fn new(fanout: SinkFanout, scope: Arc<dyn ScopeOracle>, liveness: LivenessSignal) -> Self {
        Self {
            fanout,
            scope,
            liveness,
        }
    }

    /// Returns `None` when the record was incomplete and nothing was written.
    #[instrument(skip(self, record), fields(asn = record.asn))]
    pub async fn execute(&self, record: &AsnRecord) -> Option<FanoutReport> {
        if !record.is_complete() {
            debug!(
                address = %record.address,
                prefix = %record.prefix,
                "Skipping incomplete infrastructure record"
            );
            return None;
        }

        let fact = GraphFact::Infrastructure {
            asn: record.asn,
            description: record.description.clone(),
            address: record.address.clone(),
            prefix: record.prefix.clone(),
        };
        let provenance = Provenance {
            source: record.source.clone(),
            tag: record.tag,
            run_id: self.scope.run_id(),
        };

        let report = self.fanout.write(&fact, &provenance).await;
        self.liveness.beat();
        Some(report)
    }
}
