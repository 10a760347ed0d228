use super::handlers::RecordHandlers;
use crate::services::LivenessSignal;
use reconflux_domain::ResolvedQuery;
use tracing::{debug, instrument};

/// What happened to the records of one query.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub handled: usize,
    pub unsupported: usize,
    /// True when a CNAME in the answer set suppressed every other record.
    pub cname_short_circuit: bool,
}

/// Normalizes a query and routes its records to the per-type handlers.
///
/// An alias answer makes every sibling record redundant: if the set holds a
/// CNAME, only the first CNAME is processed.
#[derive(Debug, Clone)]
pub struct RecordDispatcher {
    handlers: RecordHandlers,
    liveness: LivenessSignal,
}

impl RecordDispatcher {
    pub fn new(handlers: RecordHandlers, liveness: LivenessSignal) -> Self {
        Self { handlers, liveness }
    }

    #[instrument(skip(self, query), fields(name = %query.name, records = query.records.len()))]
    pub async fn dispatch(&self, mut query: ResolvedQuery) -> DispatchReport {
        query.normalize();
        self.liveness.beat();

        let mut report = DispatchReport::default();

        if let Some(index) = query.first_cname() {
            report.cname_short_circuit = true;
            let record = &query.records[index];
            if self.handlers.handle(&query, record).await {
                report.handled += 1;
            }
            self.liveness.beat();
            debug!(alias = %record.data, "Answer set short-circuited by CNAME");
            return report;
        }

        for record in &query.records {
            if self.handlers.handle(&query, record).await {
                report.handled += 1;
            } else {
                report.unsupported += 1;
            }
            self.liveness.beat();
        }

        debug!(
            handled = report.handled,
            unsupported = report.unsupported,
            "Query dispatched"
        );
        report
    }
}
