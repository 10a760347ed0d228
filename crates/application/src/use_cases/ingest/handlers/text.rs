use super::RecordHandlers;
use reconflux_domain::{ResolvedQuery, ResourceRecord};
use tracing::trace;

impl RecordHandlers {
    /// TXT and SPF data is mined only when the owner name is in scope. The
    /// miner heartbeats on its own.
    pub(super) fn handle_text(&self, query: &ResolvedQuery, record: &ResourceRecord) {
        if !self.scope.is_in_scope(&query.name) {
            trace!(name = %query.name, "Text record owner out of scope");
            return;
        }
        self.miner.mine(&record.data, &query.domain);
    }
}
