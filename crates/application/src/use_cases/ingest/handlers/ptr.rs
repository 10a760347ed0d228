use super::RecordHandlers;
use reconflux_domain::{normalize_name, DiscoveryTag, GraphFact, ResolvedQuery, ResourceRecord};
use tracing::trace;

impl RecordHandlers {
    /// Reverse records only matter when they point back into scope; anything
    /// else is dropped before a fact is written.
    pub(super) async fn handle_ptr(&self, query: &ResolvedQuery, record: &ResourceRecord) {
        let target = record.data.as_str();
        if target.is_empty() {
            return;
        }
        let domain = self
            .scope
            .which_domain(target)
            .map(|d| normalize_name(&d))
            .unwrap_or_default();
        if domain.is_empty() {
            trace!(host = target, "PTR target out of scope");
            return;
        }

        let fact = GraphFact::Ptr {
            name: query.name.clone(),
            target: target.to_string(),
        };
        self.fanout
            .write(&fact, &self.provenance(&query.source, query.tag))
            .await;

        self.publish_name(target, &domain, DiscoveryTag::Dns, &query.source);
        self.liveness.beat();
    }
}
