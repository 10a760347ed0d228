use super::{RecordHandlers, DNS_SOURCE};
use reconflux_domain::{registrable_domain, DiscoveryTag, GraphFact, ResolvedQuery, ResourceRecord};
use tracing::debug;

impl RecordHandlers {
    /// Writes the alias and always re-queues its target for resolution.
    pub(super) async fn handle_cname(&self, query: &ResolvedQuery, record: &ResourceRecord) {
        let target = record.data.as_str();
        if target.is_empty() {
            return;
        }
        let Some(domain) = registrable_domain(target) else {
            debug!(host = target, "CNAME target has no registrable domain");
            return;
        };

        let fact = GraphFact::Cname {
            name: query.name.clone(),
            target: target.to_string(),
        };
        self.fanout
            .write(&fact, &self.provenance(&query.source, query.tag))
            .await;

        self.publish_name(target, &domain, DiscoveryTag::Dns, DNS_SOURCE);
        self.liveness.beat();
    }
}
