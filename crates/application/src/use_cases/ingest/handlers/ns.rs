use super::{RecordHandlers, DNS_SOURCE};
use reconflux_domain::{
    normalize_name, registrable_domain, DiscoveryTag, GraphFact, ResolvedQuery, ResourceRecord,
};

impl RecordHandlers {
    pub(super) async fn handle_ns(&self, query: &ResolvedQuery, record: &ResourceRecord) {
        let target = record
            .data
            .split(',')
            .last()
            .map(normalize_name)
            .unwrap_or_default();
        if target.is_empty() {
            return;
        }
        let Some(domain) = registrable_domain(&target) else {
            return;
        };

        let fact = GraphFact::Ns {
            name: query.name.clone(),
            target: target.clone(),
        };
        self.fanout
            .write(&fact, &self.provenance(&query.source, query.tag))
            .await;

        // A bare apex nameserver would resolve straight back to its own domain.
        if target != domain {
            self.publish_name(&target, &domain, DiscoveryTag::Dns, DNS_SOURCE);
        }
        self.liveness.beat();
    }
}
