use super::{RecordHandlers, DNS_SOURCE};
use reconflux_domain::{
    rdata_target, registrable_domain, DiscoveryTag, GraphFact, ResolvedQuery, ResourceRecord,
};

impl RecordHandlers {
    pub(super) async fn handle_mx(&self, query: &ResolvedQuery, record: &ResourceRecord) {
        let target = rdata_target(&record.data);
        if target.is_empty() {
            return;
        }
        let Some(domain) = registrable_domain(&target) else {
            return;
        };

        let fact = GraphFact::Mx {
            name: query.name.clone(),
            target: target.clone(),
        };
        self.fanout
            .write(&fact, &self.provenance(&query.source, query.tag))
            .await;

        if target != domain {
            self.publish_name(&target, &domain, DiscoveryTag::Dns, DNS_SOURCE);
        }
        self.liveness.beat();
    }
}
