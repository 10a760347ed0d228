use super::RecordHandlers;
use reconflux_domain::{normalize_name, rdata_target, GraphFact, ResolvedQuery, ResourceRecord};

impl RecordHandlers {
    /// The fact is written regardless of scope; only the follow-up event is
    /// scope-gated.
    pub(super) async fn handle_srv(&self, query: &ResolvedQuery, record: &ResourceRecord) {
        let service = record.name.as_str();
        let target = rdata_target(&record.data);
        if service.is_empty() || target.is_empty() {
            return;
        }

        let fact = GraphFact::Srv {
            name: query.name.clone(),
            service: service.to_string(),
            target: target.clone(),
        };
        self.fanout
            .write(&fact, &self.provenance(&query.source, query.tag))
            .await;

        if let Some(domain) = self.scope.which_domain(&target) {
            self.publish_name(&target, &normalize_name(&domain), query.tag, &query.source);
        }
        self.liveness.beat();
    }
}
