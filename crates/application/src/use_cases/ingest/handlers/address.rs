use super::RecordHandlers;
use reconflux_domain::{AddressEvent, BusEvent, GraphFact, RecordType, ResolvedQuery, ResourceRecord};

impl RecordHandlers {
    pub(super) async fn handle_address(&self, query: &ResolvedQuery, record: &ResourceRecord) {
        let address = record.data.trim();
        if address.is_empty() {
            return;
        }

        let fact = if record.record_type == RecordType::AAAA {
            GraphFact::Aaaa {
                name: query.name.clone(),
                address: address.to_string(),
            }
        } else {
            GraphFact::A {
                name: query.name.clone(),
                address: address.to_string(),
            }
        };
        self.fanout
            .write(&fact, &self.provenance(&query.source, query.tag))
            .await;

        self.bus.publish(BusEvent::NewAddress(AddressEvent {
            address: address.to_string(),
            domain: query.domain.clone(),
            tag: query.tag,
            source: query.source.clone(),
        }));
        self.liveness.beat();
    }
}
