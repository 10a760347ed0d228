#![allow(dead_code)]

use super::mock_repositories::{RecordingBus, StaticScope};
use reconflux_application::ports::{EventBus, GraphSink, ScopeOracle};
use reconflux_application::services::{LivenessSignal, SinkFanout, TextMiner};
use reconflux_application::use_cases::{RecordDispatcher, RecordHandlers};
use reconflux_domain::{RecordType, ResolvedQuery, ResourceRecord};
use std::sync::Arc;

pub const IDENTITY: &str = "Data Manager";

pub fn build_dispatcher(
    bus: &Arc<RecordingBus>,
    scope: Arc<StaticScope>,
    sinks: Vec<Arc<dyn GraphSink>>,
) -> RecordDispatcher {
    let bus: Arc<dyn EventBus> = bus.clone();
    let scope: Arc<dyn ScopeOracle> = scope;
    let liveness = LivenessSignal::new(bus.clone(), IDENTITY);
    let fanout = SinkFanout::new(sinks, bus.clone());
    let miner = TextMiner::new(scope.clone(), bus.clone(), liveness.clone()).unwrap();
    let handlers = RecordHandlers::new(fanout, bus, scope, Arc::new(miner), liveness.clone());
    RecordDispatcher::new(handlers, liveness)
}

pub fn query(name: &str, domain: &str, records: &[(RecordType, &str)]) -> ResolvedQuery {
    records
        .iter()
        .fold(ResolvedQuery::new(name, domain), |q, (record_type, data)| {
            q.with_record(ResourceRecord::new(name, *record_type, *data))
        })
}
