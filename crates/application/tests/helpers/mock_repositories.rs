#![allow(dead_code)]

use async_trait::async_trait;
use reconflux_application::ports::{EventBus, GraphSink, ScopeOracle};
use reconflux_domain::{
    is_same_or_subdomain, AddressEvent, BusEvent, DiscoveryTag, DomainError, GraphFact, NameEvent,
    Provenance,
};
use std::sync::{Arc, Mutex};
use tokio::sync::RwLock;

// ============================================================================
// Mock GraphSink
// ============================================================================

#[derive(Clone)]
pub struct RecordingSink {
    name: String,
    writes: Arc<RwLock<Vec<(GraphFact, Provenance)>>>,
}

impl RecordingSink {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            writes: Arc::new(RwLock::new(Vec::new())),
        }
    }

    pub async fn facts(&self) -> Vec<GraphFact> {
        self.writes
            .read()
            .await
            .iter()
            .map(|(fact, _)| fact.clone())
            .collect()
    }

    pub async fn writes(&self) -> Vec<(GraphFact, Provenance)> {
        self.writes.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.writes.read().await.len()
    }

    async fn record(
        &self,
        fact: GraphFact,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        self.writes.write().await.push((
            fact,
            Provenance {
                source: source.to_string(),
                tag,
                run_id: run_id.to_string(),
            },
        ));
        Ok(())
    }
}

#[async_trait]
impl GraphSink for RecordingSink {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_cname(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        let fact = GraphFact::Cname {
            name: name.to_string(),
            target: target.to_string(),
        };
        self.record(fact, source, tag, run_id).await
    }

    async fn insert_a(
        &self,
        name: &str,
        address: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        let fact = GraphFact::A {
            name: name.to_string(),
            address: address.to_string(),
        };
        self.record(fact, source, tag, run_id).await
    }

    async fn insert_aaaa(
        &self,
        name: &str,
        address: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        let fact = GraphFact::Aaaa {
            name: name.to_string(),
            address: address.to_string(),
        };
        self.record(fact, source, tag, run_id).await
    }

    async fn insert_ptr(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        let fact = GraphFact::Ptr {
            name: name.to_string(),
            target: target.to_string(),
        };
        self.record(fact, source, tag, run_id).await
    }

    async fn insert_srv(
        &self,
        name: &str,
        service: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        let fact = GraphFact::Srv {
            name: name.to_string(),
            service: service.to_string(),
            target: target.to_string(),
        };
        self.record(fact, source, tag, run_id).await
    }

    async fn insert_ns(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        let fact = GraphFact::Ns {
            name: name.to_string(),
            target: target.to_string(),
        };
        self.record(fact, source, tag, run_id).await
    }

    async fn insert_mx(
        &self,
        name: &str,
        target: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        let fact = GraphFact::Mx {
            name: name.to_string(),
            target: target.to_string(),
        };
        self.record(fact, source, tag, run_id).await
    }

    async fn insert_infrastructure(
        &self,
        asn: u32,
        description: &str,
        address: &str,
        prefix: &str,
        source: &str,
        tag: DiscoveryTag,
        run_id: &str,
    ) -> Result<(), DomainError> {
        let fact = GraphFact::Infrastructure {
            asn,
            description: description.to_string(),
            address: address.to_string(),
            prefix: prefix.to_string(),
        };
        self.record(fact, source, tag, run_id).await
    }
}

// ============================================================================
// Mock GraphSink that rejects every write
// ============================================================================

pub struct FailingSink;

impl FailingSink {
    fn refuse(&self) -> Result<(), DomainError> {
        Err(DomainError::SinkUnavailable("connection refused".to_string()))
    }
}

#[async_trait]
impl GraphSink for FailingSink {
    fn name(&self) -> &str {
        "failing"
    }

    async fn insert_cname(
        &self,
        _: &str,
        _: &str,
        _: &str,
        _: DiscoveryTag,
        _: &str,
    ) -> Result<(), DomainError> {
        self.refuse()
    }

    async fn insert_a(
        &self,
        _: &str,
        _: &str,
        _: &str,
        _: DiscoveryTag,
        _: &str,
    ) -> Result<(), DomainError> {
        self.refuse()
    }

    async fn insert_aaaa(
        &self,
        _: &str,
        _: &str,
        _: &str,
        _: DiscoveryTag,
        _: &str,
    ) -> Result<(), DomainError> {
        self.refuse()
    }

    async fn insert_ptr(
        &self,
        _: &str,
        _: &str,
        _: &str,
        _: DiscoveryTag,
        _: &str,
    ) -> Result<(), DomainError> {
        self.refuse()
    }

    async fn insert_srv(
        &self,
        _: &str,
        _: &str,
        _: &str,
        _: &str,
        _: DiscoveryTag,
        _: &str,
    ) -> Result<(), DomainError> {
        self.refuse()
    }

    async fn insert_ns(
        &self,
        _: &str,
        _: &str,
        _: &str,
        _: DiscoveryTag,
        _: &str,
    ) -> Result<(), DomainError> {
        self.refuse()
    }

    async fn insert_mx(
        &self,
        _: &str,
        _: &str,
        _: &str,
        _: DiscoveryTag,
        _: &str,
    ) -> Result<(), DomainError> {
        self.refuse()
    }

    async fn insert_infrastructure(
        &self,
        _: u32,
        _: &str,
        _: &str,
        _: &str,
        _: &str,
        _: DiscoveryTag,
        _: &str,
    ) -> Result<(), DomainError> {
        self.refuse()
    }
}

// ============================================================================
// Mock EventBus
// ============================================================================

#[derive(Default)]
pub struct RecordingBus {
    events: Mutex<Vec<BusEvent>>,
}

impl RecordingBus {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<BusEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn names(&self) -> Vec<NameEvent> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                BusEvent::NewName(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    pub fn addresses(&self) -> Vec<AddressEvent> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                BusEvent::NewAddress(event) => Some(event),
                _ => None,
            })
            .collect()
    }

    pub fn logs(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                BusEvent::Log(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn heartbeats(&self) -> usize {
        self.events().iter().filter(|e| e.is_heartbeat()).count()
    }
}

impl EventBus for RecordingBus {
    fn publish(&self, event: BusEvent) {
        self.events.lock().unwrap().push(event);
    }
}

// ============================================================================
// Mock ScopeOracle
// ============================================================================

pub struct StaticScope {
    roots: Vec<String>,
    run_id: String,
}

impl StaticScope {
    pub fn new(roots: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            roots: roots.iter().map(|r| r.to_string()).collect(),
            run_id: "run-test".to_string(),
        })
    }
}

impl ScopeOracle for StaticScope {
    fn which_domain(&self, name: &str) -> Option<String> {
        self.roots
            .iter()
            .filter(|root| is_same_or_subdomain(name, root))
            .max_by_key(|root| root.len())
            .cloned()
    }

    fn is_in_scope(&self, name: &str) -> bool {
        self.which_domain(name).is_some()
    }

    fn run_id(&self) -> String {
        self.run_id.clone()
    }
}
