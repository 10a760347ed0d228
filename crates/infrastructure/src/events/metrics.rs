use dashmap::DashMap;
use reconflux_domain::{BusEvent, Topic};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Snapshot of [`BusMetrics`] counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BusSummary {
    pub total: u64,
    pub heartbeats: u64,
    pub names: u64,
    pub addresses: u64,
    pub logs: u64,
}

/// Counters over the bus traffic.
///
/// Atomics for per-topic totals, `DashMap` for per-domain discovery counts.
#[derive(Clone)]
pub struct BusMetrics {
    total: Arc<AtomicU64>,
    heartbeats: Arc<AtomicU64>,
    names: Arc<AtomicU64>,
    addresses: Arc<AtomicU64>,
    logs: Arc<AtomicU64>,

    /// New names per registrable/root domain
    domain_names: Arc<DashMap<String, u64>>,
}

impl BusMetrics {
    pub fn new() -> Self {
        Self {
            total: Arc::new(AtomicU64::new(0)),
            heartbeats: Arc::new(AtomicU64::new(0)),
            names: Arc::new(AtomicU64::new(0)),
            addresses: Arc::new(AtomicU64::new(0)),
            logs: Arc::new(AtomicU64::new(0)),
            domain_names: Arc::new(DashMap::new()),
        }
    }

    pub fn track(&self, event: &BusEvent) {
        self.total.fetch_add(1, Ordering::Relaxed);

        let counter = match event.topic() {
            Topic::SetActive => &self.heartbeats,
            Topic::NewName => &self.names,
            Topic::NewAddress => &self.addresses,
            Topic::Log => &self.logs,
        };
        counter.fetch_add(1, Ordering::Relaxed);

        if let BusEvent::NewName(name) = event {
            self.domain_names
                .entry(name.domain.clone())
                .and_modify(|c| *c += 1)
                .or_insert(1);
        }
    }

    pub fn summary(&self) -> BusSummary {
        BusSummary {
            total: self.total.load(Ordering::Relaxed),
            heartbeats: self.heartbeats.load(Ordering::Relaxed),
            names: self.names.load(Ordering::Relaxed),
            addresses: self.addresses.load(Ordering::Relaxed),
            logs: self.logs.load(Ordering::Relaxed),
        }
    }

    pub fn domain_count(&self, domain: &str) -> u64 {
        self.domain_names.get(domain).map(|v| *v).unwrap_or(0)
    }

    /// Domains with the most discovered names, ties broken alphabetically.
    pub fn top_domains(&self, n: usize) -> Vec<(String, u64)> {
        let mut domains: Vec<_> = self
            .domain_names
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();

        domains.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        domains.truncate(n);
        domains
    }

    pub fn reset(&self) {
        for counter in [
            &self.total,
            &self.heartbeats,
            &self.names,
            &self.addresses,
            &self.logs,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
        self.domain_names.clear();
    }
}

impl Default for BusMetrics {
    fn default() -> Self {
        Self::new()
    }
}
