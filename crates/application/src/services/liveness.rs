use crate::ports::EventBus;
use reconflux_domain::BusEvent;
use std::sync::Arc;

/// Publishes `set-active` heartbeats under a fixed component identity.
#[derive(Clone)]
pub struct LivenessSignal {
    bus: Arc<dyn EventBus>,
    identity: Arc<str>,
}

impl LivenessSignal {
    pub fn new(bus: Arc<dyn EventBus>, identity: impl Into<Arc<str>>) -> Self {
        Self {
            bus,
            identity: identity.into(),
        }
    }

    pub fn beat(&self) {
        self.bus.publish(BusEvent::SetActive(self.identity.to_string()));
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }
}

impl std::fmt::Debug for LivenessSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LivenessSignal")
            .field("identity", &self.identity)
            .finish()
    }
}
