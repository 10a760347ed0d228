use reconflux_application::ports::EventBus;
use reconflux_domain::BusEvent;
use tokio::sync::mpsc;
use tracing::trace;

/// Fire-and-forget publisher for bus events.
///
/// `publish` never awaits: events go into an unbounded channel drained by a
/// consumer task. When the emitter is disabled, or the consumer has gone
/// away, events are dropped.
#[derive(Clone)]
pub struct ChannelEventBus {
    sender: Option<mpsc::UnboundedSender<BusEvent>>,
}

impl ChannelEventBus {
    /// A bus that discards everything.
    pub fn new_disabled() -> Self {
        Self { sender: None }
    }

    pub fn new_enabled() -> (Self, mpsc::UnboundedReceiver<BusEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { sender: Some(tx) }, rx)
    }

    pub fn is_enabled(&self) -> bool {
        self.sender.is_some()
    }
}

impl EventBus for ChannelEventBus {
    fn publish(&self, event: BusEvent) {
        if let Some(ref tx) = self.sender {
            if let Err(e) = tx.send(event) {
                trace!(topic = e.0.topic().as_str(), "Bus consumer gone, event dropped");
            }
        }
    }
}

impl Default for ChannelEventBus {
    fn default() -> Self {
        Self::new_disabled()
    }
}

impl std::fmt::Debug for ChannelEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelEventBus")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
