use reconflux_domain::BusEvent;

/// Publishing side of the discovery bus.
///
/// `publish` must never block the caller: implementations either enqueue the
/// event or drop it. Delivery and ordering across subscribers are the bus's
/// concern, not the publisher's.
pub trait EventBus: Send + Sync {
    fn publish(&self, event: BusEvent);
}
