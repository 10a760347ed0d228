//! In-process event bus for discovery events.
//!
//! - `ChannelEventBus`: non-blocking publisher backed by an unbounded channel
//! - `BusMetrics`: thread-safe counters fed by the consumer side
//!
//! ```rust,no_run
//! use reconflux_infrastructure::events::{BusMetrics, ChannelEventBus};
//!
//! # async fn run() {
//! let (bus, mut rx) = ChannelEventBus::new_enabled();
//! let metrics = BusMetrics::new();
//!
//! tokio::spawn(async move {
//!     while let Some(event) = rx.recv().await {
//!         metrics.track(&event);
//!     }
//! });
//! # drop(bus);
//! # }
//! ```

pub mod emitter;
pub mod metrics;

pub use emitter::ChannelEventBus;
pub use metrics::{BusMetrics, BusSummary};
