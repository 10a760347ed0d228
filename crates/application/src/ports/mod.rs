pub mod discovery_handler;
pub mod event_bus;
pub mod graph_sink;
pub mod scope_oracle;

pub use discovery_handler::{Admission, DiscoveryHandler};
pub use event_bus::EventBus;
pub use graph_sink::GraphSink;
pub use scope_oracle::ScopeOracle;
