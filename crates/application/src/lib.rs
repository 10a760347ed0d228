pub mod ports;
pub mod services;
pub mod use_cases;

pub use ports::{Admission, DiscoveryHandler, EventBus, GraphSink, ScopeOracle};
pub use use_cases::{DataManager, DataManagerBuilder};
