pub mod database;
pub mod events;
pub mod repositories;
pub mod scope;

pub use database::{create_pool, run_migrations};
pub use events::{BusMetrics, BusSummary, ChannelEventBus};
pub use repositories::SqliteGraphSink;
pub use scope::ConfigScope;
