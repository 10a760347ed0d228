pub mod graph_sink_repository;

pub use graph_sink_repository::SqliteGraphSink;
