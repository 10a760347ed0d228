use super::fixtures::RUN_ID;
use reconflux_application::ports::{EventBus, GraphSink, ScopeOracle};
use reconflux_application::DataManager;
use reconflux_domain::config::PipelineConfig;
use reconflux_domain::BusEvent;
use reconflux_infrastructure::database::run_migrations;
use reconflux_infrastructure::{BusMetrics, ChannelEventBus, ConfigScope, SqliteGraphSink};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// The pipeline wired with the real adapters over an in-memory database.
pub struct TestPipeline {
    pub manager: DataManager,
    pub sink: Arc<SqliteGraphSink>,
    pub pool: SqlitePool,
    pub shutdown: CancellationToken,
    events: mpsc::UnboundedReceiver<BusEvent>,
}

impl TestPipeline {
    pub async fn start(roots: &[&str]) -> Self {
        Self::start_with(roots, PipelineConfig::default()).await
    }

    pub async fn start_with(roots: &[&str], pipeline: PipelineConfig) -> Self {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        run_migrations(&pool).await.expect("Failed to migrate");

        let (bus, events) = ChannelEventBus::new_enabled();
        let bus: Arc<dyn EventBus> = Arc::new(bus);
        let scope: Arc<dyn ScopeOracle> =
            Arc::new(ConfigScope::new(roots.iter().copied(), std::iter::empty::<&str>(), RUN_ID));
        let sink = Arc::new(SqliteGraphSink::new(pool.clone()));
        let shutdown = CancellationToken::new();

        let manager = DataManager::builder()
            .with_bus(bus)
            .with_scope(scope)
            .with_sink(sink.clone() as Arc<dyn GraphSink>)
            .with_pipeline_config(pipeline)
            .with_cancellation(shutdown.clone())
            .build()
            .expect("Failed to build pipeline");

        Self {
            manager,
            sink,
            pool,
            shutdown,
            events,
        }
    }

    /// Waits for admitted work, closes the bus and returns everything it carried.
    pub async fn finish(self) -> Finished {
        self.manager.wait_idle().await;
        drop(self.manager);

        let metrics = BusMetrics::new();
        let mut events = Vec::new();
        let mut rx = self.events;
        while let Some(event) = rx.recv().await {
            metrics.track(&event);
            events.push(event);
        }

        Finished {
            events,
            metrics,
            pool: self.pool,
        }
    }
}

pub struct Finished {
    pub events: Vec<BusEvent>,
    pub metrics: BusMetrics,
    pub pool: SqlitePool,
}

impl Finished {
    pub fn discoveries(&self) -> Vec<&BusEvent> {
        self.events.iter().filter(|e| !e.is_heartbeat()).collect()
    }

    /// `(record_type, name, target)` rows in insertion order.
    pub async fn stored_records(&self) -> Vec<(String, String, String)> {
        sqlx::query_as("SELECT record_type, name, target FROM dns_records ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .expect("Failed to read dns_records")
    }
}
