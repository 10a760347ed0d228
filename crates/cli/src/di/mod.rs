use reconflux_application::ports::{EventBus, GraphSink, ScopeOracle};
use reconflux_application::DataManager;
use reconflux_domain::{BusEvent, Config};
use reconflux_infrastructure::{ChannelEventBus, ConfigScope, SqliteGraphSink};
use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Everything the driver needs once wiring is done.
pub struct Pipeline {
    pub manager: DataManager,
    pub scope: Arc<ConfigScope>,
    pub graph: Option<Arc<SqliteGraphSink>>,
    pub events: mpsc::UnboundedReceiver<BusEvent>,
}

impl Pipeline {
    pub fn build(
        config: &Config,
        pool: Option<SqlitePool>,
        shutdown: CancellationToken,
    ) -> anyhow::Result<Self> {
        let (bus, events) = ChannelEventBus::new_enabled();
        let scope = Arc::new(ConfigScope::from_config(&config.scope));

        let graph = pool.map(|pool| {
            Arc::new(SqliteGraphSink::new(pool).with_label(format!("sqlite:{}", config.database.path)))
        });
        let sinks: Vec<Arc<dyn GraphSink>> = graph
            .iter()
            .map(|sink| Arc::clone(sink) as Arc<dyn GraphSink>)
            .collect();

        let bus: Arc<dyn EventBus> = Arc::new(bus);
        let scope_oracle: Arc<dyn ScopeOracle> = scope.clone();
        let manager = DataManager::builder()
            .with_bus(bus)
            .with_scope(scope_oracle)
            .with_sinks(sinks)
            .with_pipeline_config(config.pipeline.clone())
            .with_cancellation(shutdown)
            .build()?;

        info!(
            run_id = %scope.run_id(),
            roots = ?scope.roots(),
            "Pipeline wired"
        );

        Ok(Self {
            manager,
            scope,
            graph,
            events,
        })
    }
}
