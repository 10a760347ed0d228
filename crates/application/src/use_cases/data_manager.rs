use crate::ports::{Admission, DiscoveryHandler, EventBus, GraphSink, ScopeOracle};
use crate::services::{AdmissionController, BackoffSchedule, LivenessSignal, SinkFanout, TextMiner};
use crate::use_cases::ingest::{RecordDispatcher, RecordHandlers};
use crate::use_cases::RecordInfrastructureUseCase;
use async_trait::async_trait;
use reconflux_domain::config::PipelineConfig;
use reconflux_domain::{AsnRecord, DomainError, ResolvedQuery};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// The ingestion pipeline: admission control in front of the record
/// dispatcher, plus the ungated infrastructure path.
pub struct DataManager {
    dispatcher: RecordDispatcher,
    infrastructure: RecordInfrastructureUseCase,
    admission: AdmissionController,
    liveness: LivenessSignal,
}

impl DataManager {
    pub fn builder() -> DataManagerBuilder {
        DataManagerBuilder::default()
    }

    pub fn identity(&self) -> &str {
        self.liveness.identity()
    }

    pub fn in_flight(&self) -> usize {
        self.admission.in_flight()
    }

    /// Resolves once every admitted query has been fully processed.
    pub async fn wait_idle(&self) {
        self.admission.wait_idle().await;
    }
}

#[async_trait]
impl DiscoveryHandler for DataManager {
    async fn on_dns_result(&self, query: ResolvedQuery) -> Admission {
        let dispatcher = self.dispatcher.clone();
        self.admission
            .submit(async move {
                dispatcher.dispatch(query).await;
            })
            .await
    }

    async fn on_asn_result(&self, record: AsnRecord) {
        self.infrastructure.execute(&record).await;
    }
}

impl std::fmt::Debug for DataManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataManager")
            .field("identity", &self.identity())
            .field("admission", &self.admission)
            .finish()
    }
}

/// Collects the pipeline's collaborators. The bus and scope authority are
/// mandatory; sinks are optional.
#[derive(Default)]
pub struct DataManagerBuilder {
    bus: Option<Arc<dyn EventBus>>,
    scope: Option<Arc<dyn ScopeOracle>>,
    sinks: Vec<Arc<dyn GraphSink>>,
    pipeline: PipelineConfig,
    shutdown: Option<CancellationToken>,
}

impl DataManagerBuilder {
    pub fn with_bus(mut self, bus: Arc<dyn EventBus>) -> Self {
        self.bus = Some(bus);
        self
    }

    pub fn with_scope(mut self, scope: Arc<dyn ScopeOracle>) -> Self {
        self.scope = Some(scope);
        self
    }

    pub fn with_sink(mut self, sink: Arc<dyn GraphSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn with_sinks(mut self, sinks: impl IntoIterator<Item = Arc<dyn GraphSink>>) -> Self {
        self.sinks.extend(sinks);
        self
    }

    pub fn with_pipeline_config(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = Some(token);
        self
    }

    pub fn build(self) -> Result<DataManager, DomainError> {
        let bus = self.bus.ok_or(DomainError::MissingDependency("event bus"))?;
        let scope = self
            .scope
            .ok_or(DomainError::MissingDependency("scope oracle"))?;

        if self.sinks.is_empty() {
            warn!("No graph sinks configured; facts will not be persisted");
        }

        let liveness = LivenessSignal::new(bus.clone(), self.pipeline.service_name.as_str());
        let fanout = SinkFanout::new(self.sinks, bus.clone());
        let miner = TextMiner::new(scope.clone(), bus.clone(), liveness.clone())?;

        let handlers = RecordHandlers::new(
            fanout.clone(),
            bus,
            scope.clone(),
            Arc::new(miner),
            liveness.clone(),
        );
        let dispatcher = RecordDispatcher::new(handlers, liveness.clone());
        let infrastructure = RecordInfrastructureUseCase::new(fanout.clone(), scope, liveness.clone());

        let mut admission = AdmissionController::new(self.pipeline.max_concurrency, liveness.clone())
            .with_backoff(BackoffSchedule::new(self.pipeline.backoff()))
            .with_heartbeat_interval(self.pipeline.heartbeat_interval());
        if let Some(token) = self.shutdown {
            admission = admission.with_cancellation(token);
        }

        info!(
            identity = liveness.identity(),
            max_concurrency = admission.capacity(),
            sinks = fanout.sink_count(),
            "Data manager ready"
        );

        Ok(DataManager {
            dispatcher,
            infrastructure,
            admission,
            liveness,
        })
    }
}
