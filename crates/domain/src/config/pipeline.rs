use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Ingestion pipeline tuning
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    /// Identity published with every heartbeat (default: "Data Manager")
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Maximum number of resolved queries processed concurrently (default: 1)
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Backoff schedule in milliseconds while waiting for an admission slot.
    /// The last entry repeats once the schedule is exhausted.
    #[serde(default = "default_backoff_ms")]
    pub backoff_ms: Vec<u64>,

    /// Heartbeat period while a submission waits for admission (default: 1000)
    #[serde(default = "default_heartbeat_interval_ms")]
    pub heartbeat_interval_ms: u64,
}

impl PipelineConfig {
    pub fn backoff(&self) -> Vec<Duration> {
        self.backoff_ms
            .iter()
            .copied()
            .map(Duration::from_millis)
            .collect()
    }

    pub fn heartbeat_interval(&self) -> Duration {
        Duration::from_millis(self.heartbeat_interval_ms)
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            max_concurrency: default_max_concurrency(),
            backoff_ms: default_backoff_ms(),
            heartbeat_interval_ms: default_heartbeat_interval_ms(),
        }
    }
}

fn default_service_name() -> String {
    "Data Manager".to_string()
}

fn default_max_concurrency() -> usize {
    1
}

pub fn default_backoff_ms() -> Vec<u64> {
    vec![25, 50, 75, 100, 150, 250, 500]
}

fn default_heartbeat_interval_ms() -> u64 {
    1000
}
