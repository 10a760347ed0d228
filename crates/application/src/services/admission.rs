use crate::ports::Admission;
use crate::services::LivenessSignal;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Semaphore, TryAcquireError};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Capped backoff used while a submission waits for a free slot.
///
/// `delay(n)` is `delays[min(n, len - 1)]`: the schedule is walked once and
/// its last entry then repeats.
#[derive(Debug, Clone)]
pub struct BackoffSchedule {
    delays: Arc<[Duration]>,
}

impl BackoffSchedule {
    pub fn new(delays: Vec<Duration>) -> Self {
        Self {
            delays: delays.into(),
        }
    }

    pub fn from_millis(delays: &[u64]) -> Self {
        Self::new(delays.iter().copied().map(Duration::from_millis).collect())
    }

    pub fn delay(&self, attempt: usize) -> Duration {
        let last = self.delays.len().saturating_sub(1);
        self.delays
            .get(attempt.min(last))
            .copied()
            .unwrap_or_default()
    }

    /// Infinite sequence of consecutive delays for one blocked submission.
    pub fn iter(&self) -> impl Iterator<Item = Duration> + '_ {
        (0..).map(move |attempt| self.delay(attempt))
    }
}

impl Default for BackoffSchedule {
    fn default() -> Self {
        Self::from_millis(&[25, 50, 75, 100, 150, 250, 500])
    }
}

/// Bounds the number of concurrently running pipeline executions.
///
/// `submit` never blocks the caller past admission: once a slot is acquired
/// the task is spawned and its permit travels with it, so the slot is freed
/// on every exit path of the task, panics included. While no slot is free
/// the caller backs off per [`BackoffSchedule`], publishes a heartbeat every
/// `heartbeat_interval`, and gives up as soon as the cancellation token
/// fires.
pub struct AdmissionController {
    gate: Arc<Semaphore>,
    capacity: usize,
    backoff: BackoffSchedule,
    heartbeat_interval: Duration,
    liveness: LivenessSignal,
    shutdown: CancellationToken,
}

impl AdmissionController {
    pub fn new(capacity: usize, liveness: LivenessSignal) -> Self {
        let capacity = capacity.max(1);
        Self {
            gate: Arc::new(Semaphore::new(capacity)),
            capacity,
            backoff: BackoffSchedule::default(),
            heartbeat_interval: Duration::from_secs(1),
            liveness,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_backoff(mut self, backoff: BackoffSchedule) -> Self {
        self.backoff = backoff;
        self
    }

    pub fn with_heartbeat_interval(mut self, interval: Duration) -> Self {
        self.heartbeat_interval = interval;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of admitted tasks that have not finished yet.
    pub fn in_flight(&self) -> usize {
        self.capacity - self.gate.available_permits().min(self.capacity)
    }

    pub async fn submit<F>(&self, task: F) -> Admission
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut attempt = 0usize;
        let mut last_heartbeat = Instant::now();

        loop {
            if self.shutdown.is_cancelled() {
                debug!(attempt, "Submission abandoned: shutdown requested");
                return Admission::Cancelled;
            }

            match Arc::clone(&self.gate).try_acquire_owned() {
                Ok(permit) => {
                    if attempt > 0 {
                        trace!(attempt, "Admission slot acquired after backoff");
                    }
                    tokio::spawn(async move {
                        let _permit = permit;
                        task.await;
                    });
                    return Admission::Admitted;
                }
                Err(TryAcquireError::Closed) => {
                    debug!("Submission abandoned: admission gate closed");
                    return Admission::Cancelled;
                }
                Err(TryAcquireError::NoPermits) => {}
            }

            let delay = self.backoff.delay(attempt);
            attempt += 1;

            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    debug!(attempt, "Submission abandoned while backing off");
                    return Admission::Cancelled;
                }
                _ = tokio::time::sleep(delay) => {}
            }

            if last_heartbeat.elapsed() >= self.heartbeat_interval {
                self.liveness.beat();
                last_heartbeat = Instant::now();
            }
        }
    }

    /// Waits until every admitted task has finished.
    pub async fn wait_idle(&self) {
        let permits = u32::try_from(self.capacity).unwrap_or(u32::MAX);
        if let Ok(all) = self.gate.acquire_many(permits).await {
            drop(all);
        }
    }
}

impl std::fmt::Debug for AdmissionController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdmissionController")
            .field("capacity", &self.capacity)
            .field("in_flight", &self.in_flight())
            .field("cancelled", &self.shutdown.is_cancelled())
            .finish()
    }
}
