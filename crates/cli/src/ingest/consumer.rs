use reconflux_domain::BusEvent;
use reconflux_infrastructure::BusMetrics;
use std::io::Write;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{trace, warn};

/// Drains the bus until every publisher is gone.
///
/// Discovery events are written to `out` as JSON lines, sink failures are
/// surfaced as warnings and heartbeats only feed the metrics.
pub fn spawn_consumer<W>(
    mut events: mpsc::UnboundedReceiver<BusEvent>,
    metrics: BusMetrics,
    mut out: W,
) -> JoinHandle<()>
where
    W: Write + Send + 'static,
{
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            metrics.track(&event);
            match &event {
                BusEvent::NewName(_) | BusEvent::NewAddress(_) => {
                    let written = serde_json::to_string(&event)
                        .map_err(std::io::Error::from)
                        .and_then(|line| writeln!(out, "{}", line));
                    if let Err(e) = written {
                        warn!(error = %e, "Failed to write event to output");
                    }
                }
                BusEvent::Log(message) => warn!(bus = "log", "{}", message),
                BusEvent::SetActive(identity) => trace!(identity = %identity, "Heartbeat"),
            }
        }
        if let Err(e) = out.flush() {
            warn!(error = %e, "Failed to flush output");
        }
    })
}
