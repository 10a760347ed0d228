pub mod consumer;
pub mod input;

pub use consumer::spawn_consumer;
pub use input::{open, parse_line, InputRecord};

use reconflux_application::ports::{Admission, DiscoveryHandler};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub queries: u64,
    pub infrastructure: u64,
    pub malformed: u64,
    pub cancelled: bool,
}

/// Feeds every input line to `handler` until the input ends or shutdown is
/// requested. Malformed lines are logged and skipped.
pub async fn run<R>(
    reader: R,
    handler: &dyn DiscoveryHandler,
    shutdown: &CancellationToken,
) -> anyhow::Result<IngestStats>
where
    R: AsyncBufRead + Unpin,
{
    let mut stats = IngestStats::default();
    let mut lines = reader.lines();
    let mut line_no = 0u64;

    loop {
        let line = tokio::select! {
            biased;
            _ = shutdown.cancelled() => {
                stats.cancelled = true;
                break;
            }
            line = lines.next_line() => line?,
        };
        let Some(line) = line else { break };
        line_no += 1;

        match parse_line(&line) {
            Ok(None) => {}
            Ok(Some(InputRecord::Dns(query))) => {
                stats.queries += 1;
                if handler.on_dns_result(query).await == Admission::Cancelled {
                    stats.cancelled = true;
                    break;
                }
            }
            Ok(Some(InputRecord::Asn(record))) => {
                stats.infrastructure += 1;
                handler.on_asn_result(record).await;
            }
            Err(e) => {
                stats.malformed += 1;
                warn!(line = line_no, error = %e, "Skipping input line");
            }
        }
    }

    if stats.cancelled {
        info!(line = line_no, "Ingestion interrupted");
    } else {
        debug!(lines = line_no, "Input exhausted");
    }
    Ok(stats)
}
