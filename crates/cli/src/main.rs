//! # reconflux
//!
//! Streams resolved DNS answers and ASN observations (JSON lines) through the
//! ingestion pipeline, persists derived facts and prints discovery events.

mod bootstrap;
mod di;
mod ingest;

use clap::Parser;
use reconflux_application::ports::ScopeOracle;
use reconflux_domain::CliOverrides;
use reconflux_infrastructure::BusMetrics;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "reconflux")]
#[command(version)]
#[command(about = "DNS-result ingestion and fan-out pipeline")]
struct Cli {
    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// JSON-lines input file, `-` for stdin
    #[arg(short = 'i', long, default_value = "-")]
    input: String,

    /// Root domain in scope (repeatable, adds to the configured list)
    #[arg(short = 'd', long = "domain")]
    domains: Vec<String>,

    /// SQLite database path
    #[arg(long)]
    database: Option<String>,

    /// Do not persist facts
    #[arg(long)]
    no_database: bool,

    /// Maximum concurrently processed queries
    #[arg(short = 'n', long)]
    max_concurrency: Option<usize>,

    /// Run identifier recorded with every fact
    #[arg(long)]
    run_id: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short = 'l', long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let overrides = CliOverrides {
        max_concurrency: cli.max_concurrency,
        database_path: cli.database.clone(),
        disable_database: cli.no_database,
        log_level: cli.log_level.clone(),
        domains: cli.domains.clone(),
        run_id: cli.run_id.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    if config.scope.domains.is_empty() {
        warn!("No root domains in scope; only CNAME, NS and MX targets will be re-queued");
    }

    let pool = if config.database.enabled {
        Some(bootstrap::init_database(&config.database).await?)
    } else {
        info!("Database disabled; facts will not be persisted");
        None
    };

    let shutdown = CancellationToken::new();
    let pipeline = di::Pipeline::build(&config, pool, shutdown.clone())?;

    let ctrl_c_token = shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown requested");
            ctrl_c_token.cancel();
        }
    });

    let metrics = BusMetrics::new();
    let consumer = ingest::spawn_consumer(pipeline.events, metrics.clone(), std::io::stdout());

    let reader = ingest::open(&cli.input).await?;
    let stats = ingest::run(reader, &pipeline.manager, &shutdown).await?;

    pipeline.manager.wait_idle().await;
    let run_id = pipeline.scope.run_id();
    // Dropping the manager closes the bus so the consumer can finish.
    drop(pipeline.manager);
    if let Err(e) = consumer.await {
        error!(error = %e, "Event consumer failed");
    }

    let summary = metrics.summary();
    info!(
        run_id = %run_id,
        queries = stats.queries,
        infrastructure = stats.infrastructure,
        malformed = stats.malformed,
        cancelled = stats.cancelled,
        names = summary.names,
        addresses = summary.addresses,
        sink_failures = summary.logs,
        "Ingestion finished"
    );
    for (domain, count) in metrics.top_domains(5) {
        info!(domain = %domain, names = count, "Top discovery domain");
    }

    if let Some(graph) = pipeline.graph {
        match graph.count_by_type(&run_id).await {
            Ok(counts) => {
                for (record_type, total) in counts {
                    info!(record_type = %record_type, total, "Stored facts");
                }
            }
            Err(e) => warn!(error = %e, "Could not summarize stored facts"),
        }
    }

    Ok(())
}
