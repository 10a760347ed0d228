use reconflux_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(config_path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        max_concurrency = config.pipeline.max_concurrency,
        domains = config.scope.domains.len(),
        database = config.database.enabled,
        "Configuration loaded"
    );

    Ok(config)
}
