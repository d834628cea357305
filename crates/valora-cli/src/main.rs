use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod evaluation;

use cli::Cli;
use config::LogFormat;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config_path = config::config_path(cli.config.as_deref())?;
    let loaded = config::load_config(&config_path)?;
    let config = loaded.config;

    // Logs go to stderr; stdout carries the report.
    if cli.log_json || config.log_format == LogFormat::Json {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    if let Some(from) = loaded.migrated_from {
        tracing::info!(
            path = %config_path.display(),
            from,
            to = config::CURRENT_VERSION,
            "migrated config"
        );
    }

    commands::run(cli.command, &config, &config_path)
}
