use std::path::PathBuf;

use clap::{Parser, Subcommand};
use valora_core::models::subject::Gender;

#[derive(Debug, Parser)]
#[command(
    name = "valora",
    version,
    about = "Psychosocial risk-factor scoring and concept generation"
)]
pub struct Cli {
    /// Config file to use instead of the per-user one.
    #[arg(long, global = true, env = "VALORA_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON regardless of the configured format.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the built-in batteries.
    Batteries,

    /// Aggregate an evaluation and print the averages, profile and alerts.
    Score {
        /// Evaluation JSON file.
        evaluation: PathBuf,

        /// Print machine-readable JSON instead of the text summary.
        #[arg(long)]
        json: bool,
    },

    /// Generate the psychological concept for an evaluation.
    Concept {
        /// Evaluation JSON file.
        evaluation: PathBuf,

        /// Override the subject's gender (masculine, feminine, unspecified).
        #[arg(long)]
        gender: Option<Gender>,
    },

    /// Inspect or create the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration.
    Show,

    /// Write a fresh config file.
    Init {
        /// Battery used when an evaluation names none.
        #[arg(long, default_value = "valoracion_psicologica")]
        battery: String,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}
