//! Command-line front end for the step tracker.
//!
//! The binary owns everything the core leaves to its caller: argument
//! parsing, profile defaults from the environment, output mode and the
//! diagnostic log.

use anyhow::Context;
use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use step_tracker_core::config::Config;
use step_tracker_core::report::report_rejected;
use step_tracker_core::{PersonProfile, build_day_summary, build_training_summary};

/// Env var consulted first for the log filter, before `RUST_LOG`.
pub const LOG_LEVEL_ENV: &str = "STEP_TRACKER_LOG_LEVEL";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "step-tracker")]
#[command(about = "Distance, speed and calories from step-count records")]
#[command(version)]
pub struct Cli {
    /// Body weight in kilograms (overrides STEP_TRACKER_WEIGHT_KG)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub weight: Option<f64>,

    /// Height, in the unit the distance formula expects (overrides STEP_TRACKER_HEIGHT)
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub height: Option<f64>,

    /// Print the structured summary as JSON instead of the text report
    #[arg(long, global = true)]
    pub json: bool,

    /// Print collected counters in Prometheus text format to stderr on exit
    #[arg(long, global = true)]
    pub metrics: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize a `<steps>,<duration>` record as a walk. Prints nothing for a bad record.
    Day {
        /// Record such as "5000,1h"
        record: String,
    },
    /// Summarize a `<steps>,<activity>,<duration>` record. Fails on a bad record.
    Training {
        /// Record such as "5000,Бег,1h"
        record: String,
    },
}

/// Resolve the log filter: `STEP_TRACKER_LOG_LEVEL`, then `RUST_LOG`, then `info`.
pub fn log_filter_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    get(LOG_LEVEL_ENV)
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

pub fn init_logging(filter: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_new(filter)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .init();
}

/// Install the process-wide metrics recorder and return a handle to render it.
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("failed to install metrics recorder")?;
    Ok(handle)
}

/// Produce the text to print on stdout for one invocation.
pub fn run(cli: &Cli, config: &Config) -> anyhow::Result<String> {
    let profile = config.profile(cli.weight, cli.height)?;
    match &cli.command {
        Command::Day { record } => day(record, profile, cli.json),
        Command::Training { record } => training(record, profile, cli.json),
    }
}

fn day(record: &str, profile: PersonProfile, json: bool) -> anyhow::Result<String> {
    if !json {
        return Ok(build_day_summary(record, profile.weight, profile.height));
    }
    match step_tracker_core::day_summary(record, profile) {
        Ok(summary) => Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?)),
        Err(e) => {
            report_rejected("day", &e);
            Ok(String::new())
        }
    }
}

fn training(record: &str, profile: PersonProfile, json: bool) -> anyhow::Result<String> {
    if !json {
        return build_training_summary(record, profile.weight, profile.height)
            .with_context(|| format!("cannot summarize training record {record:?}"));
    }
    let summary = step_tracker_core::training_summary(record, profile)
        .inspect_err(|e| report_rejected("training", e))
        .with_context(|| format!("cannot summarize training record {record:?}"))?;
    Ok(format!("{}\n", serde_json::to_string_pretty(&summary)?))
}
