use clap::Parser;
use step_tracker_cli::{Cli, init_logging, init_metrics, log_filter_with, run};
use step_tracker_core::config::Config;

fn main() -> Result<(), anyhow::Error> {
    // Configure logging from `STEP_TRACKER_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = log_filter_with(|k| std::env::var(k).ok());
    init_logging(&log_env);
    tracing::debug!(%log_env, "step-tracker: log filter");
    let metrics = init_metrics()?;

    let cli = Cli::parse();
    let result = run(&cli, &Config::from_env());
    if cli.metrics {
        eprint!("{}", metrics.render());
    }
    print!("{}", result?);
    Ok(())
}
