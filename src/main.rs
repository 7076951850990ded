mod clients;
mod config;
mod context;
mod runner;
mod workflow;

use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info, info_span};
use tracing_subscriber::EnvFilter;

/// asana-pr-link — GitHub Actions step that links a pull request to the Asana
/// task whose gid ends its branch name (`{feature}/{gid}`).
#[derive(Parser, Debug)]
#[command(name = "asana-pr-link", version, about)]
struct Cli {
    #[command(flatten)]
    inputs: config::RunnerInputs,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match execute(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "run failed");
            runner::set_failed(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::Config::from_inputs(cli.inputs)?;
    let _main_span = info_span!("asana_pr_link", event = %config.event_path.display()).entered();

    info!("linking pull request to Asana task");
    let outcome = workflow::run(&config).await?;

    runner::set_output(
        runner::OUTPUT_NAME,
        &outcome.output_value(),
        config.output_path.as_deref(),
    )?;
    info!(outcome = ?outcome, "done");

    Ok(())
}
