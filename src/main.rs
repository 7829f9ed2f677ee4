use std::process::ExitCode;

use anyhow::{Context, Result};

use bump_versions::cli::orchestration::{run_bump_workflow, WorkflowResult};
use bump_versions::{config, logging, ui};

fn main() -> ExitCode {
    logging::init();

    match run() {
        Ok(result) => {
            ui::display_summary(&result);
            ExitCode::SUCCESS
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<WorkflowResult> {
    let root = std::env::current_dir().context("Cannot determine project root")?;
    let config = config::load_config(&root)?;
    tracing::debug!(?config, "loaded configuration");

    Ok(run_bump_workflow(&config)?)
}
