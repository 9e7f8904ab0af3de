use crate::cli::Cli;
use crate::core::RunSummary;
use crate::engine::create_console_coordinator;
use anyhow::{Context, Result};

/// Execute a run as described by the command line
pub async fn execute_run(cli: &Cli) -> Result<RunSummary> {
    // --json keeps stdout for the summary only
    let quiet = cli.quiet || cli.json;
    let summary = create_console_coordinator(cli.run_configuration(), quiet)
        .run()
        .await
        .context("pipeline run failed")?;

    if cli.json {
        let json =
            serde_json::to_string_pretty(&summary).context("failed to serialize run summary")?;
        println!("{json}");
    }

    Ok(summary)
}
