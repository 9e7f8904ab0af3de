// High-level entry points
// Convenience wrappers around Coordinator for the common reporters

use super::Coordinator;
use crate::core::{PipelineResult, RunSummary};
use crate::services::{ConsoleLifecycleReporter, NoOpLifecycleReporter, RunConfiguration};

/// Coordinator reporting to stdout; `quiet` suppresses the console lines
pub fn create_console_coordinator(
    config: RunConfiguration,
    quiet: bool,
) -> Coordinator<ConsoleLifecycleReporter> {
    let reporter = if quiet {
        ConsoleLifecycleReporter::quiet()
    } else {
        ConsoleLifecycleReporter::new()
    };
    Coordinator::new(config, reporter)
}

/// Coordinator that reports nothing (tests, benchmarks)
pub fn create_quiet_coordinator(config: RunConfiguration) -> Coordinator<NoOpLifecycleReporter> {
    Coordinator::new(config, NoOpLifecycleReporter::new())
}

/// Runs a whole session with no reporting
pub async fn run_pipeline(config: RunConfiguration) -> PipelineResult<RunSummary> {
    create_quiet_coordinator(config).run().await
}
