// Trait seams of the pipeline
// Lifecycle reporting and simulated latency are injected through these

use super::types::{PhaseChange, RunSummary};
use crate::services::config::RunConfiguration;
use async_trait::async_trait;
use mockall::automock;

/// Receives coordinator-level lifecycle events
#[automock]
#[async_trait]
pub trait LifecycleReporter: Send + Sync {
    /// The run was configured and is about to launch workers
    async fn report_started(&self, config: &RunConfiguration);

    /// The coordinator entered a new phase
    async fn report_phase(&self, change: &PhaseChange);

    /// The run reached `Done`
    async fn report_completed(&self, summary: &RunSummary);
}

// LifecycleReporter for Box<dyn LifecycleReporter>
#[async_trait]
impl LifecycleReporter for Box<dyn LifecycleReporter> {
    async fn report_started(&self, config: &RunConfiguration) {
        self.as_ref().report_started(config).await
    }

    async fn report_phase(&self, change: &PhaseChange) {
        self.as_ref().report_phase(change).await
    }

    async fn report_completed(&self, summary: &RunSummary) {
        self.as_ref().report_completed(summary).await
    }
}

/// Simulated per-item work.
///
/// Called by a worker after its slot or token is already committed, so a
/// pause never holds queue capacity.
#[automock]
pub trait Latency: Send + Sync {
    fn pause(&self);
}
