// Lifecycle reporter implementations

use crate::core::{LifecycleReporter, PhaseChange, RunPhase, RunSummary};
use crate::services::config::RunConfiguration;
use async_trait::async_trait;

/// Prints lifecycle events to stdout
#[derive(Debug, Default, Clone)]
pub struct ConsoleLifecycleReporter {
    quiet: bool,
}

impl ConsoleLifecycleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

#[async_trait]
impl LifecycleReporter for ConsoleLifecycleReporter {
    async fn report_started(&self, config: &RunConfiguration) {
        if !self.quiet {
            println!(
                "🚀 Parameters: p={}, c={}, b={}, e={}, i={}, j={}",
                config.producer_count(),
                config.consumer_count(),
                config.capacity(),
                config.items_per_producer(),
                config.producer_delay().is_some(),
                config.consumer_delay().is_some(),
            );
        }
    }

    async fn report_phase(&self, change: &PhaseChange) {
        if self.quiet {
            return;
        }
        match change.phase {
            RunPhase::Draining => println!(
                "📦 Producers finished, queue closed with {} buffered",
                change.buffered
            ),
            RunPhase::Done => println!("🏁 Consumers drained the queue"),
            _ => {}
        }
    }

    async fn report_completed(&self, summary: &RunSummary) {
        if !self.quiet {
            println!(
                "✅ Completed! Produced: {}, Consumed: {}, Peak buffer: {}/{}, Elapsed: {}ms ({:.0} items/s)",
                summary.produced,
                summary.consumed,
                summary.high_water_mark,
                summary.config.capacity(),
                summary.elapsed_ms,
                summary.throughput_per_sec,
            );
        }
    }
}

/// Ignores every event (tests and benchmarks)
#[derive(Debug, Default, Clone)]
pub struct NoOpLifecycleReporter;

impl NoOpLifecycleReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LifecycleReporter for NoOpLifecycleReporter {
    async fn report_started(&self, _config: &RunConfiguration) {}

    async fn report_phase(&self, _change: &PhaseChange) {}

    async fn report_completed(&self, _summary: &RunSummary) {}
}
