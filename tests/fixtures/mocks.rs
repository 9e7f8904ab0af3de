// Test doubles shared by the integration tests

use async_trait::async_trait;
use bounded_pipeline::core::{Latency, LifecycleReporter, PhaseChange, RunSummary};
use bounded_pipeline::RunConfiguration;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// One lifecycle event as seen by a reporter
#[derive(Debug, Clone, PartialEq)]
pub enum LifecycleEvent {
    Started,
    Phase(PhaseChange),
    Completed { produced: usize, consumed: usize },
}

/// Records every lifecycle event in arrival order
#[derive(Debug, Default, Clone)]
pub struct RecordingReporter {
    events: Arc<Mutex<Vec<LifecycleEvent>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LifecycleEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn phases(&self) -> Vec<PhaseChange> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                LifecycleEvent::Phase(change) => Some(change),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: LifecycleEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[async_trait]
impl LifecycleReporter for RecordingReporter {
    async fn report_started(&self, _config: &RunConfiguration) {
        self.record(LifecycleEvent::Started);
    }

    async fn report_phase(&self, change: &PhaseChange) {
        self.record(LifecycleEvent::Phase(change.clone()));
    }

    async fn report_completed(&self, summary: &RunSummary) {
        self.record(LifecycleEvent::Completed {
            produced: summary.produced,
            consumed: summary.consumed,
        });
    }
}

/// Counts pauses without sleeping
#[derive(Debug, Default, Clone)]
pub struct CountingLatency {
    pauses: Arc<AtomicUsize>,
}

impl CountingLatency {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> usize {
        self.pauses.load(Ordering::SeqCst)
    }
}

impl Latency for CountingLatency {
    fn pause(&self) {
        self.pauses.fetch_add(1, Ordering::SeqCst);
    }
}
