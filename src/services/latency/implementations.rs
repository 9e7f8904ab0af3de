// Latency implementations

use crate::core::Latency;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Returns immediately
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLatency;

impl Latency for NoLatency {
    fn pause(&self) {}
}

/// Sleeps the calling worker thread for a fixed duration
#[derive(Debug, Clone, Copy)]
pub struct FixedLatency {
    duration: Duration,
}

impl FixedLatency {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Latency for FixedLatency {
    fn pause(&self) {
        thread::sleep(self.duration);
    }
}

/// Maps an optional configured delay onto a shareable latency
pub fn latency_for(delay: Option<Duration>) -> Arc<dyn Latency> {
    match delay {
        Some(duration) if !duration.is_zero() => Arc::new(FixedLatency::new(duration)),
        _ => Arc::new(NoLatency),
    }
}
