// Phase tracking for a run

use super::worker_group::WorkerGroup;
use crate::core::{PhaseChange, RunPhase};
use crate::queue::BoundedQueue;

/// Forward-only cursor over `RunPhase`
#[derive(Debug)]
pub struct PhaseTracker {
    current: RunPhase,
}

impl PhaseTracker {
    pub fn new() -> Self {
        Self {
            current: RunPhase::Initializing,
        }
    }

    pub fn current(&self) -> RunPhase {
        self.current
    }

    /// Moves to the next phase. Stays at `Done` once reached.
    pub fn advance(&mut self) -> RunPhase {
        if let Some(next) = self.current.next() {
            self.current = next;
        }
        self.current
    }

    pub fn snapshot<T>(
        &self,
        producers: &WorkerGroup,
        consumers: &WorkerGroup,
        queue: &BoundedQueue<T>,
    ) -> PhaseChange {
        let stats = queue.stats();
        PhaseChange {
            phase: self.current,
            producers_remaining: producers.remaining(),
            consumers_remaining: consumers.remaining(),
            queue_closed: stats.closed,
            buffered: stats.len,
        }
    }
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new()
    }
}
