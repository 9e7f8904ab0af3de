// WorkerGroup - completion tracking for a set of homogeneous workers

use crate::core::WorkerRole;
use std::sync::Arc;
use tokio::sync::watch;

/// Counts workers that have been enrolled but not yet finished.
///
/// Each enrolled worker holds a `CompletionGuard`; dropping the guard signals
/// completion, so a worker signals exactly once whether it returns normally
/// or unwinds.
pub struct WorkerGroup {
    role: WorkerRole,
    remaining: Arc<watch::Sender<usize>>,
}

impl WorkerGroup {
    pub fn new(role: WorkerRole) -> Self {
        let (remaining, _) = watch::channel(0);
        Self {
            role,
            remaining: Arc::new(remaining),
        }
    }

    pub fn role(&self) -> WorkerRole {
        self.role
    }

    /// Enrolls one worker
    pub fn enroll(&self) -> CompletionGuard {
        self.remaining.send_modify(|remaining| *remaining += 1);
        CompletionGuard {
            remaining: Arc::clone(&self.remaining),
        }
    }

    /// Enrolls `workers` workers at once
    pub fn register(&self, workers: usize) -> Vec<CompletionGuard> {
        (0..workers).map(|_| self.enroll()).collect()
    }

    /// Workers enrolled and not yet finished
    pub fn remaining(&self) -> usize {
        *self.remaining.borrow()
    }

    /// Resolves once every enrolled worker has signalled completion
    pub async fn wait(&self) {
        let mut receiver = self.remaining.subscribe();
        // the sender lives as long as `self`, so this cannot fail
        let _ = receiver.wait_for(|remaining| *remaining == 0).await;
    }
}

/// Held by a running worker; signals completion when dropped
#[must_use = "dropping the guard signals completion immediately"]
pub struct CompletionGuard {
    remaining: Arc<watch::Sender<usize>>,
}

impl CompletionGuard {
    /// Signals completion explicitly
    pub fn complete(self) {}
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        self.remaining
            .send_modify(|remaining| *remaining = remaining.saturating_sub(1));
    }
}
