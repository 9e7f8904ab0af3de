// Worker threads - one dedicated OS thread per producer or consumer
// Reports come back over a oneshot channel so the coordinator can await them

use super::worker_group::CompletionGuard;
use crate::core::{PipelineError, PipelineResult, WorkerRole};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use tokio::sync::oneshot;
use tracing::error;

/// Handle to a worker running on its own thread.
///
/// Workers block on the queue, so each one gets a dedicated thread rather
/// than a slot in a shared pool; a pool with fewer threads than workers
/// could park every producer on a full queue before any consumer starts.
#[derive(Debug)]
pub struct WorkerHandle<T> {
    role: WorkerRole,
    worker_id: usize,
    outcome: oneshot::Receiver<thread::Result<T>>,
}

impl<T> WorkerHandle<T> {
    pub fn role(&self) -> WorkerRole {
        self.role
    }

    pub fn worker_id(&self) -> usize {
        self.worker_id
    }

    /// Awaits the worker's report, turning a panic into `WorkerFailed`
    pub async fn join(self) -> PipelineResult<T> {
        match self.outcome.await {
            Ok(Ok(report)) => Ok(report),
            Ok(Err(payload)) => {
                let message = panic_message(payload.as_ref());
                error!(role = %self.role, worker_id = self.worker_id, panic_msg = %message, "worker panicked");
                Err(PipelineError::worker_failed(self.role, self.worker_id, message))
            }
            Err(_) => Err(PipelineError::worker_failed(
                self.role,
                self.worker_id,
                "worker exited without a report",
            )),
        }
    }
}

/// Starts `work` on a named thread that owns `completion`.
///
/// The report is sent before the guard drops, so a finished group always
/// has its reports ready. If the thread cannot be created the closure is
/// dropped with it, which releases the guard.
pub fn spawn_worker<T, F>(
    role: WorkerRole,
    worker_id: usize,
    completion: CompletionGuard,
    work: F,
) -> PipelineResult<WorkerHandle<T>>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (sender, outcome) = oneshot::channel();

    thread::Builder::new()
        .name(format!("{role}-{worker_id}"))
        .spawn(move || {
            let _completion = completion;
            let result = panic::catch_unwind(AssertUnwindSafe(work));
            // receiver is gone only when the coordinator stopped waiting
            let _ = sender.send(result);
        })
        .map_err(|source| PipelineError::spawn(role, worker_id, source))?;

    Ok(WorkerHandle {
        role,
        worker_id,
        outcome,
    })
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
