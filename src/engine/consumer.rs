// Consumer - drains the shared queue until end-of-stream

use super::worker_group::CompletionGuard;
use super::worker_thread::{spawn_worker, WorkerHandle};
use crate::core::{ConsumerReport, Latency, PipelineResult, Token, WorkerRole};
use crate::queue::BoundedQueue;
use crate::services::process_token;
use std::hint::black_box;
use std::sync::Arc;
use tracing::debug;

/// Pops tokens until the queue is closed and empty.
///
/// Each token is paused on and then run through `process_token`, whose result
/// is discarded.
pub fn run_consumer(
    worker_id: usize,
    queue: &BoundedQueue<Token>,
    latency: &dyn Latency,
) -> ConsumerReport {
    debug!(worker_id, "consumer started");

    let mut consumed = 0;
    while let Some(token) = queue.pop() {
        latency.pause();
        black_box(process_token(&token));
        consumed += 1;
    }

    debug!(worker_id, consumed, "consumer reached end of stream");
    ConsumerReport {
        worker_id,
        consumed,
    }
}

/// Runs a single consumer on its own thread
pub fn spawn_consumer(
    worker_id: usize,
    queue: Arc<BoundedQueue<Token>>,
    latency: Arc<dyn Latency>,
    completion: CompletionGuard,
) -> PipelineResult<WorkerHandle<ConsumerReport>> {
    spawn_worker(WorkerRole::Consumer, worker_id, completion, move || {
        run_consumer(worker_id, &queue, latency.as_ref())
    })
}

/// Consumers: one worker per completion guard, ids assigned in order
pub fn spawn_consumers(
    queue: Arc<BoundedQueue<Token>>,
    latency: Arc<dyn Latency>,
    completions: Vec<CompletionGuard>,
) -> PipelineResult<Vec<WorkerHandle<ConsumerReport>>> {
    completions
        .into_iter()
        .enumerate()
        .map(|(worker_id, completion)| {
            spawn_consumer(
                worker_id,
                Arc::clone(&queue),
                Arc::clone(&latency),
                completion,
            )
        })
        .collect()
}
