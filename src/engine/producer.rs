// Producer - pushes a fixed quota of tokens into the shared queue

use super::worker_group::CompletionGuard;
use super::worker_thread::{spawn_worker, WorkerHandle};
use crate::core::{Latency, PipelineResult, ProducerReport, Token, WorkerRole};
use crate::queue::BoundedQueue;
use std::sync::Arc;
use tracing::{debug, error};

/// Pushes `quota` tokens stamped with `worker_id`, pausing after each push.
///
/// Blocks while the queue is full. A push rejected because the queue was
/// closed is returned as an error; it means the coordinator closed the queue
/// before this producer finished.
pub fn run_producer(
    worker_id: usize,
    quota: usize,
    queue: &BoundedQueue<Token>,
    latency: &dyn Latency,
) -> PipelineResult<ProducerReport> {
    debug!(worker_id, quota, "producer started");

    for sequence in 0..quota {
        if let Err(e) = queue.push(Token::new(worker_id, sequence)) {
            error!(worker_id, sequence, error = %e, "producer push rejected");
            return Err(e.into());
        }
        latency.pause();
    }

    debug!(worker_id, produced = quota, "producer finished");
    Ok(ProducerReport {
        worker_id,
        produced: quota,
    })
}

/// Runs a single producer on its own thread
pub fn spawn_producer(
    worker_id: usize,
    quota: usize,
    queue: Arc<BoundedQueue<Token>>,
    latency: Arc<dyn Latency>,
    completion: CompletionGuard,
) -> PipelineResult<WorkerHandle<PipelineResult<ProducerReport>>> {
    spawn_worker(WorkerRole::Producer, worker_id, completion, move || {
        run_producer(worker_id, quota, &queue, latency.as_ref())
    })
}

/// Producers: one worker per completion guard, ids assigned in order
pub fn spawn_producers(
    quota: usize,
    queue: Arc<BoundedQueue<Token>>,
    latency: Arc<dyn Latency>,
    completions: Vec<CompletionGuard>,
) -> PipelineResult<Vec<WorkerHandle<PipelineResult<ProducerReport>>>> {
    completions
        .into_iter()
        .enumerate()
        .map(|(worker_id, completion)| {
            spawn_producer(
                worker_id,
                quota,
                Arc::clone(&queue),
                Arc::clone(&latency),
                completion,
            )
        })
        .collect()
}
