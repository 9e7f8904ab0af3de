// Coordinator - lifecycle of a run
// Launch producers and consumers, close the queue once producers finish, wait for the drain

use super::consumer::spawn_consumers;
use super::phase::PhaseTracker;
use super::producer::spawn_producers;
use super::worker_group::WorkerGroup;
use crate::core::{
    Latency, LifecycleReporter, PipelineError, PipelineResult, RunPhase, RunSummary, Token,
    WorkerRole,
};
use crate::queue::BoundedQueue;
use crate::services::{latency_for, RunConfiguration};
use chrono::Utc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Runs one producer/consumer session over a single bounded queue.
///
/// The queue is closed exactly once, after every producer has signalled
/// completion, and `run` returns only after every consumer has signalled
/// completion. A worker that never returns blocks the run forever.
pub struct Coordinator<R> {
    config: RunConfiguration,
    reporter: R,
    producer_latency: Arc<dyn Latency>,
    consumer_latency: Arc<dyn Latency>,
}

impl<R> Coordinator<R>
where
    R: LifecycleReporter,
{
    pub fn new(config: RunConfiguration, reporter: R) -> Self {
        let producer_latency = latency_for(config.producer_delay());
        let consumer_latency = latency_for(config.consumer_delay());
        Self {
            config,
            reporter,
            producer_latency,
            consumer_latency,
        }
    }

    /// Replaces the producer delay derived from the configuration
    pub fn with_producer_latency(mut self, latency: impl Latency + 'static) -> Self {
        self.producer_latency = Arc::new(latency);
        self
    }

    /// Replaces the consumer delay derived from the configuration
    pub fn with_consumer_latency(mut self, latency: impl Latency + 'static) -> Self {
        self.consumer_latency = Arc::new(latency);
        self
    }

    pub fn config(&self) -> &RunConfiguration {
        &self.config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub async fn run(&self) -> PipelineResult<RunSummary> {
        self.config.validate()?;
        let capacity = self.config.queue_capacity()?;

        let started_at = Utc::now();
        let start_time = Instant::now();

        let queue: Arc<BoundedQueue<Token>> = Arc::new(BoundedQueue::new(capacity));
        let producers = WorkerGroup::new(WorkerRole::Producer);
        let consumers = WorkerGroup::new(WorkerRole::Consumer);
        let producer_completions = producers.register(self.config.producer_count());
        let consumer_completions = consumers.register(self.config.consumer_count());
        let mut phase = PhaseTracker::new();

        self.reporter.report_started(&self.config).await;
        self.reporter
            .report_phase(&phase.snapshot(&producers, &consumers, &queue))
            .await;

        let producer_handles = spawn_producers(
            self.config.items_per_producer(),
            Arc::clone(&queue),
            Arc::clone(&self.producer_latency),
            producer_completions,
        )
        .inspect_err(|e| abandon(&queue, e))?;
        let consumer_handles = spawn_consumers(
            Arc::clone(&queue),
            Arc::clone(&self.consumer_latency),
            consumer_completions,
        )
        .inspect_err(|e| abandon(&queue, e))?;

        self.enter(&mut phase, &producers, &consumers, &queue).await;

        producers.wait().await;
        queue.close()?;
        self.enter(&mut phase, &producers, &consumers, &queue).await;

        consumers.wait().await;
        self.enter(&mut phase, &producers, &consumers, &queue).await;

        let mut per_producer = Vec::with_capacity(producer_handles.len());
        for handle in producer_handles {
            per_producer.push(handle.join().await??);
        }
        let mut per_consumer = Vec::with_capacity(consumer_handles.len());
        for handle in consumer_handles {
            per_consumer.push(handle.join().await?);
        }

        let produced: usize = per_producer.iter().map(|report| report.produced).sum();
        let consumed: usize = per_consumer.iter().map(|report| report.consumed).sum();
        if produced != consumed {
            warn!(produced, consumed, "token count mismatch after drain");
        }

        let elapsed = start_time.elapsed();
        let throughput_per_sec = if elapsed.as_secs_f64() > 0.0 {
            consumed as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        let summary = RunSummary {
            started_at,
            config: self.config.clone(),
            produced,
            consumed,
            per_producer,
            per_consumer,
            high_water_mark: queue.stats().high_water_mark,
            elapsed_ms: elapsed_millis(elapsed),
            throughput_per_sec,
        };
        self.reporter.report_completed(&summary).await;

        Ok(summary)
    }

    async fn enter(
        &self,
        phase: &mut PhaseTracker,
        producers: &WorkerGroup,
        consumers: &WorkerGroup,
        queue: &BoundedQueue<Token>,
    ) -> RunPhase {
        let next = phase.advance();
        let change = phase.snapshot(producers, consumers, queue);
        info!(
            phase = %next,
            producers_remaining = change.producers_remaining,
            consumers_remaining = change.consumers_remaining,
            buffered = change.buffered,
            "phase change"
        );
        self.reporter.report_phase(&change).await;
        next
    }
}

fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

/// Closes the queue after a worker failed to start so the ones already
/// running reach end-of-stream or a rejected push instead of blocking.
fn abandon(queue: &BoundedQueue<Token>, cause: &PipelineError) {
    error!(error = %cause, "worker launch failed, closing queue");
    // a second close is impossible here, the coordinator has not closed yet
    let _ = queue.close();
}
