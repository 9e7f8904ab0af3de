// Run configuration

use crate::core::{PipelineError, PipelineResult};
use serde::Serialize;
use std::num::NonZeroUsize;
use std::time::Duration;

pub const DEFAULT_CAPACITY: usize = 100;
pub const DEFAULT_PRODUCERS: usize = 5;
pub const DEFAULT_CONSUMERS: usize = 5;
pub const DEFAULT_ITEMS_PER_PRODUCER: usize = 100;

/// Immutable settings for a single run, read once by the coordinator
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunConfiguration {
    capacity: usize,
    producer_count: usize,
    consumer_count: usize,
    items_per_producer: usize,
    producer_delay: Option<Duration>,
    consumer_delay: Option<Duration>,
}

impl RunConfiguration {
    pub fn new(
        capacity: usize,
        producer_count: usize,
        consumer_count: usize,
        items_per_producer: usize,
    ) -> Self {
        Self {
            capacity,
            producer_count,
            consumer_count,
            items_per_producer,
            producer_delay: None,
            consumer_delay: None,
        }
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_producers(mut self, producer_count: usize) -> Self {
        self.producer_count = producer_count;
        self
    }

    pub fn with_consumers(mut self, consumer_count: usize) -> Self {
        self.consumer_count = consumer_count;
        self
    }

    pub fn with_items_per_producer(mut self, items_per_producer: usize) -> Self {
        self.items_per_producer = items_per_producer;
        self
    }

    pub fn with_producer_delay(mut self, delay: Option<Duration>) -> Self {
        self.producer_delay = delay;
        self
    }

    pub fn with_consumer_delay(mut self, delay: Option<Duration>) -> Self {
        self.consumer_delay = delay;
        self
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn producer_count(&self) -> usize {
        self.producer_count
    }

    pub fn consumer_count(&self) -> usize {
        self.consumer_count
    }

    pub fn items_per_producer(&self) -> usize {
        self.items_per_producer
    }

    pub fn producer_delay(&self) -> Option<Duration> {
        self.producer_delay
    }

    pub fn consumer_delay(&self) -> Option<Duration> {
        self.consumer_delay
    }

    /// Total number of tokens the run will move through the queue
    pub fn total_items(&self) -> PipelineResult<usize> {
        self.producer_count
            .checked_mul(self.items_per_producer)
            .ok_or_else(|| {
                PipelineError::configuration(
                    "items_per_producer",
                    "producer_count * items_per_producer overflows",
                )
            })
    }

    /// Queue capacity as a non-zero value, rejecting zero
    pub fn queue_capacity(&self) -> PipelineResult<NonZeroUsize> {
        NonZeroUsize::new(self.capacity)
            .ok_or_else(|| PipelineError::configuration("capacity", "must be at least 1"))
    }

    /// Rejects configurations the coordinator must never run with
    pub fn validate(&self) -> PipelineResult<()> {
        self.queue_capacity()?;
        if self.producer_count == 0 {
            return Err(PipelineError::configuration(
                "producer_count",
                "must be at least 1",
            ));
        }
        if self.consumer_count == 0 {
            return Err(PipelineError::configuration(
                "consumer_count",
                "must be at least 1",
            ));
        }
        if self.items_per_producer == 0 {
            return Err(PipelineError::configuration(
                "items_per_producer",
                "must be at least 1",
            ));
        }
        self.total_items()?;
        Ok(())
    }
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self::new(
            DEFAULT_CAPACITY,
            DEFAULT_PRODUCERS,
            DEFAULT_CONSUMERS,
            DEFAULT_ITEMS_PER_PRODUCER,
        )
    }
}
