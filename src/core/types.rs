// Data types shared across the pipeline

use crate::services::config::RunConfiguration;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// A unit of data moved from a producer to a consumer.
///
/// The token's value is the id of the producer that emitted it. `sequence`
/// is the index of the item within that producer's quota, so per-producer
/// ordering can be checked on the consuming side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    pub producer: usize,
    pub sequence: usize,
}

impl Token {
    pub fn new(producer: usize, sequence: usize) -> Self {
        Self { producer, sequence }
    }

    pub fn value(&self) -> i64 {
        self.producer as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerRole {
    Producer,
    Consumer,
}

impl fmt::Display for WorkerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Producer => f.write_str("producer"),
            Self::Consumer => f.write_str("consumer"),
        }
    }
}

/// Lifecycle of a single run. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RunPhase {
    Initializing,
    Running,
    Draining,
    Done,
}

impl RunPhase {
    /// The phase that follows this one; `Done` is terminal
    pub fn next(self) -> Option<RunPhase> {
        match self {
            Self::Initializing => Some(Self::Running),
            Self::Running => Some(Self::Draining),
            Self::Draining => Some(Self::Done),
            Self::Done => None,
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Initializing => "initializing",
            Self::Running => "running",
            Self::Draining => "draining",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Snapshot taken each time the coordinator changes phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseChange {
    pub phase: RunPhase,
    pub producers_remaining: usize,
    pub consumers_remaining: usize,
    pub queue_closed: bool,
    pub buffered: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProducerReport {
    pub worker_id: usize,
    pub produced: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConsumerReport {
    pub worker_id: usize,
    pub consumed: usize,
}

/// Summary of a completed run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub started_at: DateTime<Utc>,
    pub config: RunConfiguration,
    pub produced: usize,
    pub consumed: usize,
    pub per_producer: Vec<ProducerReport>,
    pub per_consumer: Vec<ConsumerReport>,
    pub high_water_mark: usize,
    pub elapsed_ms: u64,
    pub throughput_per_sec: f64,
}

impl RunSummary {
    /// Every produced token was consumed exactly once
    pub fn is_conserved(&self) -> bool {
        self.produced == self.consumed
            && self.produced == self.config.total_items().unwrap_or(usize::MAX)
    }
}
