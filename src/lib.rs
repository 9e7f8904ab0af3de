//! Bounded-buffer producer/consumer harness.
//!
//! Producers push tokens into a fixed-capacity [`queue::BoundedQueue`],
//! consumers drain it, and [`engine::Coordinator`] closes the queue once every
//! producer has finished and returns once every consumer has drained it.

pub mod cli;
pub mod core;
pub mod engine;
pub mod queue;
pub mod services;

pub use crate::core::{PipelineError, PipelineResult, QueueError, RunPhase, RunSummary, Token};
pub use engine::{run_pipeline, Coordinator, WorkerGroup};
pub use queue::BoundedQueue;
pub use services::RunConfiguration;
