// Core layer - errors, trait seams and shared data types

pub mod error;
pub mod traits;
pub mod types;

pub use error::{PipelineError, PipelineResult, QueueError};
pub use traits::{Latency, LifecycleReporter};
pub use types::{
    ConsumerReport, PhaseChange, ProducerReport, RunPhase, RunSummary, Token, WorkerRole,
};
