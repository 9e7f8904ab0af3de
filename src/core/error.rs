// Error taxonomy for the bounded pipeline
// Queue contract violations, configuration errors and worker failures

use super::types::WorkerRole;
use thiserror::Error;

/// Contract violations on a `BoundedQueue`
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `push` was called after `close`
    #[error("push on a closed queue")]
    Closed,

    /// `close` was called more than once
    #[error("queue closed more than once")]
    AlreadyClosed,
}

/// Errors surfaced by a pipeline run
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("queue contract violated: {0}")]
    Queue(#[from] QueueError),

    #[error("invalid configuration: {field} - {reason}")]
    Configuration { field: String, reason: String },

    #[error("{role} {worker_id} failed: {message}")]
    WorkerFailed {
        role: WorkerRole,
        worker_id: usize,
        message: String,
    },

    #[error("could not start {role} {worker_id}: {source}")]
    Spawn {
        role: WorkerRole,
        worker_id: usize,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Configuration {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn worker_failed(role: WorkerRole, worker_id: usize, message: impl Into<String>) -> Self {
        Self::WorkerFailed {
            role,
            worker_id,
            message: message.into(),
        }
    }

    pub fn spawn(role: WorkerRole, worker_id: usize, source: std::io::Error) -> Self {
        Self::Spawn {
            role,
            worker_id,
            source,
        }
    }

    /// True when the error means the coordinator's ordering was broken
    /// rather than the run being misconfigured.
    pub fn is_contract_violation(&self) -> bool {
        match self {
            Self::Queue(_) => true,
            Self::WorkerFailed { .. } => true,
            Self::Configuration { .. } | Self::Spawn { .. } => false,
        }
    }
}

pub type PipelineResult<T> = std::result::Result<T, PipelineError>;
