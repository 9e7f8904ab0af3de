// Engine layer - workers, completion tracking and orchestration

pub mod api;
pub mod consumer;
pub mod coordinator;
pub mod phase;
pub mod producer;
pub mod worker_group;
pub mod worker_thread;

pub use api::{create_console_coordinator, create_quiet_coordinator, run_pipeline};
pub use coordinator::Coordinator;
pub use phase::PhaseTracker;
pub use worker_group::{CompletionGuard, WorkerGroup};
pub use worker_thread::{spawn_worker, WorkerHandle};
