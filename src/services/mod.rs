// Service layer - configuration, latency, monitoring and per-token work

pub mod config;
pub mod latency;
pub mod monitoring;
pub mod processing;

pub use config::RunConfiguration;
pub use latency::{latency_for, FixedLatency, NoLatency};
pub use monitoring::{ConsoleLifecycleReporter, NoOpLifecycleReporter};
pub use processing::process_token;
