// Lifecycle monitoring
// Start, phase-change and completion reports for a run

pub mod implementations;

pub use implementations::{ConsoleLifecycleReporter, NoOpLifecycleReporter};
