// Simulated latency
// Stand-ins for blocking I/O on the producer side and computation on the consumer side

pub mod implementations;

pub use implementations::{latency_for, FixedLatency, NoLatency};
