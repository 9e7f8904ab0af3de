// Queue layer - the bounded channel at the centre of the pipeline

pub mod bounded;

pub use bounded::{BoundedQueue, QueueStats};
