// Configuration
// The immutable snapshot a run is launched with

pub mod implementations;

pub use implementations::RunConfiguration;
