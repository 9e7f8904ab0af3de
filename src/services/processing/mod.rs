// Token processing
// Simulated consumer-side work

pub mod worker;

pub use worker::process_token;
