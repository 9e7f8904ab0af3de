use crate::services::RunConfiguration;
use clap::Parser;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "bounded_pipeline")]
#[command(about = "Producers and consumers sharing one bounded buffer")]
#[command(version)]
pub struct Cli {
    /// Number of tokens the shared buffer can hold
    #[arg(short = 'b', long, default_value = "100")]
    pub buffer_size: usize,

    /// Number of producer workers
    #[arg(short = 'p', long, default_value = "5")]
    pub producers: usize,

    /// Number of consumer workers
    #[arg(short = 'c', long, default_value = "5")]
    pub consumers: usize,

    /// Number of tokens each producer adds to the buffer
    #[arg(short = 'e', long, default_value = "100")]
    pub elements: usize,

    /// Producers sleep after each push to simulate blocking I/O
    #[arg(short = 'i', long)]
    pub producer_sleep: bool,

    /// Consumers sleep after each pop to simulate computation
    #[arg(short = 'j', long)]
    pub consumer_sleep: bool,

    /// Simulated latency per item in milliseconds
    #[arg(long, default_value = "1")]
    pub sleep_ms: u64,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Suppress the lifecycle report
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn run_configuration(&self) -> RunConfiguration {
        let delay = Duration::from_millis(self.sleep_ms);
        RunConfiguration::new(
            self.buffer_size,
            self.producers,
            self.consumers,
            self.elements,
        )
        .with_producer_delay(self.producer_sleep.then_some(delay))
        .with_consumer_delay(self.consumer_sleep.then_some(delay))
    }
}
