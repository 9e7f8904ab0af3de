// Throughput sanity checks
use bounded_pipeline::{run_pipeline, RunConfiguration};
use std::time::{Duration, Instant};
use tokio::time::timeout;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_default_configuration_completes_quickly() {
    let start = Instant::now();

    let summary = timeout(Duration::from_secs(30), run_pipeline(RunConfiguration::default()))
        .await
        .expect("default run should terminate")
        .unwrap();

    assert_eq!(summary.consumed, 500);
    assert!(start.elapsed() < Duration::from_secs(30));
    assert!(summary.throughput_per_sec > 0.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_large_run_with_tiny_buffer() {
    let config = RunConfiguration::default()
        .with_capacity(1)
        .with_producers(8)
        .with_consumers(8)
        .with_items_per_producer(1_000);

    let summary = timeout(Duration::from_secs(60), run_pipeline(config))
        .await
        .expect("run should terminate")
        .unwrap();

    assert_eq!(summary.consumed, 8_000);
    assert_eq!(summary.high_water_mark, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_producer_latency_bounds_elapsed_time() {
    let config = RunConfiguration::default()
        .with_capacity(100)
        .with_producers(2)
        .with_consumers(2)
        .with_items_per_producer(20)
        .with_producer_delay(Some(Duration::from_millis(2)));

    let summary = run_pipeline(config).await.unwrap();

    // each producer sleeps 20 x 2ms sequentially
    assert!(summary.elapsed_ms >= 40);
    assert_eq!(summary.consumed, 40);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_hundreds_of_workers_on_both_sides() {
    // producers and consumers together outnumber tokio's blocking pool
    let config = RunConfiguration::default()
        .with_capacity(4)
        .with_producers(400)
        .with_consumers(300)
        .with_items_per_producer(3);

    let summary = timeout(Duration::from_secs(60), run_pipeline(config))
        .await
        .expect("run with 700 workers should terminate")
        .unwrap();

    assert_eq!(summary.produced, 1_200);
    assert_eq!(summary.consumed, 1_200);
    assert_eq!(summary.per_consumer.len(), 300);
    assert!(summary.high_water_mark <= 4);
}
