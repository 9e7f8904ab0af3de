// End-to-end runs through the coordinator
use crate::fixtures::{CountingLatency, LifecycleEvent, RecordingReporter};
use bounded_pipeline::{run_pipeline, Coordinator, RunConfiguration, RunPhase};
use std::time::Duration;
use tokio::time::timeout;

fn reference_config() -> RunConfiguration {
    RunConfiguration::default()
        .with_capacity(10)
        .with_producers(3)
        .with_consumers(2)
        .with_items_per_producer(50)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_reference_run_terminates() {
    let summary = timeout(Duration::from_secs(10), run_pipeline(reference_config()))
        .await
        .expect("run should reach Done")
        .unwrap();

    assert_eq!(summary.produced, 150);
    assert_eq!(summary.consumed, 150);
    assert!(summary.is_conserved());
    assert!(summary.high_water_mark <= 10);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_lifecycle_ordering() {
    let reporter = RecordingReporter::new();
    let coordinator = Coordinator::new(reference_config(), reporter.clone());

    coordinator.run().await.unwrap();

    let events = reporter.events();
    assert_eq!(events.first(), Some(&LifecycleEvent::Started));
    assert_eq!(
        events.last(),
        Some(&LifecycleEvent::Completed {
            produced: 150,
            consumed: 150
        })
    );

    let phases = reporter.phases();
    let order: Vec<_> = phases.iter().map(|change| change.phase).collect();
    assert_eq!(
        order,
        vec![
            RunPhase::Initializing,
            RunPhase::Running,
            RunPhase::Draining,
            RunPhase::Done
        ]
    );

    // workers are enrolled but not started
    assert_eq!(phases[0].producers_remaining, 3);
    assert_eq!(phases[0].consumers_remaining, 2);
    assert!(!phases[0].queue_closed);

    // producers finished strictly before the queue was closed
    assert_eq!(phases[2].producers_remaining, 0);
    assert!(phases[2].queue_closed);

    // consumers finished only after closure and drained everything
    assert_eq!(phases[3].consumers_remaining, 0);
    assert_eq!(phases[3].buffered, 0);
    assert!(phases[3].queue_closed);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_injected_latency_called_once_per_item() {
    let producer_latency = CountingLatency::new();
    let consumer_latency = CountingLatency::new();

    let coordinator = Coordinator::new(reference_config(), RecordingReporter::new())
        .with_producer_latency(producer_latency.clone())
        .with_consumer_latency(consumer_latency.clone());
    coordinator.run().await.unwrap();

    assert_eq!(producer_latency.pauses(), 150);
    assert_eq!(consumer_latency.pauses(), 150);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_more_consumers_than_items() {
    let config = RunConfiguration::default()
        .with_capacity(1)
        .with_producers(1)
        .with_consumers(8)
        .with_items_per_producer(3);

    let summary = timeout(Duration::from_secs(10), run_pipeline(config))
        .await
        .expect("idle consumers must still observe end-of-stream")
        .unwrap();

    assert_eq!(summary.consumed, 3);
    assert_eq!(summary.per_consumer.len(), 8);
    assert_eq!(summary.high_water_mark, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_slow_consumers_apply_backpressure() {
    let config = RunConfiguration::default()
        .with_capacity(2)
        .with_producers(4)
        .with_consumers(1)
        .with_items_per_producer(10)
        .with_consumer_delay(Some(Duration::from_millis(1)));

    let summary = timeout(Duration::from_secs(20), run_pipeline(config))
        .await
        .expect("run should terminate")
        .unwrap();

    assert_eq!(summary.consumed, 40);
    assert_eq!(summary.high_water_mark, 2);
}
