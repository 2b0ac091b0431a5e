// ファンインと期限付き受信の統合テスト
use crate::fixtures::fan_in_config;
use chan_patterns::{
    channel,
    core::ReceiveOutcome,
    engine::merge,
    services::{FixedWorkSimulator, RecordingReporter},
    FanInPipeline, TimedReceiver,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_fast_workers_are_all_received() {
    let reporter = Arc::new(RecordingReporter::new());
    let pipeline = FanInPipeline::new(
        Arc::new(FixedWorkSimulator::new(Duration::from_millis(300))),
        Arc::clone(&reporter),
    );

    let summary = pipeline.execute(&fan_in_config(2, 500, 2)).await.unwrap();

    assert_eq!(summary.timeouts, 0);
    let mut received = summary.received.clone();
    received.sort();
    assert_eq!(
        received,
        vec!["Worker 1 finished in 300ms", "Worker 2 finished in 300ms"]
    );
    assert_eq!(reporter.lines().last().map(String::as_str), Some("Main finished"));
}

#[tokio::test(start_paused = true)]
async fn test_slow_worker_times_out_then_arrives() {
    let reporter = Arc::new(RecordingReporter::new());
    let pipeline = FanInPipeline::new(
        Arc::new(FixedWorkSimulator::new(Duration::from_millis(800))),
        Arc::clone(&reporter),
    );

    let summary = pipeline.execute(&fan_in_config(1, 500, 2)).await.unwrap();

    assert_eq!(summary.timeouts, 1);
    assert_eq!(summary.received, vec!["Worker 1 finished in 800ms"]);
    assert_eq!(
        reporter.lines(),
        vec![
            "Timeout waiting for response",
            "Worker 1 finished in 800ms",
            "Main finished",
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_merged_sources_preserve_per_source_order() {
    let (first_tx, _first_closer, first_rx) = channel::<String>(0);
    let (second_tx, _second_closer, second_rx) = channel::<String>(0);

    tokio::spawn(async move {
        for i in 1..=3 {
            first_tx.send(format!("first-{i}")).await.unwrap();
        }
    });
    tokio::spawn(async move {
        for i in 1..=3 {
            second_tx.send(format!("second-{i}")).await.unwrap();
        }
    });

    let merged = merge(vec![first_rx, second_rx]);
    let mut messages = Vec::new();
    for _ in 0..6 {
        messages.push(merged.recv().await.unwrap());
    }

    let firsts: Vec<_> = messages.iter().filter(|m| m.starts_with("first")).collect();
    let seconds: Vec<_> = messages.iter().filter(|m| m.starts_with("second")).collect();
    assert_eq!(firsts, vec!["first-1", "first-2", "first-3"]);
    assert_eq!(seconds, vec!["second-1", "second-2", "second-3"]);
}

#[tokio::test(start_paused = true)]
async fn test_timed_receiver_over_merged_stream() {
    let (sender, _closer, receiver) = channel::<&str>(0);

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(700)).await;
        sender.send("late result").await.unwrap();
    });

    let merged = merge(vec![receiver]);
    let timed = TimedReceiver::new(merged.receiver(), Duration::from_millis(500));

    assert!(timed.recv().await.is_timed_out());
    assert_eq!(timed.recv().await, ReceiveOutcome::Received("late result"));
}
