// キューパイプラインの統合テスト
use crate::fixtures::{consumed_items, finished_consumers, instant_queue_config, produced_items};
use chan_patterns::{
    channel,
    core::{PipelineEvent, ProducerSpec, QueueError},
    services::{DefaultQueueConfig, FixedWorkSimulator, RandomWorkSimulator, RecordingReporter},
    QueuePipeline,
};
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_two_consumers_receive_each_item_once() {
    let reporter = Arc::new(RecordingReporter::new());
    let pipeline = QueuePipeline::new(
        Arc::new(FixedWorkSimulator::new(Duration::from_millis(50))),
        Arc::clone(&reporter),
    );
    let config = instant_queue_config(2, 2, &[("A", 3)]);

    let summary = pipeline.execute(&config).await.unwrap();

    assert_eq!(summary.produced, 3);
    assert_eq!(summary.consumed, 3);
    assert_eq!(summary.per_consumer.len(), 2);
    assert!(summary.peak_buffered >= 1);
    assert!(summary.peak_buffered <= 2);

    let events = reporter.events();
    assert_eq!(produced_items(&events), vec!["A-item-1", "A-item-2", "A-item-3"]);

    let mut consumed = consumed_items(&events);
    consumed.sort();
    assert_eq!(consumed, vec!["A-item-1", "A-item-2", "A-item-3"]);

    let mut finished = finished_consumers(&events);
    finished.sort_unstable();
    assert_eq!(finished, vec![1, 2]);
    assert_eq!(events.last(), Some(&PipelineEvent::AllConsumersFinished));
}

#[tokio::test(start_paused = true)]
async fn test_slow_consumers_fill_buffer_to_capacity() {
    let reporter = Arc::new(RecordingReporter::new());
    // min == max なので遅延は設定値どおりに決まる
    let pipeline = QueuePipeline::new(Arc::new(RandomWorkSimulator::new()), Arc::clone(&reporter));
    // 生成の休止(10ms)より処理(50ms)が遅いのでバッファが満杯になる
    let config = DefaultQueueConfig::default()
        .with_capacity(2)
        .with_consumers(2)
        .with_producers(vec![ProducerSpec::new("A", 6)])
        .with_pacing(10, 0)
        .with_processing_ms(50);

    let summary = pipeline.execute(&config).await.unwrap();

    assert_eq!(summary.consumed, 6);
    assert_eq!(summary.peak_buffered, 2);

    let mut consumed = consumed_items(&reporter.events());
    consumed.sort();
    assert_eq!(
        consumed,
        (1..=6).map(|i| format!("A-item-{i}")).collect::<Vec<_>>()
    );
}

#[tokio::test(start_paused = true)]
async fn test_producers_run_one_after_another() {
    let reporter = Arc::new(RecordingReporter::new());
    let pipeline = QueuePipeline::new(
        Arc::new(FixedWorkSimulator::new(Duration::from_millis(10))),
        Arc::clone(&reporter),
    );
    let config = DefaultQueueConfig::default().with_items_per_producer(2);

    let summary = pipeline.execute(&config).await.unwrap();

    assert_eq!(summary.produced, 4);
    assert_eq!(summary.consumed, 4);
    assert_eq!(
        produced_items(&reporter.events()),
        vec!["ProdA-item-1", "ProdA-item-2", "ProdB-item-1", "ProdB-item-2"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_completion_is_reported_after_every_consumer() {
    let reporter = Arc::new(RecordingReporter::new());
    let pipeline = QueuePipeline::new(Arc::new(FixedWorkSimulator::instant()), Arc::clone(&reporter));
    let config = instant_queue_config(1, 3, &[("A", 1)]);

    pipeline.execute(&config).await.unwrap();

    let events = reporter.events();
    let all_finished = events
        .iter()
        .position(|event| *event == PipelineEvent::AllConsumersFinished)
        .unwrap();
    let last_consumer = events
        .iter()
        .rposition(|event| matches!(event, PipelineEvent::ConsumerFinished { .. }))
        .unwrap();

    assert!(last_consumer < all_finished);
    assert_eq!(finished_consumers(&events).len(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_buffer_never_exceeds_capacity() {
    let (sender, closer, receiver) = channel::<usize>(2);

    let producer = tokio::spawn(async move {
        for i in 0..6 {
            sender.send(i).await.unwrap();
            assert!(sender.len() <= 2);
        }
        closer.close().unwrap();
    });

    // コンシューマー不在ではちょうど容量分だけ溜まる
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert_eq!(receiver.len(), 2);
    assert!(!producer.is_finished());

    let mut received = Vec::new();
    while let Some(item) = receiver.recv().await {
        assert!(receiver.len() <= 2);
        received.push(item);
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    producer.await.unwrap();
    assert_eq!(received, vec![0, 1, 2, 3, 4, 5]);
}

#[tokio::test(start_paused = true)]
async fn test_send_after_close_is_rejected() {
    let (sender, closer, receiver) = channel::<&str>(2);

    sender.send("kept").await.unwrap();
    closer.close().unwrap();

    assert_eq!(sender.send("late").await, Err(QueueError::Closed));
    assert_eq!(receiver.recv().await, Some("kept"));
    assert_eq!(receiver.recv().await, None);
}
