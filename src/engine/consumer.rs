// Consumer - 並列コンシューマープール

use crate::{
    channel::{CompletionCounter, CompletionGuard, QueueReceiver},
    core::{PipelineReporter, WorkSimulator},
};
use std::sync::Arc;
use std::time::Duration;

/// 単一コンシューマー
///
/// end-of-streamまでデキューを繰り返し、処理件数を返す。
/// `guard` はタスク終了時（パニック含む）に破棄され、完了カウンターを1だけ減らす。
pub fn spawn_single_consumer<S, R>(
    consumer_id: usize,
    receiver: QueueReceiver<String>,
    guard: CompletionGuard,
    simulator: Arc<S>,
    processing_delay: Duration,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<usize>
where
    S: WorkSimulator + ?Sized + 'static,
    R: PipelineReporter + ?Sized + 'static,
{
    tokio::spawn(async move {
        let _guard = guard;
        let mut processed = 0;

        while let Some(item) = receiver.recv().await {
            reporter.report_consuming(consumer_id, &item).await;
            simulator
                .simulate_work(processing_delay, processing_delay)
                .await;
            processed += 1;
        }

        reporter.report_consumer_finished(consumer_id).await;
        processed
    })
}

/// Consumers: 並列コンシューマープール
///
/// 起動前に全員分をカウンターへ登録するので、
/// `counter.wait()` が早すぎるタイミングで戻ることはない。IDは1始まり。
pub fn spawn_consumers<S, R>(
    receiver: QueueReceiver<String>,
    counter: &CompletionCounter,
    consumer_count: usize,
    simulator: Arc<S>,
    processing_delay: Duration,
    reporter: Arc<R>,
) -> Vec<tokio::task::JoinHandle<usize>>
where
    S: WorkSimulator + ?Sized + 'static,
    R: PipelineReporter + ?Sized + 'static,
{
    let guards: Vec<_> = (0..consumer_count).map(|_| counter.register()).collect();

    guards
        .into_iter()
        .enumerate()
        .map(|(index, guard)| {
            spawn_single_consumer(
                index + 1,
                receiver.clone(),
                guard,
                Arc::clone(&simulator),
                processing_delay,
                Arc::clone(&reporter),
            )
        })
        .collect()
}
