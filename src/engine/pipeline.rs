// Pipeline - Producer-Consumer パイプライン
// 有界キューを挟んだプロデューサー群とコンシューマープールのオーケストレーション

use super::{consumer::spawn_consumers, producer::spawn_producer_group};
use crate::{
    channel::{channel, CompletionCounter},
    core::{
        PipelineError, PipelineReporter, PipelineResult, QueueConfig, QueueRunSummary,
        WorkSimulator,
    },
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// キューシナリオのパイプライン
pub struct QueuePipeline<S: ?Sized, R: ?Sized> {
    simulator: Arc<S>,
    reporter: Arc<R>,
}

impl<S, R> QueuePipeline<S, R>
where
    S: WorkSimulator + ?Sized + 'static,
    R: PipelineReporter + ?Sized + 'static,
{
    pub fn new(simulator: Arc<S>, reporter: Arc<R>) -> Self {
        Self {
            simulator,
            reporter,
        }
    }

    /// シナリオを最後まで実行
    ///
    /// 1. プロデューサー群を1つのコーディネータータスクで順番に実行し、最後にクローズ
    /// 2. コンシューマーを並列に起動
    /// 3. 完了カウンターが0になるまで待機
    pub async fn execute<C>(&self, config: &C) -> PipelineResult<QueueRunSummary>
    where
        C: QueueConfig + ?Sized,
    {
        let consumers = config.consumer_count();
        if consumers == 0 {
            return Err(PipelineError::configuration(
                "コンシューマー数は1以上である必要があります",
            ));
        }

        let start_time = Instant::now();
        let (sender, closer, receiver) = channel::<String>(config.capacity());
        let counter = CompletionCounter::new();
        let observer = receiver.clone();

        // プロデューサーには送信ハンドルだけを渡す
        let producer_handle = spawn_producer_group(
            config.producers(),
            config.pacing(),
            sender,
            closer,
            Arc::clone(&self.simulator),
            Arc::clone(&self.reporter),
        );

        let consumer_handles = spawn_consumers(
            receiver,
            &counter,
            consumers,
            Arc::clone(&self.simulator),
            config.processing_delay(),
            Arc::clone(&self.reporter),
        );

        counter.wait().await;
        self.reporter.report_all_consumers_finished().await;

        let produced = producer_handle.await??;

        let mut per_consumer = Vec::with_capacity(consumer_handles.len());
        for handle in consumer_handles {
            per_consumer.push(handle.await?);
        }
        let consumed: usize = per_consumer.iter().sum();
        let peak_buffered = observer.peak_len();

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!(
            produced,
            consumed,
            consumers,
            peak_buffered,
            elapsed_ms,
            "queue pipeline completed"
        );

        Ok(QueueRunSummary {
            produced,
            consumed,
            consumers,
            per_consumer,
            peak_buffered,
            elapsed_ms,
        })
    }
}
