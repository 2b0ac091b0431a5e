// FanInPipeline - ワーカー群の結果をマージし、期限付きで受信する

use super::{fan_in::merge, worker::spawn_worker};
use crate::{
    channel::{channel, TimedReceiver},
    core::{
        FanInConfig, FanInRunSummary, PipelineError, PipelineReporter, PipelineResult,
        ReceiveOutcome, WorkSimulator,
    },
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// ファンインシナリオのパイプライン
///
/// `Start → ワーカー起動・マージ構築 → 受信とタイムアウトの競争を receive_count 回 → 終了`
pub struct FanInPipeline<S: ?Sized, R: ?Sized> {
    simulator: Arc<S>,
    reporter: Arc<R>,
}

impl<S, R> FanInPipeline<S, R>
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

    /// シナリオを実行
    ///
    /// タイムアウトしてもワーカーは止めない。受信回数に達したら戻る。
    pub async fn execute<C>(&self, config: &C) -> PipelineResult<FanInRunSummary>
    where
        C: FanInConfig + ?Sized,
    {
        let max_delay = config.max_delay();
        if max_delay.is_zero() {
            return Err(PipelineError::configuration(
                "ワーカー遅延の上限は0より大きい必要があります",
            ));
        }

        let start_time = Instant::now();
        let workers = config.worker_count();

        let mut sources = Vec::with_capacity(workers);
        let mut worker_handles = Vec::with_capacity(workers);
        for worker_id in 1..=workers {
            // ワーカーごとに専用のランデブーストリーム。送信元はクローズしない
            let (sender, _closer, receiver) = channel::<String>(0);
            worker_handles.push(spawn_worker(
                worker_id,
                sender,
                Arc::clone(&self.simulator),
                max_delay,
            ));
            sources.push(receiver);
        }

        let merged = merge(sources);
        let timed = TimedReceiver::new(merged.receiver(), config.receive_timeout());

        let mut received = Vec::new();
        let mut timeouts = 0;
        for attempt in 0..config.receive_count() {
            match timed.recv().await {
                ReceiveOutcome::Received(message) => {
                    self.reporter.report_message(&message).await;
                    received.push(message);
                }
                ReceiveOutcome::TimedOut => {
                    self.reporter.report_timeout(timed.timeout()).await;
                    timeouts += 1;
                }
                ReceiveOutcome::Closed => {
                    debug!(attempt, "merged stream closed");
                    break;
                }
            }
        }

        self.reporter.report_fan_in_finished().await;

        let failed_workers = collect_worker_failures(worker_handles).await;

        let elapsed_ms = start_time.elapsed().as_millis() as u64;
        info!(
            workers,
            received = received.len(),
            timeouts,
            failed_workers,
            elapsed_ms,
            "fan-in pipeline completed"
        );

        Ok(FanInRunSummary {
            workers,
            received,
            timeouts,
            failed_workers,
            elapsed_ms,
        })
    }
}

/// 終了済みワーカーの結果を確認し、失敗数を返す
///
/// 実行中のワーカーは待たずに切り離す。
async fn collect_worker_failures(handles: Vec<JoinHandle<PipelineResult<Duration>>>) -> usize {
    let mut failed = 0;
    for (index, handle) in handles.into_iter().enumerate() {
        if !handle.is_finished() {
            continue;
        }
        let worker_id = index + 1;
        match handle.await {
            Ok(Ok(_)) => {}
            Ok(Err(error)) => {
                warn!(worker_id, %error, "worker failed to send its result");
                failed += 1;
            }
            Err(error) => {
                warn!(worker_id, %error, "worker task aborted");
                failed += 1;
            }
        }
    }
    failed
}
