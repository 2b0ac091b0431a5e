// Worker - 1回だけ結果を送信するタスク

use crate::{
    channel::QueueSender,
    core::{PipelineResult, WorkSimulator},
};
use std::sync::Arc;
use std::time::Duration;

/// ワーカーの結果メッセージ
pub fn worker_message(worker_id: usize, delay: Duration) -> String {
    format!("Worker {worker_id} finished in {delay:?}")
}

/// `[0, max_delay)` だけ作業した後、専用ストリームへちょうど1回送信する
///
/// 再試行はしない。実際の遅延を返す。
pub async fn run_worker<S>(
    worker_id: usize,
    sender: &QueueSender<String>,
    simulator: &S,
    max_delay: Duration,
) -> PipelineResult<Duration>
where
    S: WorkSimulator + ?Sized,
{
    let delay = simulator.simulate_work(Duration::ZERO, max_delay).await;
    sender.send(worker_message(worker_id, delay)).await?;
    Ok(delay)
}

/// ワーカーを起動
///
/// 送信ハンドルはこのワーカー専用。呼び出し側のタイムアウトでは止まらない。
pub fn spawn_worker<S>(
    worker_id: usize,
    sender: QueueSender<String>,
    simulator: Arc<S>,
    max_delay: Duration,
) -> tokio::task::JoinHandle<PipelineResult<Duration>>
where
    S: WorkSimulator + ?Sized + 'static,
{
    tokio::spawn(async move { run_worker(worker_id, &sender, simulator.as_ref(), max_delay).await })
}
