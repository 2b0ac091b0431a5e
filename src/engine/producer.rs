// Producer - アイテム生成とキュー投入

use crate::{
    channel::{QueueCloser, QueueSender},
    core::{Pacing, PipelineReporter, PipelineResult, ProducerSpec, WorkSimulator},
};
use std::sync::Arc;
use tracing::debug;

/// 1つのプロデューサーを実行
///
/// `{name}-item-{i}` を `i = 1..=count` の順に投入し、
/// 各投入の後で `pacing.delay_for(i)` だけ休止する。
pub async fn run_producer<S, R>(
    spec: &ProducerSpec,
    pacing: Pacing,
    sender: &QueueSender<String>,
    simulator: &S,
    reporter: &R,
) -> PipelineResult<usize>
where
    S: WorkSimulator + ?Sized,
    R: PipelineReporter + ?Sized,
{
    for i in 1..=spec.count {
        let item = spec.item_label(i);
        reporter.report_produced(&spec.name, &item).await;

        // 満杯ならここでブロックする
        sender.send(item).await?;

        let pause = pacing.delay_for(i);
        simulator.simulate_work(pause, pause).await;
    }
    Ok(spec.count)
}

/// プロデューサー群を順番に実行し、最後にキューをクローズするコーディネーター
///
/// クローズ権限はこのタスクだけが持つ。
pub fn spawn_producer_group<S, R>(
    producers: Vec<ProducerSpec>,
    pacing: Pacing,
    sender: QueueSender<String>,
    closer: QueueCloser<String>,
    simulator: Arc<S>,
    reporter: Arc<R>,
) -> tokio::task::JoinHandle<PipelineResult<usize>>
where
    S: WorkSimulator + ?Sized + 'static,
    R: PipelineReporter + ?Sized + 'static,
{
    tokio::spawn(async move {
        let result = async {
            let mut produced = 0;
            for spec in &producers {
                produced += run_producer(
                    spec,
                    pacing,
                    &sender,
                    simulator.as_ref(),
                    reporter.as_ref(),
                )
                .await?;
            }
            PipelineResult::Ok(produced)
        }
        .await;

        // 失敗時もクローズしないとコンシューマーが終われない
        closer.close()?;
        debug!(producers = producers.len(), "producer group closed the queue");
        result
    })
}
