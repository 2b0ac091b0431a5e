// FanIn - 複数ストリームを1本にマージ
// ソースごとに転送タスクを1つ起動し、共有の出力キューへ書き込む

use crate::{
    channel::{channel, QueueReceiver, QueueSender},
    core::PipelineResult,
};
use tokio::task::JoinHandle;
use tracing::debug;

/// マージ済みストリーム
///
/// 出力はマージ側からはクローズされない。ソースが全て閉じても `recv` は
/// end-of-streamを返さないので、呼び出し側は受信件数で打ち切ること。
pub struct MergedStream<T> {
    receiver: QueueReceiver<T>,
    forwarders: Vec<JoinHandle<usize>>,
}

impl<T> MergedStream<T> {
    /// 出力ストリームの受信ハンドル
    pub fn receiver(&self) -> QueueReceiver<T> {
        self.receiver.clone()
    }

    pub async fn recv(&self) -> Option<T> {
        self.receiver.recv().await
    }

    pub fn source_count(&self) -> usize {
        self.forwarders.len()
    }

    /// 全転送タスクが終了したか（全ソースがクローズ済み）
    pub fn forwarders_finished(&self) -> bool {
        self.forwarders.iter().all(JoinHandle::is_finished)
    }

    /// 転送タスクの終了を待ち、ソースごとの転送件数を返す
    pub async fn join_forwarders(self) -> PipelineResult<Vec<usize>> {
        let mut counts = Vec::with_capacity(self.forwarders.len());
        for handle in self.forwarders {
            counts.push(handle.await?);
        }
        Ok(counts)
    }
}

/// ランデブー出力でマージする
pub fn merge<T>(sources: Vec<QueueReceiver<T>>) -> MergedStream<T>
where
    T: Send + 'static,
{
    merge_with_capacity(sources, 0)
}

/// 出力キュー容量を指定してマージする
///
/// ソース内のFIFO順は保たれる。ソース間の順序は到着順で決まらない。
pub fn merge_with_capacity<T>(sources: Vec<QueueReceiver<T>>, capacity: usize) -> MergedStream<T>
where
    T: Send + 'static,
{
    let (sender, closer, receiver) = channel(capacity);
    // 出力はクローズしない（件数で打ち切る前提）
    drop(closer);

    let forwarders = sources
        .into_iter()
        .enumerate()
        .map(|(index, source)| spawn_forwarder(index, source, sender.clone()))
        .collect();

    MergedStream {
        receiver,
        forwarders,
    }
}

fn spawn_forwarder<T>(index: usize, source: QueueReceiver<T>, sink: QueueSender<T>) -> JoinHandle<usize>
where
    T: Send + 'static,
{
    tokio::spawn(async move {
        let mut forwarded = 0;
        while let Some(item) = source.recv().await {
            if sink.send(item).await.is_err() {
                break;
            }
            forwarded += 1;
        }
        debug!(source = index, forwarded, "fan-in forwarder finished");
        forwarded
    })
}
