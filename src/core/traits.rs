// パイプラインのトレイト定義
// 設定・進捗報告・作業シミュレーションの抽象化インターフェース

use super::types::{Pacing, ProducerSpec};
use async_trait::async_trait;
use mockall::automock;
use std::time::Duration;

/// 作業時間のシミュレーター
///
/// `[min, max)` の範囲で休止し、実際に休止した時間を返す。
/// `max <= min` の場合は `min` だけ休止する。
#[automock]
#[async_trait]
pub trait WorkSimulator: Send + Sync {
    async fn simulate_work(&self, min: Duration, max: Duration) -> Duration;
}

/// キューシナリオの設定を抽象化するトレイト
#[automock]
pub trait QueueConfig: Send + Sync {
    /// キュー容量（0はランデブー）
    fn capacity(&self) -> usize;

    /// コンシューマー数
    fn consumer_count(&self) -> usize;

    /// 順番に実行されるプロデューサー一覧
    fn producers(&self) -> Vec<ProducerSpec>;

    /// プロデューサーのエンキュー間隔
    fn pacing(&self) -> Pacing;

    /// コンシューマーの1件あたり処理時間
    fn processing_delay(&self) -> Duration;
}

/// ファンインシナリオの設定を抽象化するトレイト
#[automock]
pub trait FanInConfig: Send + Sync {
    /// ワーカー数
    fn worker_count(&self) -> usize;

    /// ワーカー遅延の上限（この値は含まない）
    fn max_delay(&self) -> Duration;

    /// 1回の受信ごとのタイムアウト
    fn receive_timeout(&self) -> Duration;

    /// 受信を試みる回数
    fn receive_count(&self) -> usize;
}

/// 進捗報告の抽象化トレイト
#[automock]
#[async_trait]
pub trait PipelineReporter: Send + Sync {
    /// アイテム生成（エンキュー前）
    async fn report_produced(&self, producer: &str, item: &str);

    /// アイテム処理開始
    async fn report_consuming(&self, consumer_id: usize, item: &str);

    /// コンシューマー終了
    async fn report_consumer_finished(&self, consumer_id: usize);

    /// 全コンシューマー終了
    async fn report_all_consumers_finished(&self);

    /// マージ済みストリームからの受信
    async fn report_message(&self, message: &str);

    /// 受信タイムアウト
    async fn report_timeout(&self, timeout: Duration);

    /// ファンインシナリオ終了
    async fn report_fan_in_finished(&self);
}

// PipelineReporter for Box<dyn PipelineReporter>
#[async_trait]
impl PipelineReporter for Box<dyn PipelineReporter> {
    async fn report_produced(&self, producer: &str, item: &str) {
        self.as_ref().report_produced(producer, item).await
    }

    async fn report_consuming(&self, consumer_id: usize, item: &str) {
        self.as_ref().report_consuming(consumer_id, item).await
    }

    async fn report_consumer_finished(&self, consumer_id: usize) {
        self.as_ref().report_consumer_finished(consumer_id).await
    }

    async fn report_all_consumers_finished(&self) {
        self.as_ref().report_all_consumers_finished().await
    }

    async fn report_message(&self, message: &str) {
        self.as_ref().report_message(message).await
    }

    async fn report_timeout(&self, timeout: Duration) {
        self.as_ref().report_timeout(timeout).await
    }

    async fn report_fan_in_finished(&self) {
        self.as_ref().report_fan_in_finished().await
    }
}
