// パイプラインに関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// プロデューサーの定義（名前と生成件数）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProducerSpec {
    pub name: String,
    pub count: usize,
}

impl ProducerSpec {
    pub fn new(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// `i`番目（1始まり）のアイテムのラベル
    pub fn item_label(&self, i: usize) -> String {
        format!("{}-item-{i}", self.name)
    }
}

/// プロデューサーのエンキュー間隔
///
/// `i`番目のアイテムの後で `base + i * step` だけ休止する。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub base: Duration,
    pub step: Duration,
}

impl Pacing {
    pub const fn new(base: Duration, step: Duration) -> Self {
        Self { base, step }
    }

    /// 休止なし（テスト用）
    pub const fn none() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// 桁あふれはDuration::MAX側に飽和させる
    pub fn delay_for(&self, i: usize) -> Duration {
        let steps = u32::try_from(i).unwrap_or(u32::MAX);
        self.base.saturating_add(self.step.saturating_mul(steps))
    }
}

/// タイムアウト付き受信の結果
///
/// タイムアウトはエラーではなく通常の結果として扱う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReceiveOutcome<T> {
    Received(T),
    TimedOut,
    /// ストリームがクローズ済みかつ空
    Closed,
}

impl<T> ReceiveOutcome<T> {
    pub fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut)
    }

    pub fn into_received(self) -> Option<T> {
        match self {
            Self::Received(value) => Some(value),
            _ => None,
        }
    }
}

/// キューシナリオのサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct QueueRunSummary {
    pub produced: usize,
    pub consumed: usize,
    pub consumers: usize,
    pub per_consumer: Vec<usize>,
    /// 実行中にバッファが保持した最大件数
    pub peak_buffered: usize,
    pub elapsed_ms: u64,
}

/// ファンインシナリオのサマリー
#[derive(Debug, Clone, PartialEq)]
pub struct FanInRunSummary {
    pub workers: usize,
    pub received: Vec<String>,
    pub timeouts: usize,
    /// 受信ループ終了時点で失敗が確認できたワーカー数
    pub failed_workers: usize,
    pub elapsed_ms: u64,
}

/// レポーターに通知されるイベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    Produced { producer: String, item: String },
    Consuming { consumer_id: usize, item: String },
    ConsumerFinished { consumer_id: usize },
    AllConsumersFinished,
    MessageReceived { message: String },
    TimedOut { timeout: Duration },
    FanInFinished,
}
