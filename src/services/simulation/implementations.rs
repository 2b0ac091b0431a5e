// 作業シミュレーターの具象実装

use crate::core::WorkSimulator;
use async_trait::async_trait;
use std::time::Duration;

/// ランダムな時間だけ休止するシミュレーター
///
/// 乱数はプロセス全体のシードに依存せず、呼び出しごとに `rand::random` から取る。
/// 粒度はミリ秒。
#[derive(Debug, Default, Clone)]
pub struct RandomWorkSimulator;

impl RandomWorkSimulator {
    pub fn new() -> Self {
        Self
    }

    /// `[min, max)` から遅延を選ぶ
    pub fn pick_delay(min: Duration, max: Duration) -> Duration {
        if max <= min {
            return min;
        }
        let span_ms = (max - min).as_millis() as u64;
        if span_ms == 0 {
            return min;
        }
        let offset = (rand::random::<f64>() * span_ms as f64) as u64;
        min + Duration::from_millis(offset.min(span_ms - 1))
    }
}

#[async_trait]
impl WorkSimulator for RandomWorkSimulator {
    async fn simulate_work(&self, min: Duration, max: Duration) -> Duration {
        let delay = Self::pick_delay(min, max);
        tokio::time::sleep(delay).await;
        delay
    }
}

/// 常に同じ時間だけ休止するシミュレーター（テスト用）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedWorkSimulator {
    delay: Duration,
}

impl FixedWorkSimulator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// 休止なし
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl Default for FixedWorkSimulator {
    fn default() -> Self {
        Self::instant()
    }
}

#[async_trait]
impl WorkSimulator for FixedWorkSimulator {
    async fn simulate_work(&self, _min: Duration, _max: Duration) -> Duration {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.delay
    }
}
