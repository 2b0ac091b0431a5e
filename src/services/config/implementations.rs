// 設定管理の具象実装

use crate::core::{FanInConfig, Pacing, PipelineError, PipelineResult, ProducerSpec, QueueConfig};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// キューシナリオのデフォルト設定実装
///
/// JSONから読み込めるよう時間はミリ秒で保持する。
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultQueueConfig {
    capacity: usize,
    consumers: usize,
    producers: Vec<ProducerSpec>,
    base_pause_ms: u64,
    step_pause_ms: u64,
    processing_ms: u64,
}

impl DefaultQueueConfig {
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn with_consumers(mut self, consumers: usize) -> Self {
        self.consumers = consumers;
        self
    }

    pub fn with_producers(mut self, producers: Vec<ProducerSpec>) -> Self {
        self.producers = producers;
        self
    }

    /// 全プロデューサーの生成件数を揃える
    pub fn with_items_per_producer(mut self, count: usize) -> Self {
        for producer in &mut self.producers {
            producer.count = count;
        }
        self
    }

    pub fn with_pacing(mut self, base_ms: u64, step_ms: u64) -> Self {
        self.base_pause_ms = base_ms;
        self.step_pause_ms = step_ms;
        self
    }

    pub fn with_processing_ms(mut self, processing_ms: u64) -> Self {
        self.processing_ms = processing_ms;
        self
    }

    pub fn validate(&self) -> PipelineResult<()> {
        if self.consumers == 0 {
            return Err(PipelineError::validation(
                "consumers",
                "コンシューマー数は1以上である必要があります",
            ));
        }
        if let Some(producer) = self.producers.iter().find(|p| p.name.is_empty()) {
            return Err(PipelineError::validation(
                "producers",
                format!("プロデューサー名が空です (count: {})", producer.count),
            ));
        }
        Ok(())
    }
}

impl Default for DefaultQueueConfig {
    fn default() -> Self {
        Self {
            capacity: 5,
            consumers: 3,
            producers: vec![ProducerSpec::new("ProdA", 5), ProducerSpec::new("ProdB", 5)],
            base_pause_ms: 100,
            step_pause_ms: 20,
            processing_ms: 200,
        }
    }
}

impl QueueConfig for DefaultQueueConfig {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn consumer_count(&self) -> usize {
        self.consumers
    }

    fn producers(&self) -> Vec<ProducerSpec> {
        self.producers.clone()
    }

    fn pacing(&self) -> Pacing {
        Pacing::new(
            Duration::from_millis(self.base_pause_ms),
            Duration::from_millis(self.step_pause_ms),
        )
    }

    fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_ms)
    }
}

/// ファンインシナリオのデフォルト設定実装
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DefaultFanInConfig {
    workers: usize,
    max_delay_ms: u64,
    timeout_ms: u64,
    receives: usize,
}

impl DefaultFanInConfig {
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_max_delay_ms(mut self, max_delay_ms: u64) -> Self {
        self.max_delay_ms = max_delay_ms;
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn with_receives(mut self, receives: usize) -> Self {
        self.receives = receives;
        self
    }

    pub fn validate(&self) -> PipelineResult<()> {
        if self.max_delay_ms == 0 {
            return Err(PipelineError::validation(
                "max_delay_ms",
                "遅延の上限は0より大きい必要があります",
            ));
        }
        Ok(())
    }
}

impl Default for DefaultFanInConfig {
    fn default() -> Self {
        Self {
            workers: 2,
            max_delay_ms: 1000,
            timeout_ms: 500,
            receives: 2,
        }
    }
}

impl FanInConfig for DefaultFanInConfig {
    fn worker_count(&self) -> usize {
        self.workers
    }

    fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }

    fn receive_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    fn receive_count(&self) -> usize {
        self.receives
    }
}

/// 設定ファイルの内容
///
/// ```json
/// { "queue": { "capacity": 2 }, "fan_in": { "timeout_ms": 300 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScenarioFile {
    pub queue: DefaultQueueConfig,
    pub fan_in: DefaultFanInConfig,
}

impl ScenarioFile {
    /// JSONファイルから読み込む。省略された項目はデフォルト値
    pub fn load(path: &Path) -> PipelineResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PipelineError::configuration(format!("{} を読み込めません: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> PipelineResult<Self> {
        let file: Self = serde_json::from_str(content)
            .map_err(|e| PipelineError::configuration(format!("JSONの解析に失敗しました: {e}")))?;
        file.queue.validate()?;
        file.fan_in.validate()?;
        Ok(file)
    }
}
