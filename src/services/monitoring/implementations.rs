// 進捗監視の具象実装

use crate::core::{PipelineEvent, PipelineReporter};
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    /// イベントを1行のテキストに変換
    pub fn format_event(event: &PipelineEvent) -> String {
        match event {
            PipelineEvent::Produced { producer, item } => format!("{producer} produced {item}"),
            PipelineEvent::Consuming { consumer_id, item } => {
                format!("Consumer {consumer_id} processing {item}")
            }
            PipelineEvent::ConsumerFinished { consumer_id } => {
                format!("Consumer {consumer_id} finished")
            }
            PipelineEvent::AllConsumersFinished => "All consumers finished. Exiting.".to_string(),
            PipelineEvent::MessageReceived { message } => message.clone(),
            PipelineEvent::TimedOut { .. } => "Timeout waiting for response".to_string(),
            PipelineEvent::FanInFinished => "Main finished".to_string(),
        }
    }

    fn emit(&self, event: PipelineEvent) {
        if !self.quiet {
            println!("{}", Self::format_event(&event));
        }
    }
}

#[async_trait]
impl PipelineReporter for ConsoleReporter {
    async fn report_produced(&self, producer: &str, item: &str) {
        self.emit(PipelineEvent::Produced {
            producer: producer.to_string(),
            item: item.to_string(),
        });
    }

    async fn report_consuming(&self, consumer_id: usize, item: &str) {
        self.emit(PipelineEvent::Consuming {
            consumer_id,
            item: item.to_string(),
        });
    }

    async fn report_consumer_finished(&self, consumer_id: usize) {
        self.emit(PipelineEvent::ConsumerFinished { consumer_id });
    }

    async fn report_all_consumers_finished(&self) {
        self.emit(PipelineEvent::AllConsumersFinished);
    }

    async fn report_message(&self, message: &str) {
        self.emit(PipelineEvent::MessageReceived {
            message: message.to_string(),
        });
    }

    async fn report_timeout(&self, timeout: Duration) {
        self.emit(PipelineEvent::TimedOut { timeout });
    }

    async fn report_fan_in_finished(&self) {
        self.emit(PipelineEvent::FanInFinished);
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PipelineReporter for NoOpReporter {
    async fn report_produced(&self, _producer: &str, _item: &str) {}

    async fn report_consuming(&self, _consumer_id: usize, _item: &str) {}

    async fn report_consumer_finished(&self, _consumer_id: usize) {}

    async fn report_all_consumers_finished(&self) {}

    async fn report_message(&self, _message: &str) {}

    async fn report_timeout(&self, _timeout: Duration) {}

    async fn report_fan_in_finished(&self) {}
}

/// イベントをメモリに記録する実装
///
/// シナリオの出力順を検証するテストで使う。
#[derive(Debug, Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<PipelineEvent>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 記録済みイベントのスナップショット
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// コンソール形式の行
    pub fn lines(&self) -> Vec<String> {
        self.events()
            .iter()
            .map(ConsoleReporter::format_event)
            .collect()
    }

    fn record(&self, event: PipelineEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

#[async_trait]
impl PipelineReporter for RecordingReporter {
    async fn report_produced(&self, producer: &str, item: &str) {
        self.record(PipelineEvent::Produced {
            producer: producer.to_string(),
            item: item.to_string(),
        });
    }

    async fn report_consuming(&self, consumer_id: usize, item: &str) {
        self.record(PipelineEvent::Consuming {
            consumer_id,
            item: item.to_string(),
        });
    }

    async fn report_consumer_finished(&self, consumer_id: usize) {
        self.record(PipelineEvent::ConsumerFinished { consumer_id });
    }

    async fn report_all_consumers_finished(&self) {
        self.record(PipelineEvent::AllConsumersFinished);
    }

    async fn report_message(&self, message: &str) {
        self.record(PipelineEvent::MessageReceived {
            message: message.to_string(),
        });
    }

    async fn report_timeout(&self, timeout: Duration) {
        self.record(PipelineEvent::TimedOut { timeout });
    }

    async fn report_fan_in_finished(&self) {
        self.record(PipelineEvent::FanInFinished);
    }
}
