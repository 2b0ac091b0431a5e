// テストユーティリティ
// 統合テストで共有する設定ビルダーとイベント抽出ヘルパー
#![allow(dead_code)]

use chan_patterns::core::{PipelineEvent, ProducerSpec};
use chan_patterns::services::{DefaultFanInConfig, DefaultQueueConfig};

/// 休止なしのキュー設定
pub fn instant_queue_config(
    capacity: usize,
    consumers: usize,
    producers: &[(&str, usize)],
) -> DefaultQueueConfig {
    DefaultQueueConfig::default()
        .with_capacity(capacity)
        .with_consumers(consumers)
        .with_producers(
            producers
                .iter()
                .map(|(name, count)| ProducerSpec::new(*name, *count))
                .collect(),
        )
        .with_pacing(0, 0)
        .with_processing_ms(0)
}

/// ファンイン設定
pub fn fan_in_config(workers: usize, timeout_ms: u64, receives: usize) -> DefaultFanInConfig {
    DefaultFanInConfig::default()
        .with_workers(workers)
        .with_timeout_ms(timeout_ms)
        .with_receives(receives)
}

/// 生成されたアイテムを記録順に抽出
pub fn produced_items(events: &[PipelineEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            PipelineEvent::Produced { item, .. } => Some(item.clone()),
            _ => None,
        })
        .collect()
}

/// 処理されたアイテムを記録順に抽出
pub fn consumed_items(events: &[PipelineEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            PipelineEvent::Consuming { item, .. } => Some(item.clone()),
            _ => None,
        })
        .collect()
}

/// 終了したコンシューマーIDを記録順に抽出
pub fn finished_consumers(events: &[PipelineEvent]) -> Vec<usize> {
    events
        .iter()
        .filter_map(|event| match event {
            PipelineEvent::ConsumerFinished { consumer_id } => Some(*consumer_id),
            _ => None,
        })
        .collect()
}
