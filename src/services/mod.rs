// サービス層 - 機能別の実装
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod config;
pub mod monitoring;
pub mod simulation;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use config::{DefaultFanInConfig, DefaultQueueConfig, ScenarioFile};
pub use monitoring::{ConsoleReporter, NoOpReporter, RecordingReporter};
pub use simulation::{FixedWorkSimulator, RandomWorkSimulator};
