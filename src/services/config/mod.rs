// 設定管理
// シナリオ設定のデフォルト値、ビルダー、JSON読み込み

pub mod implementations;

// 公開API
pub use implementations::{DefaultFanInConfig, DefaultQueueConfig, ScenarioFile};
