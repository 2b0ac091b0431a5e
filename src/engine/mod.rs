// エンジン層 - 並列処理とオーケストレーション
// チャンネル層とサービス層を組み合わせて高レベルな処理を提供

pub mod api;
pub mod consumer;
pub mod fan_in;
pub mod fan_in_pipeline;
pub mod pipeline;
pub mod producer;
pub mod scenario_engine;
pub mod worker;

// 公開API - 主要エンジンクラス
pub use api::{
    create_default_engine, create_engine, create_engine_from_file, create_quiet_engine,
    DefaultScenarioEngine,
};
pub use fan_in::{merge, merge_with_capacity, MergedStream};
pub use fan_in_pipeline::FanInPipeline;
pub use pipeline::QueuePipeline;
pub use scenario_engine::{ScenarioEngine, ScenarioReport};
