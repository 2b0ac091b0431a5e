// 有界キューとファンインの協調パターン
//
// レイヤー構成:
// - core: トレイト・型・エラー定義
// - channel: 有界キュー、完了カウンター、期限付き受信
// - services: 設定、進捗出力、作業時間シミュレーション
// - engine: プロデューサー/コンシューマー、ファンイン、シナリオ実行
// - cli: コマンドライン引数と実行

pub mod channel;
pub mod cli;
pub mod core;
pub mod engine;
pub mod services;

// 公開API - よく使う型を再エクスポート
pub use crate::channel::{
    channel, receive_with_timeout, BoundedQueue, CompletionCounter, CompletionGuard, QueueCloser,
    QueueReceiver, QueueSender, TimedReceiver,
};
pub use crate::core::{
    FanInRunSummary, PipelineError, PipelineResult, QueueError, QueueRunSummary, ReceiveOutcome,
};
pub use crate::engine::{
    create_default_engine, create_engine, create_quiet_engine, merge, FanInPipeline, MergedStream,
    QueuePipeline, ScenarioEngine,
};
