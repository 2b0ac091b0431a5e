// ScenarioEngine - 依存性注入によるシナリオ実行エンジン
// シミュレーター・レポーター・設定をコンストラクタで注入する

use super::{fan_in_pipeline::FanInPipeline, pipeline::QueuePipeline};
use crate::core::{
    FanInConfig, FanInRunSummary, PipelineReporter, PipelineResult, QueueConfig, QueueRunSummary,
    WorkSimulator,
};
use std::sync::Arc;

/// 両シナリオの実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioReport {
    pub queue: QueueRunSummary,
    pub fan_in: FanInRunSummary,
}

/// シナリオ実行エンジン
///
/// 並列タスクで共有される依存関係は初期からArcで管理する。
pub struct ScenarioEngine<S, R, Q, F> {
    simulator: Arc<S>,
    reporter: Arc<R>,
    queue_config: Q,
    fan_in_config: F,
}

impl<S, R, Q, F> ScenarioEngine<S, R, Q, F>
where
    S: WorkSimulator + 'static,
    R: PipelineReporter + 'static,
    Q: QueueConfig,
    F: FanInConfig,
{
    pub fn new(simulator: S, reporter: R, queue_config: Q, fan_in_config: F) -> Self {
        Self {
            simulator: Arc::new(simulator),
            reporter: Arc::new(reporter),
            queue_config,
            fan_in_config,
        }
    }

    pub fn queue_config(&self) -> &Q {
        &self.queue_config
    }

    pub fn fan_in_config(&self) -> &F {
        &self.fan_in_config
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// プロデューサー・コンシューマーのシナリオ
    pub async fn run_queue_scenario(&self) -> PipelineResult<QueueRunSummary> {
        QueuePipeline::new(Arc::clone(&self.simulator), Arc::clone(&self.reporter))
            .execute(&self.queue_config)
            .await
    }

    /// ファンインと期限付き受信のシナリオ
    pub async fn run_fan_in_scenario(&self) -> PipelineResult<FanInRunSummary> {
        FanInPipeline::new(Arc::clone(&self.simulator), Arc::clone(&self.reporter))
            .execute(&self.fan_in_config)
            .await
    }

    /// キュー → ファンインの順に両方を実行
    pub async fn run_all(&self) -> PipelineResult<ScenarioReport> {
        let queue = self.run_queue_scenario().await?;
        let fan_in = self.run_fan_in_scenario().await?;
        Ok(ScenarioReport { queue, fan_in })
    }
}
