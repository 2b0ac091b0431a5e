// 高レベル公開API
// ScenarioEngineを簡単に使用できるようにするための便利な関数

use super::ScenarioEngine;
use crate::{
    core::PipelineResult,
    services::{
        ConsoleReporter, DefaultFanInConfig, DefaultQueueConfig, RandomWorkSimulator, ScenarioFile,
    },
};
use std::path::Path;

/// 標準構成のエンジン型
pub type DefaultScenarioEngine =
    ScenarioEngine<RandomWorkSimulator, ConsoleReporter, DefaultQueueConfig, DefaultFanInConfig>;

/// デフォルト設定のエンジンを作成（コンソール出力あり）
pub fn create_default_engine() -> DefaultScenarioEngine {
    create_engine(ScenarioFile::default(), ConsoleReporter::new())
}

/// 静音版のエンジンを作成
pub fn create_quiet_engine() -> DefaultScenarioEngine {
    create_engine(ScenarioFile::default(), ConsoleReporter::quiet())
}

/// 設定ファイルからエンジンを作成
pub fn create_engine_from_file(path: &Path, reporter: ConsoleReporter) -> PipelineResult<DefaultScenarioEngine> {
    let file = ScenarioFile::load(path)?;
    Ok(create_engine(file, reporter))
}

/// 読み込み済み設定からエンジンを作成
pub fn create_engine(file: ScenarioFile, reporter: ConsoleReporter) -> DefaultScenarioEngine {
    ScenarioEngine::new(RandomWorkSimulator::new(), reporter, file.queue, file.fan_in)
}
