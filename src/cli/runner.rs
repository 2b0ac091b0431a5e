// CLIコマンドの実行
// 設定ファイル・フラグを合成してエンジンを組み立てる

use super::args::{Cli, Commands};
use crate::{
    core::PipelineResult,
    engine::{create_engine, DefaultScenarioEngine},
    services::{ConsoleReporter, ScenarioFile},
};

/// フラグによる上書きを適用した設定を作成
pub fn resolve_scenario(cli: &Cli) -> PipelineResult<ScenarioFile> {
    let mut file = match &cli.config {
        Some(path) => ScenarioFile::load(path)?,
        None => ScenarioFile::default(),
    };

    match &cli.command {
        Some(Commands::Queue {
            capacity,
            consumers,
            items,
        }) => {
            let mut queue = file.queue;
            if let Some(capacity) = capacity {
                queue = queue.with_capacity(*capacity);
            }
            if let Some(consumers) = consumers {
                queue = queue.with_consumers(*consumers);
            }
            if let Some(items) = items {
                queue = queue.with_items_per_producer(*items);
            }
            queue.validate()?;
            file.queue = queue;
        }
        Some(Commands::FanIn {
            workers,
            timeout_ms,
            max_delay_ms,
            receives,
        }) => {
            let mut fan_in = file.fan_in;
            if let Some(workers) = workers {
                fan_in = fan_in.with_workers(*workers);
            }
            if let Some(timeout_ms) = timeout_ms {
                fan_in = fan_in.with_timeout_ms(*timeout_ms);
            }
            if let Some(max_delay_ms) = max_delay_ms {
                fan_in = fan_in.with_max_delay_ms(*max_delay_ms);
            }
            if let Some(receives) = receives {
                fan_in = fan_in.with_receives(*receives);
            }
            fan_in.validate()?;
            file.fan_in = fan_in;
        }
        None => {}
    }

    Ok(file)
}

/// CLIからエンジンを組み立てる
pub fn build_engine(cli: &Cli) -> PipelineResult<DefaultScenarioEngine> {
    let reporter = if cli.quiet {
        ConsoleReporter::quiet()
    } else {
        ConsoleReporter::new()
    };
    Ok(create_engine(resolve_scenario(cli)?, reporter))
}

/// 選択されたシナリオを実行
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let engine = build_engine(&cli)?;

    match cli.command {
        Some(Commands::Queue { .. }) => {
            engine.run_queue_scenario().await?;
        }
        Some(Commands::FanIn { .. }) => {
            engine.run_fan_in_scenario().await?;
        }
        None => {
            engine.run_all().await?;
        }
    }
    Ok(())
}
