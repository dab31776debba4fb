//! promptgen - 批量提示音生成
//!
//! 读取 YAML 配置与 CSV 输入表，按块并发调用 Google TTS 并逐项写出音频文件

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use promptgen::config::{load_config, print_config, LogConfig};
use promptgen::infrastructure::adapters::ConsoleReporter;
use promptgen::infrastructure::worker::{BatchSchedulerConfig, SUGGESTED_MAX_BATCH_SIZE};
use promptgen::Cli;
use tracing::Instrument;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config(&cli.config)
        .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_logging(&config.log, cli.log_level.as_deref());

    tracing::info!("promptgen - batch prompt generation with Google TTS");
    print_config(&config);

    if cli.batch.get() > SUGGESTED_MAX_BATCH_SIZE {
        tracing::warn!(
            batch = cli.batch.get(),
            suggested_max = SUGGESTED_MAX_BATCH_SIZE,
            "Batch size above suggested maximum"
        );
    }

    let scheduler_config = BatchSchedulerConfig {
        batch_size: cli.batch,
        max_in_flight: cli.max_in_flight,
    };

    let run_id = uuid::Uuid::new_v4();
    let outcome = promptgen::app::run(&config, scheduler_config, Arc::new(ConsoleReporter))
        .instrument(tracing::info_span!("run", %run_id))
        .await?;

    // 任一工作项失败时以非零退出码结束
    Ok(if outcome.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// 初始化日志（输出到 stderr，stdout 只保留逐项结果）
fn init_logging(log: &LogConfig, override_level: Option<&str>) {
    let level = override_level.unwrap_or(&log.level);
    let log_filter = format!("{},promptgen={}", level, level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if log.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
