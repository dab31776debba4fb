//! Batch Scheduler - 分块 fork/join 派发
//!
//! 将工作项按 batch_size 切分为连续的块。每块内为每个工作项启动一个 tokio 任务，
//! 等待全部完成后才进入下一块（块间屏障）。单项失败不影响同块或后续块。

use futures_util::future::join_all;
use std::num::NonZeroUsize;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::Instrument;

use crate::application::{OutcomeReporter, PromptWriter, TaskResult};
use crate::domain::WorkItem;

/// 默认块大小
pub const DEFAULT_BATCH_SIZE: usize = 10;

/// 建议的块大小上限（仅文档说明，不做校验）
pub const SUGGESTED_MAX_BATCH_SIZE: usize = 100;

/// 调度器配置
#[derive(Debug, Clone, Copy)]
pub struct BatchSchedulerConfig {
    /// 每块工作项数量
    pub batch_size: NonZeroUsize,
    /// 块内同时在途的请求上限，None 表示等于块宽度
    pub max_in_flight: Option<NonZeroUsize>,
}

impl Default for BatchSchedulerConfig {
    fn default() -> Self {
        Self {
            batch_size: NonZeroUsize::new(DEFAULT_BATCH_SIZE).unwrap_or(NonZeroUsize::MIN),
            max_in_flight: None,
        }
    }
}

/// 一块连续的工作项
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    pub items: Vec<WorkItem>,
}

impl Chunk {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// 将工作项按顺序切分为块，不重叠、不遗漏
pub fn plan_chunks(items: Vec<WorkItem>, batch_size: NonZeroUsize) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(items.len().div_ceil(batch_size.get()));
    let mut iter = items.into_iter().peekable();

    while iter.peek().is_some() {
        chunks.push(Chunk {
            index: chunks.len(),
            items: iter.by_ref().take(batch_size.get()).collect(),
        });
    }

    chunks
}

/// 运行结果
///
/// 只用于决定进程退出码，不向用户打印汇总。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub chunks: usize,
    pub dispatched: usize,
    pub failed: usize,
}

impl BatchOutcome {
    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

/// 批量调度器
pub struct BatchScheduler {
    config: BatchSchedulerConfig,
    writer: Arc<PromptWriter>,
    reporter: Arc<dyn OutcomeReporter>,
}

impl BatchScheduler {
    pub fn new(
        config: BatchSchedulerConfig,
        writer: Arc<PromptWriter>,
        reporter: Arc<dyn OutcomeReporter>,
    ) -> Self {
        Self {
            config,
            writer,
            reporter,
        }
    }

    /// 依次处理全部块，调度器自身不会失败
    pub async fn run(&self, items: Vec<WorkItem>) -> BatchOutcome {
        let chunks = plan_chunks(items, self.config.batch_size);
        let mut outcome = BatchOutcome {
            chunks: chunks.len(),
            ..Default::default()
        };

        tracing::info!(
            chunks = chunks.len(),
            batch_size = self.config.batch_size.get(),
            max_in_flight = ?self.config.max_in_flight,
            "BatchScheduler started"
        );

        for chunk in chunks {
            let span = tracing::info_span!("chunk", index = chunk.index, size = chunk.len());
            let results = self.run_chunk(chunk).instrument(span).await;

            outcome.dispatched += results.len();
            outcome.failed += results.iter().filter(|r| !r.success).count();
        }

        tracing::debug!(
            dispatched = outcome.dispatched,
            failed = outcome.failed,
            "BatchScheduler finished"
        );
        outcome
    }

    /// 为块内每个工作项启动一个任务，并等待全部完成
    async fn run_chunk(&self, chunk: Chunk) -> Vec<TaskResult> {
        let semaphore = self
            .config
            .max_in_flight
            .map(|limit| Arc::new(Semaphore::new(limit.get())));
        let output_format = self.writer.config().output_format().to_string();

        let (file_names, handles): (Vec<_>, Vec<_>) = chunk
            .items
            .into_iter()
            .map(|item| {
                let file_name = item.file_name(&output_format);
                let writer = self.writer.clone();
                let reporter = self.reporter.clone();
                let semaphore = semaphore.clone();
                let span = tracing::debug_span!("prompt", name = %item.output_name());

                let handle = tokio::spawn(
                    async move {
                        let _permit = match semaphore {
                            Some(s) => s.acquire_owned().await.ok(),
                            None => None,
                        };
                        let result = writer.write(item).await;
                        reporter.report(&result);
                        result
                    }
                    .instrument(span),
                );
                (file_name, handle)
            })
            .unzip();

        // 屏障：块内所有任务结束（成功或失败）后才返回
        join_all(handles)
            .await
            .into_iter()
            .zip(file_names)
            .map(|(joined, file_name)| match joined {
                Ok(result) => result,
                Err(e) => {
                    tracing::error!(file = %file_name, error = %e, "Prompt task aborted");
                    let result = TaskResult::failed(file_name, format!("task aborted: {}", e));
                    self.reporter.report(&result);
                    result
                }
            })
            .collect()
    }
}
