//! Worker Layer - 批量派发
//!
//! 实现 BatchScheduler，按块并发执行 PromptWriter

mod batch_scheduler;

pub use batch_scheduler::{
    plan_chunks, BatchOutcome, BatchScheduler, BatchSchedulerConfig, Chunk, DEFAULT_BATCH_SIZE,
    SUGGESTED_MAX_BATCH_SIZE,
};
