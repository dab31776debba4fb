//! Outcome Reporter Port - 单项结果上报

use crate::application::TaskResult;

/// 每个工作项完成时调用一次，调用顺序不确定
pub trait OutcomeReporter: Send + Sync {
    fn report(&self, result: &TaskResult);
}
