//! Console Reporter - 每个完成的工作项向标准输出打印一行

use std::io::Write;

use crate::application::{OutcomeReporter, TaskResult};

/// 标准输出上报器
///
/// 日志走 stderr，stdout 只保留逐项结果行。
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl OutcomeReporter for ConsoleReporter {
    fn report(&self, result: &TaskResult) {
        // 整行一次写入，避免并发任务的输出在行内交错
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", result);
    }
}
