//! CSV Work Table - 从 CSV 文件加载工作项
//!
//! 每行: 第 0 列为输出文件名，第 1 列为待合成文本，其余列忽略。
//! 派发前一次性读入内存。

use std::io::Read;
use std::path::Path;
use thiserror::Error;

use crate::domain::WorkItem;

/// 输入表错误
#[derive(Debug, Error)]
pub enum WorkTableError {
    #[error("Cannot open work table {path}: {message}")]
    Open { path: String, message: String },

    #[error("Malformed CSV at line {line}: {message}")]
    Malformed { line: u64, message: String },

    #[error("Row at line {line} has {found} column(s), expected at least 2")]
    MissingColumns { line: u64, found: usize },
}

/// CSV 输入表
pub struct CsvWorkTable;

impl CsvWorkTable {
    /// 从文件加载全部工作项
    pub fn load(path: &Path, has_headers: bool) -> Result<Vec<WorkItem>, WorkTableError> {
        let file = std::fs::File::open(path).map_err(|e| WorkTableError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let items = Self::from_reader(file, has_headers)?;
        tracing::info!(path = %path.display(), rows = items.len(), "Work table loaded");
        Ok(items)
    }

    /// 从任意 reader 读取
    pub fn from_reader<R: Read>(reader: R, has_headers: bool) -> Result<Vec<WorkItem>, WorkTableError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(has_headers)
            .flexible(true)
            .from_reader(reader);

        let mut items = Vec::new();
        for record in csv_reader.records() {
            let record = record.map_err(|e| WorkTableError::Malformed {
                line: e.position().map_or(0, |p| p.line()),
                message: e.to_string(),
            })?;

            let line = record.position().map_or(0, |p| p.line());
            match (record.get(0), record.get(1)) {
                (Some(name), Some(text)) => items.push(WorkItem::new(name, text)),
                _ => {
                    return Err(WorkTableError::MissingColumns {
                        line,
                        found: record.len(),
                    })
                }
            }
        }

        Ok(items)
    }
}
