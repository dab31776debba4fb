//! 应用层错误定义

use std::path::PathBuf;
use thiserror::Error;

use crate::application::ports::TtsError;
use crate::domain::WorkItemError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 服务配置失败（凭据无效、服务不可达等），致命
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 工作项无效
    #[error("Invalid work item: {0}")]
    InvalidItem(#[from] WorkItemError),

    /// 外部合成服务错误
    #[error("{0}")]
    Synthesis(#[from] TtsError),

    /// 输出文件写入失败
    #[error("Failed to write {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApplicationError {
    /// 创建配置错误
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}
