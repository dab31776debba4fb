//! Prompt Writer - 单条提示音合成并落盘
//!
//! 调用合成服务，成功后将音频写入 `{output_name}.{output_format}`。
//! 所有失败都在本层收敛为 TaskResult，不向外传播。

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{SpeechSynthesisPort, SynthesisRequest};
use crate::application::ApplicationError;
use crate::domain::{SynthesisConfig, WorkItem};

/// 单项执行结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResult {
    /// 输出文件名（`{output_name}.{output_format}`）
    pub file_name: String,
    pub success: bool,
    pub error_message: Option<String>,
}

impl TaskResult {
    pub fn succeeded(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            success: true,
            error_message: None,
        }
    }

    pub fn failed(file_name: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            file_name: file_name.into(),
            success: false,
            error_message: Some(error.to_string()),
        }
    }
}

impl fmt::Display for TaskResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_message {
            None if self.success => {
                write!(f, "✅ Prompt {} created successfully!", self.file_name)
            }
            error => write!(
                f,
                "🔥 ERROR creating the prompt ({}) : ({})",
                self.file_name,
                error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

/// 提示音写入器
///
/// 合成客户端与配置均为只读共享，可跨任务克隆 Arc 使用。
pub struct PromptWriter {
    synthesizer: Arc<dyn SpeechSynthesisPort>,
    config: Arc<SynthesisConfig>,
    output_dir: PathBuf,
}

impl PromptWriter {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesisPort>,
        config: Arc<SynthesisConfig>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            synthesizer,
            config,
            output_dir: output_dir.into(),
        }
    }

    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// 合成并写入一个工作项
    pub async fn write(&self, item: WorkItem) -> TaskResult {
        let file_name = item.file_name(self.config.output_format());

        match self.try_write(item).await {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Prompt written");
                TaskResult::succeeded(file_name)
            }
            Err(e) => {
                tracing::warn!(file = %file_name, error = %e, "Prompt failed");
                TaskResult::failed(file_name, e)
            }
        }
    }

    async fn try_write(&self, item: WorkItem) -> Result<PathBuf, ApplicationError> {
        item.validate_name()?;

        let path = self
            .output_dir
            .join(item.file_name(self.config.output_format()));
        let (_, text) = item.into_parts();

        let request = SynthesisRequest::new(&self.config, text);
        let response = self.synthesizer.synthesize(request).await?;

        // 已存在的同名文件直接覆盖
        tokio::fs::write(&path, &response.audio_content)
            .await
            .map_err(|source| ApplicationError::Output {
                path: path.clone(),
                source,
            })?;

        tracing::trace!(
            path = %path.display(),
            bytes = response.audio_content.len(),
            "Audio content saved"
        );
        Ok(path)
    }
}
