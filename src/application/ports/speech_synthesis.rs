//! Speech Synthesis Port - 语音合成引擎抽象
//!
//! 定义外部 TTS 服务的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{AudioEncoding, PromptType, SynthesisConfig, VoiceSelection};

/// TTS 错误
#[derive(Debug, Error)]
pub enum TtsError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 合成输入：纯文本或 SSML
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisInput {
    Text(String),
    Ssml(String),
}

impl SynthesisInput {
    /// 按 prompt_type 解释文本内容
    pub fn from_prompt(prompt_type: PromptType, content: impl Into<String>) -> Self {
        match prompt_type {
            PromptType::Normal => Self::Text(content.into()),
            PromptType::Ssml => Self::Ssml(content.into()),
        }
    }

    pub fn content(&self) -> &str {
        match self {
            Self::Text(s) | Self::Ssml(s) => s,
        }
    }
}

/// 合成请求
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    pub input: SynthesisInput,
    pub voice: VoiceSelection,
    pub audio_encoding: AudioEncoding,
}

impl SynthesisRequest {
    /// 由共享配置和单条文本构建请求
    pub fn new(config: &SynthesisConfig, content: impl Into<String>) -> Self {
        Self {
            input: SynthesisInput::from_prompt(config.prompt_type(), content),
            voice: config.voice().clone(),
            audio_encoding: config.audio_encoding(),
        }
    }
}

/// 合成响应
#[derive(Debug, Clone)]
pub struct SynthesisResponse {
    /// 原始音频数据（已解码）
    pub audio_content: Vec<u8>,
}

/// Speech Synthesis Port
///
/// 实现必须可被多个并发任务同时调用。
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// 合成一段语音，返回原始音频字节
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError>;
}
