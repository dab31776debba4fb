//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（SpeechSynthesis、OutcomeReporter）
//! - prompt_writer: 单条提示音合成与写入
//! - error: 应用层错误定义

pub mod error;
pub mod ports;
pub mod prompt_writer;

pub use error::ApplicationError;
pub use ports::{
    OutcomeReporter, SpeechSynthesisPort, SynthesisInput, SynthesisRequest, SynthesisResponse,
    TtsError,
};
pub use prompt_writer::{PromptWriter, TaskResult};
