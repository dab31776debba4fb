//! Domain Layer - 领域层
//!
//! 包含批量提示音生成的核心值对象:
//! - WorkItem: 一行输入表（输出文件名 + 待合成文本）
//! - SynthesisConfig: 整个运行期间共享、只读的语音/音频参数

pub mod prompt;

pub use prompt::{
    AudioEncoding, PromptType, SynthesisConfig, VoiceGender, VoiceSelection, WorkItem,
    WorkItemError,
};
