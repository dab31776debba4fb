//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod outcome_reporter;
mod speech_synthesis;

pub use outcome_reporter::OutcomeReporter;
pub use speech_synthesis::{
    SpeechSynthesisPort, SynthesisInput, SynthesisRequest, SynthesisResponse, TtsError,
};
