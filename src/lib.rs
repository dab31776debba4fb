//! promptgen - 基于 Google Text-to-Speech 的批量提示音生成
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - WorkItem、SynthesisConfig 及语音/编码枚举
//!
//! 应用层 (application/):
//! - Ports: SpeechSynthesisPort、OutcomeReporter
//! - PromptWriter: 单条合成并写文件
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: Google TTS 客户端、服务账号认证、CSV 输入表、控制台上报
//! - Worker: BatchScheduler 分块 fork/join 调度

pub mod app;
pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use cli::Cli;
pub use config::{load_config, AppConfig};
