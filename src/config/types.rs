//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::{AudioEncoding, PromptType, SynthesisConfig, VoiceGender, VoiceSelection};

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Google TTS 语音设置
    pub google_settings: GoogleSettings,

    /// 输入 CSV 文件路径
    pub csv_prompts_file: PathBuf,

    /// CSV 首行是否为表头
    #[serde(default)]
    pub csv_has_headers: bool,

    /// 音频输出目录
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// TTS 服务配置
    #[serde(default)]
    pub service: ServiceConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Google TTS 语音设置
#[derive(Debug, Clone, Deserialize)]
pub struct GoogleSettings {
    /// 服务账号 JSON key 路径
    #[serde(default, alias = "JSON_key")]
    pub json_key: Option<PathBuf>,

    pub language_code: String,

    pub voice_name: String,

    pub voice_gender: VoiceGender,

    pub audio_encoding: AudioEncoding,

    #[serde(default)]
    pub prompt_type: PromptType,

    /// 输出文件扩展名，原样使用
    #[serde(default = "default_output_audio_format")]
    pub output_audio_format: String,
}

fn default_output_audio_format() -> String {
    "WAV".to_string()
}

impl GoogleSettings {
    /// 构建只读合成配置
    pub fn to_synthesis_config(&self) -> SynthesisConfig {
        SynthesisConfig::new(
            VoiceSelection {
                language_code: self.language_code.clone(),
                name: self.voice_name.clone(),
                gender: self.voice_gender,
            },
            self.audio_encoding,
            self.prompt_type,
            self.output_audio_format.clone(),
        )
    }
}

/// TTS 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// 服务基础 URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_endpoint() -> String {
    "https://texttospeech.googleapis.com".to_string()
}

fn default_timeout() -> u64 {
    120
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_secs: default_timeout(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}
