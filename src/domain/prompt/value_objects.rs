//! Prompt Context - Value Objects
//!
//! 语音/音频参数采用封闭枚举，在配置加载时校验，未知取值直接失败。
//! 序列化形式与 Google Cloud Text-to-Speech REST API 的枚举名一致。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 语音性别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoiceGender {
    SsmlVoiceGenderUnspecified,
    Male,
    Female,
    Neutral,
}

impl VoiceGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SsmlVoiceGenderUnspecified => "SSML_VOICE_GENDER_UNSPECIFIED",
            Self::Male => "MALE",
            Self::Female => "FEMALE",
            Self::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 音频编码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AudioEncoding {
    AudioEncodingUnspecified,
    /// 16-bit 线性 PCM，带 WAV 头
    Linear16,
    Mp3,
    OggOpus,
    Mulaw,
    Alaw,
}

impl AudioEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AudioEncodingUnspecified => "AUDIO_ENCODING_UNSPECIFIED",
            Self::Linear16 => "LINEAR16",
            Self::Mp3 => "MP3",
            Self::OggOpus => "OGG_OPUS",
            Self::Mulaw => "MULAW",
            Self::Alaw => "ALAW",
        }
    }
}

impl fmt::Display for AudioEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 提示文本类型：纯文本或 SSML 标记
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromptType {
    #[default]
    Normal,
    Ssml,
}

/// 语音选择参数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoiceSelection {
    pub language_code: String,
    pub name: String,
    pub gender: VoiceGender,
}

/// 合成配置
///
/// 启动时创建一次，之后只读地在所有并发任务间共享。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisConfig {
    voice: VoiceSelection,
    audio_encoding: AudioEncoding,
    prompt_type: PromptType,
    output_format: String,
}

impl SynthesisConfig {
    pub fn new(
        voice: VoiceSelection,
        audio_encoding: AudioEncoding,
        prompt_type: PromptType,
        output_format: impl Into<String>,
    ) -> Self {
        Self {
            voice,
            audio_encoding,
            prompt_type,
            output_format: output_format.into(),
        }
    }

    pub fn voice(&self) -> &VoiceSelection {
        &self.voice
    }

    pub fn audio_encoding(&self) -> AudioEncoding {
        self.audio_encoding
    }

    pub fn prompt_type(&self) -> PromptType {
        self.prompt_type
    }

    pub fn output_format(&self) -> &str {
        &self.output_format
    }
}
