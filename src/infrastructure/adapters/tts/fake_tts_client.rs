//! Fake Synthesizer - 用于测试的合成客户端
//!
//! 不实际调用 TTS 服务：返回固定音频，可按文本注入延迟与失败，并记录调用顺序

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use crate::application::ports::{
    SpeechSynthesisPort, SynthesisRequest, SynthesisResponse, TtsError,
};

/// 调用事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FakeEvent {
    Started(String),
    Finished(String),
}

/// Fake Synthesizer 配置
#[derive(Debug, Clone)]
pub struct FakeSynthesizerConfig {
    /// 固定返回的音频数据
    pub audio_data: Vec<u8>,
    /// 默认模拟延迟
    pub latency: Duration,
    /// 按文本覆盖的延迟
    pub latency_by_text: HashMap<String, Duration>,
    /// 这些文本的请求返回 ServiceError
    pub fail_on: Vec<String>,
}

impl Default for FakeSynthesizerConfig {
    fn default() -> Self {
        Self {
            audio_data: b"RIFF\0\0\0\0WAVEfmt ".to_vec(),
            latency: Duration::from_millis(10),
            latency_by_text: HashMap::new(),
            fail_on: Vec::new(),
        }
    }
}

/// Fake Synthesizer
pub struct FakeSynthesizer {
    config: FakeSynthesizerConfig,
    events: Mutex<Vec<FakeEvent>>,
}

impl FakeSynthesizer {
    pub fn new(config: FakeSynthesizerConfig) -> Self {
        Self {
            config,
            events: Mutex::new(Vec::new()),
        }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeSynthesizerConfig::default())
    }

    /// 按开始顺序返回收到的文本
    pub fn calls(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                FakeEvent::Started(text) => Some(text),
                FakeEvent::Finished(_) => None,
            })
            .collect()
    }

    /// 全部开始/结束事件
    pub fn events(&self) -> Vec<FakeEvent> {
        self.events
            .lock()
            .map(|events| events.clone())
            .unwrap_or_default()
    }

    fn record(&self, event: FakeEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

#[async_trait]
impl SpeechSynthesisPort for FakeSynthesizer {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        let text = request.input.content().to_string();
        tracing::debug!(text_len = text.len(), "FakeSynthesizer: returning fixed audio");

        self.record(FakeEvent::Started(text.clone()));

        let latency = self
            .config
            .latency_by_text
            .get(&text)
            .copied()
            .unwrap_or(self.config.latency);
        tokio::time::sleep(latency).await;

        self.record(FakeEvent::Finished(text.clone()));

        if self.config.fail_on.contains(&text) {
            return Err(TtsError::ServiceError(format!(
                "forced failure for '{}'",
                text
            )));
        }

        Ok(SynthesisResponse {
            audio_content: self.config.audio_data.clone(),
        })
    }
}
