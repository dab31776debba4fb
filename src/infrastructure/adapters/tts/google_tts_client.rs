//! Google TTS Client - 调用 Google Cloud Text-to-Speech REST 服务
//!
//! 实现 SpeechSynthesisPort trait
//!
//! 外部 TTS API:
//! POST https://texttospeech.googleapis.com/v1/text:synthesize
//! Request: {"input": {"text"|"ssml": "..."}, "voice": {...}, "audioConfig": {...}}  (JSON)
//! Response: {"audioContent": "<base64>"}

use async_trait::async_trait;
use base64::{engine::general_purpose, Engine as _};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{
    SpeechSynthesisPort, SynthesisInput, SynthesisRequest, SynthesisResponse, TtsError,
};
use crate::domain::{AudioEncoding, VoiceGender};
use crate::infrastructure::adapters::auth::ServiceAccountTokenSource;

/// 请求体 (JSON)
#[derive(Debug, Serialize)]
struct SynthesizeBody<'a> {
    input: InputBody<'a>,
    voice: VoiceBody<'a>,
    #[serde(rename = "audioConfig")]
    audio_config: AudioConfigBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum InputBody<'a> {
    Text(&'a str),
    Ssml(&'a str),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceBody<'a> {
    language_code: &'a str,
    name: &'a str,
    ssml_gender: VoiceGender,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfigBody {
    audio_encoding: AudioEncoding,
}

impl<'a> SynthesizeBody<'a> {
    fn from_request(request: &'a SynthesisRequest) -> Self {
        let input = match &request.input {
            SynthesisInput::Text(text) => InputBody::Text(text),
            SynthesisInput::Ssml(ssml) => InputBody::Ssml(ssml),
        };
        Self {
            input,
            voice: VoiceBody {
                language_code: &request.voice.language_code,
                name: &request.voice.name,
                ssml_gender: request.voice.gender,
            },
            audio_config: AudioConfigBody {
                audio_encoding: request.audio_encoding,
            },
        }
    }
}

/// 响应体
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponseBody {
    audio_content: String,
}

fn decode_audio(body: SynthesizeResponseBody) -> Result<Vec<u8>, TtsError> {
    general_purpose::STANDARD
        .decode(body.audio_content.as_bytes())
        .map_err(|e| TtsError::InvalidResponse(format!("audioContent is not base64: {}", e)))
}

/// Google TTS 客户端配置
#[derive(Debug, Clone)]
pub struct GoogleTtsClientConfig {
    /// 服务基础 URL
    pub endpoint: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GoogleTtsClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://texttospeech.googleapis.com".to_string(),
            timeout_secs: 120,
        }
    }
}

impl GoogleTtsClientConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// 构建带超时的 HTTP 客户端
pub fn build_http_client(timeout_secs: u64) -> Result<Client, TtsError> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| TtsError::NetworkError(e.to_string()))
}

/// Google TTS 客户端
pub struct GoogleTtsClient {
    client: Client,
    config: GoogleTtsClientConfig,
    tokens: Arc<ServiceAccountTokenSource>,
}

impl GoogleTtsClient {
    /// 按配置的超时构建 HTTP 客户端
    pub fn new(
        config: GoogleTtsClientConfig,
        tokens: Arc<ServiceAccountTokenSource>,
    ) -> Result<Self, TtsError> {
        let client = build_http_client(config.timeout_secs)?;

        Ok(Self {
            client,
            config,
            tokens,
        })
    }

    /// 获取合成 URL
    fn synthesize_url(&self) -> String {
        format!(
            "{}/v1/text:synthesize",
            self.config.endpoint.trim_end_matches('/')
        )
    }
}

#[async_trait]
impl SpeechSynthesisPort for GoogleTtsClient {
    async fn synthesize(&self, request: SynthesisRequest) -> Result<SynthesisResponse, TtsError> {
        let token = self.tokens.access_token().await?;
        let body = SynthesizeBody::from_request(&request);

        tracing::debug!(
            url = %self.synthesize_url(),
            text_len = request.input.content().len(),
            voice = %request.voice.name,
            "Sending synthesize request"
        );

        let response = self
            .client
            .post(self.synthesize_url())
            .bearer_auth(token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TtsError::Timeout
                } else if e.is_connect() {
                    TtsError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    TtsError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TtsError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: SynthesizeResponseBody = response
            .json()
            .await
            .map_err(|e| TtsError::InvalidResponse(format!("Failed to read response: {}", e)))?;
        let audio_content = decode_audio(body)?;

        tracing::debug!(audio_size = audio_content.len(), "Synthesis completed");

        Ok(SynthesisResponse { audio_content })
    }
}
