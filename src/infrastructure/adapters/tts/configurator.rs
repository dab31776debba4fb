//! Service Configurator - 一次性初始化合成客户端与合成参数
//!
//! 成功时返回可共享的客户端与只读 SynthesisConfig；
//! 任何失败都是配置错误，调用方不得进入调度阶段。

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::application::ports::SpeechSynthesisPort;
use crate::application::ApplicationError;
use crate::config::{GoogleSettings, ServiceConfig};
use crate::domain::SynthesisConfig;
use crate::infrastructure::adapters::auth::{ServiceAccountKey, ServiceAccountTokenSource};

use super::{build_http_client, GoogleTtsClient, GoogleTtsClientConfig};

/// 未显式配置 key 路径时读取的环境变量
pub const CREDENTIALS_ENV: &str = "GOOGLE_APPLICATION_CREDENTIALS";

/// 配置完成的服务
pub struct ConfiguredService {
    pub synthesizer: Arc<dyn SpeechSynthesisPort>,
    pub synthesis: Arc<SynthesisConfig>,
}

/// 解析凭据路径：显式配置优先，其次环境变量
pub fn resolve_credentials(
    json_key: Option<&Path>,
    env_value: Option<String>,
) -> Result<PathBuf, ApplicationError> {
    if let Some(path) = json_key.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(path.to_path_buf());
    }
    env_value
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| {
            ApplicationError::configuration(format!(
                "No credentials: set google_settings.JSON_key or {}",
                CREDENTIALS_ENV
            ))
        })
}

/// 初始化 Google TTS 服务
///
/// 会实际换取一次 access token，以便在派发前发现无效凭据。
pub async fn configure_service(
    settings: &GoogleSettings,
    service: &ServiceConfig,
) -> Result<ConfiguredService, ApplicationError> {
    let key_path = resolve_credentials(
        settings.json_key.as_deref(),
        std::env::var(CREDENTIALS_ENV).ok(),
    )?;
    let key = ServiceAccountKey::from_file(&key_path).map_err(auth_failed)?;

    let client = build_http_client(service.timeout_secs).map_err(auth_failed)?;
    let tokens = Arc::new(ServiceAccountTokenSource::new(key, client).map_err(auth_failed)?);
    tokens.access_token().await.map_err(auth_failed)?;

    tracing::info!(
        client_email = %tokens.client_email(),
        endpoint = %service.endpoint,
        "Authenticated with Google TTS"
    );

    let client_config =
        GoogleTtsClientConfig::new(service.endpoint.clone()).with_timeout(service.timeout_secs);
    let synthesizer: Arc<dyn SpeechSynthesisPort> =
        Arc::new(GoogleTtsClient::new(client_config, tokens).map_err(auth_failed)?);

    Ok(ConfiguredService {
        synthesizer,
        synthesis: Arc::new(settings.to_synthesis_config()),
    })
}

fn auth_failed(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::configuration(format!("authenticating with Google TTS API ({})", err))
}
