//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（命令行指定，默认 YAML，按扩展名识别格式）
//! 3. 默认值

use config::builder::DefaultState;
use config::{
    Config, ConfigBuilder, ConfigError as ConfigCrateError, Environment, File, FileFormat,
};
use std::path::Path;
use thiserror::Error;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 环境变量前缀
const ENV_PREFIX: &str = "PROMPTGEN";

/// 从指定文件加载配置
///
/// # 环境变量示例
/// - `PROMPTGEN_GOOGLE_SETTINGS__VOICE_NAME=en-US-Wavenet-F`
/// - `PROMPTGEN_SERVICE__TIMEOUT_SECS=30`
/// - `PROMPTGEN_LOG__LEVEL=debug`
pub fn load_config(config_path: &Path) -> Result<AppConfig, ConfigError> {
    let builder = with_defaults(Config::builder())?
        .add_source(File::from(config_path).required(true));
    finish(builder)
}

/// 从字符串加载配置（测试与嵌入场景）
pub fn load_config_from_str(content: &str, format: FileFormat) -> Result<AppConfig, ConfigError> {
    let builder = with_defaults(Config::builder())?.add_source(File::from_str(content, format));
    finish(builder)
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder
        .set_default("csv_has_headers", false)?
        .set_default("output_dir", ".")?
        .set_default("service.endpoint", "https://texttospeech.googleapis.com")?
        .set_default("service.timeout_secs", 120)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?)
}

fn finish(builder: ConfigBuilder<DefaultState>) -> Result<AppConfig, ConfigError> {
    // 层级分隔符: __ (双下划线)，环境变量名会被转换为小写
    let config = builder
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize().map_err(|e| {
        ConfigError::ParseError(format!("Failed to deserialize config: {}", e))
    })?;

    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    let google = &config.google_settings;

    if google.language_code.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "google_settings.language_code cannot be empty".to_string(),
        ));
    }

    if google.voice_name.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "google_settings.voice_name cannot be empty".to_string(),
        ));
    }

    let format = google.output_audio_format.as_str();
    if format.is_empty() || format.contains(['/', '\\']) {
        return Err(ConfigError::ValidationError(format!(
            "Invalid output_audio_format '{}'",
            format
        )));
    }

    if config.csv_prompts_file.as_os_str().is_empty() {
        return Err(ConfigError::ValidationError(
            "csv_prompts_file cannot be empty".to_string(),
        ));
    }

    if config.service.endpoint.is_empty() {
        return Err(ConfigError::ValidationError(
            "service.endpoint cannot be empty".to_string(),
        ));
    }

    if config.service.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "service.timeout_secs cannot be 0".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    let google = &config.google_settings;
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Language: {}", google.language_code);
    tracing::info!("Voice: {} ({})", google.voice_name, google.voice_gender);
    tracing::info!("Audio Encoding: {}", google.audio_encoding);
    tracing::info!("Prompt Type: {:?}", google.prompt_type);
    tracing::info!("Output Format: {}", google.output_audio_format);
    tracing::info!("Prompts File: {}", config.csv_prompts_file.display());
    tracing::info!("Output Directory: {}", config.output_dir.display());
    tracing::info!("TTS Endpoint: {}", config.service.endpoint);
    tracing::info!("TTS Timeout: {}s", config.service.timeout_secs);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}
