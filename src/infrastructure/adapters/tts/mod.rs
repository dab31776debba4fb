//! TTS Adapter - 合成客户端实现

mod configurator;
mod fake_tts_client;
mod google_tts_client;

pub use configurator::{configure_service, resolve_credentials, ConfiguredService, CREDENTIALS_ENV};
pub use fake_tts_client::{FakeEvent, FakeSynthesizer, FakeSynthesizerConfig};
pub use google_tts_client::{build_http_client, GoogleTtsClient, GoogleTtsClientConfig};
