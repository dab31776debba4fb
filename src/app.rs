//! Application wiring - 进程级流程
//!
//! UNCONFIGURED → CONFIGURED（服务配置成功）→ 调度 → DONE。
//! 配置失败时直接返回错误，不派发任何工作项。

use std::sync::Arc;

use crate::application::{ApplicationError, OutcomeReporter, PromptWriter};
use crate::config::AppConfig;
use crate::infrastructure::adapters::{configure_service, ConfiguredService, CsvWorkTable};
use crate::infrastructure::worker::{BatchOutcome, BatchScheduler, BatchSchedulerConfig};

/// 配置服务并运行整批任务
pub async fn run(
    config: &AppConfig,
    scheduler_config: BatchSchedulerConfig,
    reporter: Arc<dyn OutcomeReporter>,
) -> anyhow::Result<BatchOutcome> {
    let service = configure_service(&config.google_settings, &config.service).await?;

    dispatch(service, config, scheduler_config, reporter).await
}

/// 使用已配置的服务加载输入表并调度
pub async fn dispatch(
    service: ConfiguredService,
    config: &AppConfig,
    scheduler_config: BatchSchedulerConfig,
    reporter: Arc<dyn OutcomeReporter>,
) -> anyhow::Result<BatchOutcome> {
    let items = CsvWorkTable::load(&config.csv_prompts_file, config.csv_has_headers)?;

    if !config.output_dir.is_dir() {
        return Err(ApplicationError::configuration(format!(
            "Output directory {} does not exist",
            config.output_dir.display()
        ))
        .into());
    }

    let writer = Arc::new(PromptWriter::new(
        service.synthesizer,
        service.synthesis,
        config.output_dir.clone(),
    ));
    let scheduler = BatchScheduler::new(scheduler_config, writer, reporter);

    Ok(scheduler.run(items).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::TaskResult;
    use crate::config::load_config_from_str;
    use crate::infrastructure::adapters::auth::test_key;
    use crate::infrastructure::adapters::{FakeEvent, FakeSynthesizer, FakeSynthesizerConfig};
    use config::FileFormat;
    use std::num::NonZeroUsize;
    use std::path::Path;
    use std::sync::Mutex;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingReporter(Mutex<Vec<TaskResult>>);

    impl OutcomeReporter for RecordingReporter {
        fn report(&self, result: &TaskResult) {
            self.0.lock().unwrap().push(result.clone());
        }
    }

    fn write_fixtures(dir: &Path, key: &str, csv: &str) -> AppConfig {
        let key_path = dir.join("key.json");
        let csv_path = dir.join("prompts.csv");
        let out_dir = dir.join("out");
        std::fs::write(&key_path, key).unwrap();
        std::fs::write(&csv_path, csv).unwrap();
        std::fs::create_dir(&out_dir).unwrap();

        let yaml = format!(
            r#"
google_settings:
  JSON_key: "{}"
  language_code: en-US
  voice_name: en-US-Wavenet-D
  voice_gender: MALE
  audio_encoding: LINEAR16
csv_prompts_file: "{}"
output_dir: "{}"
"#,
            key_path.display(),
            csv_path.display(),
            out_dir.display()
        );
        load_config_from_str(&yaml, FileFormat::Yaml).unwrap()
    }

    fn scheduler_config(batch: usize) -> BatchSchedulerConfig {
        BatchSchedulerConfig {
            batch_size: NonZeroUsize::new(batch).unwrap(),
            max_in_flight: None,
        }
    }

    #[tokio::test]
    async fn test_invalid_credentials_dispatch_nothing() {
        let temp_dir = tempdir().unwrap();
        let config = write_fixtures(
            temp_dir.path(),
            r#"{"client_email": "a@b.c", "private_key": "not a pem"}"#,
            "a,hello\nb,world\n",
        );
        let reporter = Arc::new(RecordingReporter::default());

        let result = run(&config, scheduler_config(10), reporter.clone()).await;

        assert!(result.is_err());
        assert!(reporter.0.lock().unwrap().is_empty());
        assert_eq!(std::fs::read_dir(&config.output_dir).unwrap().count(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_three_rows_two_per_batch() {
        let temp_dir = tempdir().unwrap();
        let config = write_fixtures(temp_dir.path(), "{}", "a,hello\nb,world\nc,bye\n");
        let fake = Arc::new(FakeSynthesizer::new(FakeSynthesizerConfig {
            audio_data: b"audio".to_vec(),
            ..Default::default()
        }));
        let service = ConfiguredService {
            synthesizer: fake.clone(),
            synthesis: Arc::new(config.google_settings.to_synthesis_config()),
        };
        let reporter = Arc::new(RecordingReporter::default());

        let outcome = dispatch(service, &config, scheduler_config(2), reporter.clone())
            .await
            .unwrap();

        assert_eq!(outcome.chunks, 2);
        assert_eq!(outcome.dispatched, 3);
        assert!(outcome.all_succeeded());

        for name in ["a.WAV", "b.WAV", "c.WAV"] {
            assert_eq!(std::fs::read(config.output_dir.join(name)).unwrap(), b"audio");
        }

        let events = fake.events();
        let c_started = events
            .iter()
            .position(|e| *e == FakeEvent::Started("bye".to_string()))
            .unwrap();
        let finished_before_c = events[..c_started]
            .iter()
            .filter(|e| matches!(e, FakeEvent::Finished(_)))
            .count();
        assert_eq!(finished_before_c, 2);
        assert_eq!(reporter.0.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_table_completes() {
        let temp_dir = tempdir().unwrap();
        let config = write_fixtures(temp_dir.path(), "{}", "");
        let fake = Arc::new(FakeSynthesizer::with_defaults());
        let service = ConfiguredService {
            synthesizer: fake.clone(),
            synthesis: Arc::new(config.google_settings.to_synthesis_config()),
        };

        let outcome = dispatch(
            service,
            &config,
            scheduler_config(10),
            Arc::new(RecordingReporter::default()),
        )
        .await
        .unwrap();

        assert_eq!(outcome, BatchOutcome::default());
        assert_eq!(std::fs::read_dir(&config.output_dir).unwrap().count(), 0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_google_service_end_to_end() {
        let mut server = mockito::Server::new_async().await;
        let token = server
            .mock("POST", "/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token": "tok-1", "expires_in": 3600}"#)
            .expect(1)
            .create_async()
            .await;
        let hello = server
            .mock("POST", "/v1/text:synthesize")
            .match_header("authorization", "Bearer tok-1")
            .match_body(mockito::Matcher::PartialJson(
                serde_json::json!({"input": {"text": "hello"}}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"audioContent": "UklGRg=="}"#)
            .expect(2)
            .create_async()
            .await;
        let _bad = server
            .mock("POST", "/v1/text:synthesize")
            .match_body(mockito::Matcher::PartialJson(
                serde_json::json!({"input": {"text": "bad"}}),
            ))
            .with_status(400)
            .with_body("nope")
            .create_async()
            .await;

        let temp_dir = tempdir().unwrap();
        let key = test_key(&format!("{}/token", server.url()));
        let key_json = serde_json::json!({
            "client_email": key.client_email,
            "private_key": key.private_key,
            "token_uri": key.token_uri,
        });
        let mut config = write_fixtures(
            temp_dir.path(),
            &key_json.to_string(),
            "a,hello\nb,bad\nc,hello\n",
        );
        config.service.endpoint = server.url();
        let reporter = Arc::new(RecordingReporter::default());

        let outcome = run(&config, scheduler_config(2), reporter.clone())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            BatchOutcome {
                chunks: 2,
                dispatched: 3,
                failed: 1
            }
        );
        assert_eq!(std::fs::read(config.output_dir.join("a.WAV")).unwrap(), b"RIFF");
        assert_eq!(std::fs::read(config.output_dir.join("c.WAV")).unwrap(), b"RIFF");
        assert!(!config.output_dir.join("b.WAV").exists());

        let lines: Vec<String> = reporter
            .0
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.to_string())
            .collect();
        assert!(lines.contains(
            &"🔥 ERROR creating the prompt (b.WAV) : (Service error: HTTP 400 Bad Request: nope)"
                .to_string()
        ));

        token.assert_async().await;
        hello.assert_async().await;
    }
}
