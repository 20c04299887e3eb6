//! Aurora Airlines voice assistant entry point
//!
//! Runs a single dialogue turn on the operator console and exits with 0
//! when the turn reached a defined end (acted, escalated, unresolved) or 1
//! when it was aborted.

use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use aurora_ivr_agent::{AgentServices, DialogueOrchestrator};
use aurora_ivr_config::{load_settings, DomainConfig, Settings, TtsBackend};
use aurora_ivr_core::{AudioPlayer, TextToSpeech, TranscriptLog};
use aurora_ivr_persistence::{DisabledTranscriptLog, FileTranscriptLog};
use aurora_ivr_pipeline::{
    ConsoleSpeech, HttpIntentClassifier, HttpSentimentScorer, HttpSynthesizer, HttpTranscriber,
    InferenceClient, LocalAudio, StdinInput,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    // Priority: env vars > config/{env}.toml > config/default.toml > defaults
    let env = std::env::var("AURORA_IVR_ENV").ok();
    let settings = match load_settings(env.as_deref()) {
        Ok(settings) => settings,
        Err(e) => {
            // Tracing is not up yet
            eprintln!("Failed to load configuration: {e}");
            return Ok(ExitCode::FAILURE);
        }
    };

    init_tracing(&settings);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        environment = ?settings.environment,
        endpoint = %settings.services.endpoint,
        device_audio = LocalAudio::has_device_support(),
        "Starting Aurora Airlines voice assistant"
    );

    let domain = Arc::new(DomainConfig::load_or_default(
        settings.domain_config_path.as_deref(),
    )?);
    let services = build_services(&settings, &domain.prompts.agent_name)?;
    tracing::debug!(?services, "Services ready");

    let orchestrator = DialogueOrchestrator::new(services, domain, &settings);
    let report = orchestrator.run_turn().await;

    tracing::info!(
        outcome = report.outcome.kind(),
        turn_id = %report.turn.turn_id,
        "Session finished"
    );

    Ok(if report.outcome.is_handled() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn build_services(settings: &Settings, agent_name: &str) -> anyhow::Result<AgentServices> {
    let client = InferenceClient::from_settings(&settings.services)?;
    let audio = Arc::new(LocalAudio::new(
        settings.audio.sample_rate,
        settings.audio.channels,
    ));
    let player: Arc<dyn AudioPlayer> = audio.clone();

    let tts: Arc<dyn TextToSpeech> = match (
        settings.services.tts_backend,
        settings.services.tts_model.as_deref(),
    ) {
        (TtsBackend::Http, Some(model)) => Arc::new(ConsoleSpeech::with_voice(Arc::new(
            HttpSynthesizer::new(client.clone(), model, player.clone()),
        ))),
        (TtsBackend::Http, None) => {
            tracing::warn!("HTTP speech synthesis selected without services.tts_model; printing only");
            Arc::new(ConsoleSpeech::new())
        }
        (TtsBackend::Console, _) => Arc::new(ConsoleSpeech::new()),
    };

    let transcript: Arc<dyn TranscriptLog> = if settings.transcript.enabled {
        Arc::new(FileTranscriptLog::new(&settings.transcript.path, agent_name))
    } else {
        Arc::new(DisabledTranscriptLog)
    };

    let services = &settings.services;
    Ok(AgentServices {
        stt: Arc::new(HttpTranscriber::new(client.clone(), &services.stt_model)),
        tts,
        recorder: audio,
        player,
        sentiment: Arc::new(HttpSentimentScorer::new(
            client.clone(),
            &services.sentiment_model,
        )),
        classifier: Arc::new(HttpIntentClassifier::new(client, &services.classifier_model)),
        transcript,
        input: Arc::new(StdinInput::new()),
    })
}

fn init_tracing(settings: &Settings) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = &settings.observability.log_level;
        format!("aurora_ivr={level},warn").into()
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);
    // Logs go to stderr; stdout carries the conversation
    let fmt_layer = if settings.observability.log_json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };
    subscriber.with(fmt_layer).init();
}
