//! End-to-end dialogue turns against scripted collaborators
//!
//! Every external service is faked; the orchestrator, resolver chain,
//! sentiment gate and confirmation loop are the real ones.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tempfile::TempDir;

use aurora_ivr_agent::{
    AgentServices, CaptureSettings, DialogueEvent, DialogueOrchestrator, DialogueState,
    EscalationReason, TurnOutcome,
};
use aurora_ivr_config::{DialogueSettings, DomainConfig, PromptsConfig};
use aurora_ivr_core::{
    AudioBuffer, AudioPlayer, AudioRecorder, AudioSource, ClassifierLabel, Error,
    IntentCategory, IntentClassifier, OperatorInput, RawSentiment, Result, SentimentScorer,
    SpeechToText, TextToSpeech, TurnRole, VoiceConfig,
};
use aurora_ivr_persistence::MemoryTranscriptLog;

const BOOKING_QUERY: &str = "I'd like to book a flight to Sydney";

struct ScriptedInput {
    lines: Mutex<VecDeque<String>>,
}

#[async_trait]
impl OperatorInput for ScriptedInput {
    async fn read_line(&self, _prompt: &str) -> Result<String> {
        self.lines
            .lock()
            .pop_front()
            .ok_or_else(|| Error::Input("operator input closed".to_string()))
    }
}

struct ScriptedTranscriber {
    replies: Mutex<VecDeque<Result<String>>>,
    calls: AtomicUsize,
}

#[async_trait]
impl SpeechToText for ScriptedTranscriber {
    async fn transcribe(&self, _audio: &AudioBuffer) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Transcription("script exhausted".to_string())))
    }

    fn model_name(&self) -> &str {
        "scripted-stt"
    }
}

#[derive(Default)]
struct RecordingSpeech {
    spoken: Mutex<Vec<String>>,
}

impl RecordingSpeech {
    fn spoken(&self) -> Vec<String> {
        self.spoken.lock().clone()
    }

    fn times_said(&self, text: &str) -> usize {
        self.spoken.lock().iter().filter(|s| *s == text).count()
    }
}

#[async_trait]
impl TextToSpeech for RecordingSpeech {
    async fn speak(&self, text: &str, _voice: &VoiceConfig) -> Result<()> {
        self.spoken.lock().push(text.to_string());
        Ok(())
    }

    fn model_name(&self) -> &str {
        "recording-tts"
    }
}

#[derive(Default)]
struct FakeRecorder {
    sources: Mutex<Vec<AudioSource>>,
}

impl FakeRecorder {
    fn calls(&self) -> usize {
        self.sources.lock().len()
    }
}

#[async_trait]
impl AudioRecorder for FakeRecorder {
    async fn record(&self, source: &AudioSource) -> Result<AudioBuffer> {
        self.sources.lock().push(source.clone());
        Ok(AudioBuffer::mono(vec![0.0; 1600]))
    }
}

#[derive(Default)]
struct CountingPlayer {
    plays: AtomicUsize,
}

#[async_trait]
impl AudioPlayer for CountingPlayer {
    async fn play(&self, _audio: &AudioBuffer) -> Result<()> {
        self.plays.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct FixedSentiment {
    /// `None` simulates an unreachable backend
    score: Option<f32>,
    calls: AtomicUsize,
}

#[async_trait]
impl SentimentScorer for FixedSentiment {
    async fn score(&self, _text: &str) -> Result<RawSentiment> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.score {
            Some(score) => Ok(RawSentiment {
                label: if score < 0.5 { "NEGATIVE" } else { "POSITIVE" }.to_string(),
                score,
            }),
            None => Err(Error::unavailable("sentiment", "503 Service Unavailable")),
        }
    }

    fn model_name(&self) -> &str {
        "fixed-sentiment"
    }
}

struct FixedClassifier {
    /// `None` simulates an unreachable backend
    label: Option<String>,
    inputs: Mutex<Vec<String>>,
}

impl FixedClassifier {
    fn calls(&self) -> usize {
        self.inputs.lock().len()
    }
}

#[async_trait]
impl IntentClassifier for FixedClassifier {
    async fn classify(&self, input: &str) -> Result<ClassifierLabel> {
        self.inputs.lock().push(input.to_string());
        match &self.label {
            Some(label) => Ok(ClassifierLabel::new(label.clone())),
            None => Err(Error::unavailable("classifier", "connection refused")),
        }
    }

    fn model_name(&self) -> &str {
        "fixed-classifier"
    }
}

struct Harness {
    dir: TempDir,
    stt: Arc<ScriptedTranscriber>,
    tts: Arc<RecordingSpeech>,
    recorder: Arc<FakeRecorder>,
    player: Arc<CountingPlayer>,
    sentiment: Arc<FixedSentiment>,
    classifier: Arc<FixedClassifier>,
    transcript: Arc<MemoryTranscriptLog>,
    input: Arc<ScriptedInput>,
    dialogue: DialogueSettings,
}

impl Harness {
    fn new(lines: &[&str], transcripts: &[&str], sentiment: Option<f32>, label: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        AudioBuffer::mono(vec![0.1; 160])
            .write_wav(dir.path().join("hold.wav"))
            .unwrap();

        Self {
            dir,
            stt: Arc::new(ScriptedTranscriber {
                replies: Mutex::new(transcripts.iter().map(|t| Ok(t.to_string())).collect()),
                calls: AtomicUsize::new(0),
            }),
            tts: Arc::new(RecordingSpeech::default()),
            recorder: Arc::new(FakeRecorder::default()),
            player: Arc::new(CountingPlayer::default()),
            sentiment: Arc::new(FixedSentiment {
                score: sentiment,
                calls: AtomicUsize::new(0),
            }),
            classifier: Arc::new(FixedClassifier {
                label: Some(label.to_string()),
                inputs: Mutex::new(Vec::new()),
            }),
            transcript: Arc::new(MemoryTranscriptLog::new()),
            input: Arc::new(ScriptedInput {
                lines: Mutex::new(lines.iter().map(|l| l.to_string()).collect()),
            }),
            dialogue: DialogueSettings {
                rng_seed: Some(7),
                ..DialogueSettings::default()
            },
        }
    }

    fn with_classifier_down(mut self) -> Self {
        self.classifier = Arc::new(FixedClassifier {
            label: None,
            inputs: Mutex::new(Vec::new()),
        });
        self
    }

    fn services(&self) -> AgentServices {
        AgentServices {
            stt: self.stt.clone(),
            tts: self.tts.clone(),
            recorder: self.recorder.clone(),
            player: self.player.clone(),
            sentiment: self.sentiment.clone(),
            classifier: self.classifier.clone(),
            transcript: self.transcript.clone(),
            input: self.input.clone(),
        }
    }

    fn orchestrator(&self) -> DialogueOrchestrator {
        let capture = CaptureSettings {
            record_duration: Duration::from_millis(100),
            sample_rate: 16_000,
            query_wav: self.dir.path().join("query.wav"),
            response_wav: self.dir.path().join("response.wav"),
        };
        DialogueOrchestrator::with_parts(
            self.services(),
            Arc::new(DomainConfig::default()),
            VoiceConfig::default(),
            capture,
            self.dialogue.clone(),
            self.dir.path().join("hold.wav"),
        )
    }

    fn plays(&self) -> usize {
        self.player.plays.load(Ordering::SeqCst)
    }
}

fn prompts() -> PromptsConfig {
    PromptsConfig::default()
}

/// Booking query confirmed with "yes" delivers a booking response and the hold cue
#[tokio::test]
async fn test_booking_confirmed_acts() {
    let harness = Harness::new(&["record"], &[BOOKING_QUERY, "yes"], Some(0.9), "LABEL_0");
    let report = harness.orchestrator().run_turn().await;

    let booking = DomainConfig::default()
        .responses
        .candidates(IntentCategory::Booking)
        .to_vec();
    match &report.outcome {
        TurnOutcome::Acted { intent, response } => {
            assert_eq!(*intent, IntentCategory::Booking);
            assert!(booking.contains(response));
        }
        other => panic!("expected acted, got {other:?}"),
    }

    assert!(report.turn.may_act());
    assert_eq!(report.turn.utterance_text.as_deref(), Some(BOOKING_QUERY));
    assert_eq!(harness.classifier.calls(), 0);
    assert_eq!(harness.plays(), 1);

    let spoken = harness.tts.spoken();
    assert_eq!(spoken.first(), Some(&prompts().greeting));
    assert!(spoken.contains(&prompts().confirmation_for(IntentCategory::Booking)));
    assert_eq!(spoken.last(), Some(&prompts().handoff));

    assert!(report.trace.visited(DialogueState::Act));
    assert!(!report.trace.visited(DialogueState::Escalate));
    assert_eq!(report.trace.current(), Some(DialogueState::Closure));

    assert!(harness.dir.path().join("query.wav").exists());
    assert!(harness.dir.path().join("response.wav").exists());
}

/// Nonsense query with a no-intent classifier label escalates without confirmation
#[tokio::test]
async fn test_unknown_intent_escalates() {
    let harness = Harness::new(
        &["record"],
        &["asdkjasnd nonsense query"],
        Some(0.6),
        "LABEL_0",
    );
    let report = harness.orchestrator().run_turn().await;

    assert_eq!(
        report.outcome.escalation_reason(),
        Some(EscalationReason::UnknownIntent)
    );
    assert_eq!(report.turn.resolved_intent, Some(IntentCategory::Unknown));
    assert_eq!(harness.classifier.calls(), 1);
    assert_eq!(harness.stt.calls.load(Ordering::SeqCst), 1);
    assert!(!report.trace.visited(DialogueState::Confirm));
    assert_eq!(harness.tts.times_said(&prompts().irrelevant_escalation), 1);
    assert_eq!(harness.plays(), 1);
}

/// Strongly negative sentiment escalates before intent resolution runs
#[tokio::test]
async fn test_negative_sentiment_skips_resolution() {
    let harness = Harness::new(&["record"], &[BOOKING_QUERY], Some(0.1), "booking");
    let report = harness.orchestrator().run_turn().await;

    assert_eq!(
        report.outcome.escalation_reason(),
        Some(EscalationReason::NegativeSentiment)
    );
    let sentiment = report.turn.sentiment.clone().unwrap();
    assert!((sentiment.compound_score + 0.8).abs() < 1e-5);

    assert_eq!(harness.classifier.calls(), 0);
    assert!(!report.trace.visited(DialogueState::ResolveIntent));
    assert_eq!(report.turn.resolved_intent, None);
    assert_eq!(harness.tts.times_said(&prompts().sentiment_escalation), 1);
}

/// Hedged replies never reach ACT
#[tokio::test]
async fn test_ambiguous_reply_clarifies() {
    let mut harness = Harness::new(
        &["record"],
        &[BOOKING_QUERY, "maybe, not sure", "maybe, not sure"],
        Some(0.9),
        "LABEL_0",
    );
    harness.dialogue.escalate_unresolved = false;
    let report = harness.orchestrator().run_turn().await;

    assert_eq!(
        report.outcome,
        TurnOutcome::Unresolved {
            intent: IntentCategory::Booking
        }
    );
    assert!(!report.trace.visited(DialogueState::Act));
    assert_eq!(report.trace.count(DialogueState::Confirm), 2);
    assert_eq!(harness.tts.times_said(&prompts().clarification), 2);
    // The question is asked once; the second round only listens
    let question = prompts().confirmation_for(IntentCategory::Booking);
    assert_eq!(harness.tts.times_said(&question), 1);
    assert_eq!(harness.plays(), 0);
}

/// Exhausted confirmation rounds escalate when configured to
#[tokio::test]
async fn test_ambiguous_reply_exhausts_and_escalates() {
    let harness = Harness::new(
        &["record"],
        &[BOOKING_QUERY, "maybe", "perhaps"],
        Some(0.9),
        "LABEL_0",
    );
    let report = harness.orchestrator().run_turn().await;

    assert_eq!(
        report.outcome.escalation_reason(),
        Some(EscalationReason::ConfirmationExhausted)
    );
    assert_eq!(harness.tts.times_said(&prompts().clarification), 1);
    assert_eq!(
        report.turn.confirmation_outcome,
        Some(aurora_ivr_core::ConfirmationOutcome::Ambiguous)
    );
}

/// A clarified "yes" on the second round still acts
#[tokio::test]
async fn test_clarified_reply_acts() {
    let harness = Harness::new(
        &["record"],
        &[BOOKING_QUERY, "maybe", "yes please"],
        Some(0.9),
        "LABEL_0",
    );
    let report = harness.orchestrator().run_turn().await;

    assert!(matches!(report.outcome, TurnOutcome::Acted { .. }));
    assert_eq!(report.trace.count(DialogueState::Clarify), 1);
    assert_eq!(report.trace.count(DialogueState::Confirm), 2);
}

#[tokio::test]
async fn test_negative_confirmation_escalates() {
    let harness = Harness::new(&["record"], &[BOOKING_QUERY, "no"], Some(0.9), "LABEL_0");
    let report = harness.orchestrator().run_turn().await;

    assert_eq!(
        report.outcome.escalation_reason(),
        Some(EscalationReason::NegativeConfirmation)
    );
    assert!(!report.turn.may_act());
    assert_eq!(harness.tts.times_said(&prompts().irrelevant_escalation), 1);
}

/// Classifier fallback resolves queries the keyword table misses
#[tokio::test]
async fn test_classifier_fallback_resolves() {
    let harness = Harness::new(
        &["record"],
        &["where did my suitcase go", "yes"],
        Some(0.7),
        "baggage_information",
    );
    let report = harness.orchestrator().run_turn().await;

    assert!(matches!(
        report.outcome,
        TurnOutcome::Acted {
            intent: IntentCategory::BaggageInformation,
            ..
        }
    ));
    let inputs = harness.classifier.inputs.lock().clone();
    assert_eq!(inputs, vec![prompts().classifier_input("where did my suitcase go")]);
}

/// Invalid choices are re-asked; file input asks for a path per capture
#[tokio::test]
async fn test_input_method_retry_then_file() {
    let harness = Harness::new(
        &["telephone", "  File ", "query.wav", "reply.wav"],
        &[BOOKING_QUERY, "yes"],
        Some(0.9),
        "LABEL_0",
    );
    let report = harness.orchestrator().run_turn().await;

    assert!(matches!(report.outcome, TurnOutcome::Acted { .. }));
    assert_eq!(harness.tts.times_said(&prompts().invalid_input_method), 1);
    assert_eq!(harness.tts.times_said(&prompts().input_method_question), 2);
    assert_eq!(harness.tts.times_said(&prompts().file_path_request), 2);
    assert_eq!(
        *harness.recorder.sources.lock(),
        vec![
            AudioSource::File("query.wav".into()),
            AudioSource::File("reply.wav".into()),
        ]
    );
}

#[tokio::test]
async fn test_input_method_exhausted_escalates() {
    let harness = Harness::new(&["a", "b", "c"], &[], Some(0.9), "LABEL_0");
    let report = harness.orchestrator().run_turn().await;

    assert_eq!(
        report.outcome.escalation_reason(),
        Some(EscalationReason::InputMethodExhausted)
    );
    assert_eq!(harness.tts.times_said(&prompts().invalid_input_method), 3);
    assert_eq!(harness.recorder.calls(), 0);
}

#[tokio::test]
async fn test_closed_input_aborts() {
    let harness = Harness::new(&[], &[], Some(0.9), "LABEL_0");
    let report = harness.orchestrator().run_turn().await;

    assert!(matches!(report.outcome, TurnOutcome::Aborted { .. }));
    assert!(!report.outcome.is_handled());
    assert_eq!(report.trace.current(), Some(DialogueState::Closure));
}

/// Blank transcript aborts before sentiment analysis
#[tokio::test]
async fn test_empty_transcript_aborts() {
    let harness = Harness::new(&["record"], &["   "], Some(0.9), "LABEL_0");
    let report = harness.orchestrator().run_turn().await;

    assert!(matches!(report.outcome, TurnOutcome::Aborted { .. }));
    assert_eq!(harness.sentiment.calls.load(Ordering::SeqCst), 0);
    assert_eq!(harness.tts.times_said(&prompts().capture_failure), 1);
    assert_eq!(report.turn.utterance_text, None);
}

#[tokio::test]
async fn test_sentiment_outage_escalates() {
    let harness = Harness::new(&["record"], &[BOOKING_QUERY], None, "LABEL_0");
    let report = harness.orchestrator().run_turn().await;

    assert_eq!(
        report.outcome.escalation_reason(),
        Some(EscalationReason::ServiceUnavailable)
    );
    assert_eq!(harness.classifier.calls(), 0);
}

/// A classifier outage is reported as a failure, not as an unknown intent
#[tokio::test]
async fn test_classifier_outage_escalates() {
    let harness =
        Harness::new(&["record"], &["zzz qqq"], Some(0.8), "LABEL_0").with_classifier_down();
    let report = harness.orchestrator().run_turn().await;

    assert_eq!(
        report.outcome,
        TurnOutcome::Escalated {
            reason: EscalationReason::ServiceUnavailable
        }
    );
    assert_eq!(report.turn.resolved_intent, None);
    assert_eq!(harness.classifier.calls(), 1);
    assert!(!report.trace.visited(DialogueState::Confirm));
    assert_eq!(
        harness.tts.spoken().last(),
        Some(&prompts().irrelevant_escalation)
    );
}

/// Both sides of the exchange land in the transcript
#[tokio::test]
async fn test_transcript_records_both_roles() {
    let harness = Harness::new(&["record"], &[BOOKING_QUERY, "yes"], Some(0.9), "LABEL_0");
    harness.orchestrator().run_turn().await;

    assert_eq!(
        harness.transcript.texts(TurnRole::User),
        vec![BOOKING_QUERY.to_string(), "yes".to_string()]
    );
    assert_eq!(
        harness.transcript.texts(TurnRole::System),
        harness.tts.spoken()
    );
}

/// Seeded selection repeats the same response
#[tokio::test]
async fn test_seeded_response_is_repeatable() {
    let first = Harness::new(&["record"], &[BOOKING_QUERY, "yes"], Some(0.9), "LABEL_0");
    let second = Harness::new(&["record"], &[BOOKING_QUERY, "yes"], Some(0.9), "LABEL_0");

    let a = first.orchestrator().run_turn().await.outcome;
    let b = second.orchestrator().run_turn().await.outcome;
    assert_eq!(a, b);
}

/// Subscribers see every state change followed by the outcome
#[tokio::test]
async fn test_turn_events() {
    let harness = Harness::new(&["record"], &[BOOKING_QUERY, "no"], Some(0.9), "LABEL_0");
    let orchestrator = harness.orchestrator();
    let mut events = orchestrator.subscribe();

    let report = orchestrator.run_turn().await;

    let mut states = Vec::new();
    let mut ended = None;
    while let Ok(event) = events.try_recv() {
        match event {
            DialogueEvent::StateChanged { from, to } => {
                if states.is_empty() {
                    assert_eq!(from, None);
                }
                states.push(to);
            }
            DialogueEvent::TurnEnded { outcome } => ended = Some(outcome),
        }
    }

    assert_eq!(states, report.trace.states().to_vec());
    assert_eq!(states.first(), Some(&DialogueState::Greeting));
    assert_eq!(ended, Some(report.outcome));
}

/// A domain file that cannot be read is a startup error
#[tokio::test]
async fn test_missing_domain_file_fails_startup() {
    let harness = Harness::new(&[], &[], Some(0.9), "LABEL_0");
    let settings = aurora_ivr_config::Settings {
        domain_config_path: Some(
            harness
                .dir
                .path()
                .join("missing.yaml")
                .display()
                .to_string(),
        ),
        ..Default::default()
    };

    let result = DialogueOrchestrator::from_settings(harness.services(), &settings);
    assert!(matches!(result, Err(aurora_ivr_agent::AgentError::Config(_))));
}
