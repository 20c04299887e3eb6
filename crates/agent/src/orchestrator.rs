//! Dialogue orchestrator
//!
//! Runs one complete turn:
//!
//! ```text
//! GREETING -> AWAIT_INPUT_METHOD -> CAPTURE_AUDIO -> TRANSCRIBE -> SENTIMENT_CHECK
//!   SENTIMENT_CHECK -> ESCALATE            (compound < -0.7, resolver never called)
//!   SENTIMENT_CHECK -> RESOLVE_INTENT
//!   RESOLVE_INTENT  -> ESCALATE            (unknown)
//!   RESOLVE_INTENT  -> CONFIRM
//!   CONFIRM -> ACT | ESCALATE | CLARIFY
//!   CLARIFY -> CONFIRM                     (while rounds remain)
//!   ACT | ESCALATE -> CLOSURE
//! ```
//!
//! Every turn ends in CLOSURE with a [`TurnOutcome`]. Capture or
//! transcription failure aborts the turn; an unavailable analysis service
//! escalates it.

use aurora_ivr_config::{DialogueSettings, DomainConfig, Settings};
use aurora_ivr_core::{ConfirmationOutcome, ConversationTurn, IntentCategory, TurnId, VoiceConfig};
use aurora_ivr_text_processing::{
    ClassifierFallback, IntentResolver, KeywordMatcher, SentimentDecision, SentimentGate,
};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::Instrument;

use crate::input_method::choose_input_method;
use crate::{
    AgentError, AgentServices, CallerChannel, CapturePurpose, CaptureSettings, ConfirmationLoop,
    DialogueEvent, DialogueState, DialogueTrace, EscalationReason, InputMethod, ResponseSelector,
    TurnOutcome,
};

/// Everything known about a finished turn
#[derive(Debug, Clone, Serialize)]
pub struct TurnReport {
    pub turn: ConversationTurn,
    pub outcome: TurnOutcome,
    pub trace: DialogueTrace,
}

/// Per-turn mutable state
struct TurnContext {
    turn: ConversationTurn,
    trace: DialogueTrace,
}

pub struct DialogueOrchestrator {
    channel: CallerChannel,
    gate: SentimentGate,
    resolver: IntentResolver,
    confirmation: ConfirmationLoop,
    selector: ResponseSelector,
    domain: Arc<DomainConfig>,
    dialogue: DialogueSettings,
    hold_music: PathBuf,
    event_tx: broadcast::Sender<DialogueEvent>,
}

impl DialogueOrchestrator {
    /// Wire the orchestrator from loaded settings and domain content
    pub fn new(services: AgentServices, domain: Arc<DomainConfig>, settings: &Settings) -> Self {
        Self::with_parts(
            services,
            domain,
            settings.voice.clone(),
            CaptureSettings::from(&settings.audio),
            settings.dialogue.clone(),
            PathBuf::from(&settings.audio.hold_music_path),
        )
    }

    /// Load the domain file named in `settings` (or the built-in content)
    pub fn from_settings(services: AgentServices, settings: &Settings) -> Result<Self, AgentError> {
        let domain = DomainConfig::load_or_default(settings.domain_config_path.as_deref())?;
        Ok(Self::new(services, Arc::new(domain), settings))
    }

    pub fn with_parts(
        services: AgentServices,
        domain: Arc<DomainConfig>,
        voice: VoiceConfig,
        capture: CaptureSettings,
        dialogue: DialogueSettings,
        hold_music: PathBuf,
    ) -> Self {
        let (event_tx, _) = broadcast::channel(64);

        let resolver = IntentResolver::keyword_then_classifier(
            KeywordMatcher::new(domain.lexicon.clone()),
            ClassifierFallback::new(
                services.classifier.clone(),
                domain.labels.clone(),
                domain.prompts.clone(),
            ),
        );

        Self {
            gate: SentimentGate::new(services.sentiment.clone()),
            resolver,
            confirmation: ConfirmationLoop::new(&domain.prompts, &domain.replies),
            selector: ResponseSelector::new(dialogue.rng_seed),
            channel: CallerChannel::new(services, voice, capture, &domain.prompts),
            domain,
            dialogue,
            hold_music,
            event_tx,
        }
    }

    /// Subscribe to state changes and turn outcomes
    pub fn subscribe(&self) -> broadcast::Receiver<DialogueEvent> {
        self.event_tx.subscribe()
    }

    /// Run one full turn from greeting to closure
    pub async fn run_turn(&self) -> TurnReport {
        let turn_id = TurnId::new();
        let span = tracing::info_span!("turn", turn_id = %turn_id);

        let mut ctx = TurnContext {
            turn: ConversationTurn::new(turn_id),
            trace: DialogueTrace::new(),
        };

        let outcome = self.drive(&mut ctx).instrument(span.clone()).await;
        span.in_scope(|| self.close(&mut ctx, &outcome));

        TurnReport {
            turn: ctx.turn,
            outcome,
            trace: ctx.trace,
        }
    }

    async fn drive(&self, ctx: &mut TurnContext) -> TurnOutcome {
        let prompts = &self.domain.prompts;
        let turn_id = ctx.turn.turn_id;

        self.enter(ctx, DialogueState::Greeting);
        self.channel.say(&prompts.greeting).await;

        self.enter(ctx, DialogueState::AwaitInputMethod);
        let method = match choose_input_method(
            &self.channel,
            prompts,
            self.dialogue.max_input_attempts,
        )
        .await
        {
            Ok(method) => method,
            Err(AgentError::InputMethodExhausted { attempts }) => {
                tracing::warn!(attempts, "No valid input method chosen");
                return self
                    .escalate(ctx, EscalationReason::InputMethodExhausted)
                    .await;
            }
            Err(e) => return self.abort(e).await,
        };

        self.enter(ctx, DialogueState::CaptureAudio);
        let audio = match self.channel.capture(method, CapturePurpose::Query).await {
            Ok(audio) => audio,
            Err(e) => return self.abort(e.into()).await,
        };

        self.enter(ctx, DialogueState::Transcribe);
        let utterance = match self.channel.transcribe(&audio, turn_id).await {
            Ok(utterance) => utterance,
            Err(e) => return self.abort(e.into()).await,
        };
        ctx.turn.utterance_text = Some(utterance.text().to_string());

        self.enter(ctx, DialogueState::SentimentCheck);
        let sentiment = match self.gate.evaluate(utterance.text()).await {
            Ok(sentiment) => sentiment,
            Err(e) => {
                tracing::error!(error = %e, "Sentiment analysis unavailable");
                return self
                    .escalate(ctx, EscalationReason::ServiceUnavailable)
                    .await;
            }
        };
        let decision = SentimentGate::decide(&sentiment);
        ctx.turn.sentiment = Some(sentiment);
        if decision == SentimentDecision::Escalate {
            return self.escalate(ctx, EscalationReason::NegativeSentiment).await;
        }

        self.enter(ctx, DialogueState::ResolveIntent);
        let intent = match self.resolver.resolve(utterance.text()).await {
            Ok(intent) => intent,
            Err(e) => {
                tracing::error!(error = %e, "Intent resolution failed");
                return self
                    .escalate(ctx, EscalationReason::ServiceUnavailable)
                    .await;
            }
        };
        ctx.turn.resolved_intent = Some(intent);
        tracing::info!(intent = %intent, "Intent resolved");
        if intent.is_unknown() {
            return self.escalate(ctx, EscalationReason::UnknownIntent).await;
        }

        self.confirm_and_act(ctx, method, intent).await
    }

    async fn confirm_and_act(
        &self,
        ctx: &mut TurnContext,
        method: InputMethod,
        intent: IntentCategory,
    ) -> TurnOutcome {
        let turn_id = ctx.turn.turn_id;
        let max_rounds = self.dialogue.max_confirmation_rounds.max(1);

        self.enter(ctx, DialogueState::Confirm);
        let mut reply = self
            .confirmation
            .confirm(&self.channel, method, turn_id, intent)
            .await;
        let mut round = 1;

        loop {
            let outcome = match reply {
                Ok(outcome) => outcome,
                Err(e) => return self.abort(e).await,
            };
            ctx.turn.confirmation_outcome = Some(outcome);

            match outcome {
                ConfirmationOutcome::Affirmative => return self.act(ctx, intent).await,
                ConfirmationOutcome::Negative => {
                    return self
                        .escalate(ctx, EscalationReason::NegativeConfirmation)
                        .await;
                }
                ConfirmationOutcome::Ambiguous if round < max_rounds => {
                    self.enter(ctx, DialogueState::Clarify);
                    self.channel.say(&self.domain.prompts.clarification).await;
                    round += 1;
                    self.enter(ctx, DialogueState::Confirm);
                    reply = self.confirmation.listen(&self.channel, method, turn_id).await;
                }
                ConfirmationOutcome::Ambiguous => {
                    tracing::info!(rounds = round, "Confirmation still ambiguous");
                    if self.dialogue.escalate_unresolved {
                        return self
                            .escalate(ctx, EscalationReason::ConfirmationExhausted)
                            .await;
                    }
                    self.enter(ctx, DialogueState::Clarify);
                    self.channel.say(&self.domain.prompts.clarification).await;
                    return TurnOutcome::Unresolved { intent };
                }
            }
        }
    }

    async fn act(&self, ctx: &mut TurnContext, intent: IntentCategory) -> TurnOutcome {
        debug_assert!(ctx.turn.may_act());
        self.enter(ctx, DialogueState::Act);

        let candidates = self.domain.responses.candidates(intent);
        let Some(response) = self.selector.select(candidates) else {
            tracing::error!(intent = %intent, "No responses configured");
            return self.escalate(ctx, EscalationReason::UnknownIntent).await;
        };

        self.channel.say(&response).await;
        self.channel.say(&self.domain.prompts.handoff).await;
        self.channel.play_cue(&self.hold_music).await;

        TurnOutcome::Acted { intent, response }
    }

    async fn escalate(&self, ctx: &mut TurnContext, reason: EscalationReason) -> TurnOutcome {
        self.enter(ctx, DialogueState::Escalate);
        tracing::info!(reason = %reason, "Escalating to a human agent");
        metrics::counter!("aurora_ivr_escalations_total", "reason" => reason.as_str()).increment(1);

        let prompts = &self.domain.prompts;
        let notice = match reason {
            EscalationReason::NegativeSentiment => &prompts.sentiment_escalation,
            _ => &prompts.irrelevant_escalation,
        };
        self.channel.say(notice).await;
        self.channel.play_cue(&self.hold_music).await;

        TurnOutcome::Escalated { reason }
    }

    async fn abort(&self, err: AgentError) -> TurnOutcome {
        if err.is_capture_failure() {
            tracing::warn!(error = %err, "Caller audio unusable, aborting turn");
            self.channel.say(&self.domain.prompts.capture_failure).await;
        } else {
            tracing::error!(error = %err, "Turn aborted");
        }
        TurnOutcome::Aborted {
            reason: err.to_string(),
        }
    }

    fn enter(&self, ctx: &mut TurnContext, to: DialogueState) {
        let from = ctx.trace.current();
        ctx.trace.push(to);
        tracing::debug!(from = ?from, state = %to, "Dialogue state");
        let _ = self.event_tx.send(DialogueEvent::StateChanged { from, to });
    }

    fn close(&self, ctx: &mut TurnContext, outcome: &TurnOutcome) {
        self.enter(ctx, DialogueState::Closure);
        metrics::counter!("aurora_ivr_turn_outcomes_total", "outcome" => outcome.kind())
            .increment(1);
        tracing::info!(
            outcome = outcome.kind(),
            intent = ?ctx.turn.resolved_intent,
            states = ctx.trace.states().len(),
            "Turn finished"
        );
        let _ = self.event_tx.send(DialogueEvent::TurnEnded {
            outcome: outcome.clone(),
        });
    }
}
