//! Dialogue orchestration for the Aurora Airlines voice assistant
//!
//! Features:
//! - One-turn state machine: greeting, input method, capture, sentiment
//!   gate, intent resolution, confirmation, action or escalation, closure
//! - Explicitly injected collaborator handles ([`AgentServices`])
//! - Bounded retries for the input-method choice and for ambiguous
//!   confirmations
//! - Seedable response selection
//! - Turn outcome events and metrics

pub mod channel;
pub mod confirmation;
pub mod input_method;
pub mod orchestrator;
pub mod selector;
pub mod services;
pub mod state;

pub use channel::{CallerChannel, CapturePurpose, CaptureSettings};
pub use confirmation::ConfirmationLoop;
pub use input_method::InputMethod;
pub use orchestrator::{DialogueOrchestrator, TurnReport};
pub use selector::ResponseSelector;
pub use services::AgentServices;
pub use state::{DialogueEvent, DialogueState, DialogueTrace, EscalationReason, TurnOutcome};

use thiserror::Error;

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No valid input method after {attempts} attempts")]
    InputMethodExhausted { attempts: u32 },

    #[error(transparent)]
    Core(#[from] aurora_ivr_core::Error),
}

impl From<aurora_ivr_config::ConfigError> for AgentError {
    fn from(err: aurora_ivr_config::ConfigError) -> Self {
        AgentError::Config(err.to_string())
    }
}

impl From<aurora_ivr_config::DomainConfigError> for AgentError {
    fn from(err: aurora_ivr_config::DomainConfigError) -> Self {
        AgentError::Config(err.to_string())
    }
}

impl From<aurora_ivr_text_processing::ResolutionError> for AgentError {
    fn from(err: aurora_ivr_text_processing::ResolutionError) -> Self {
        AgentError::Core(err.into())
    }
}

impl AgentError {
    /// Caller audio could not be captured or transcribed
    pub fn is_capture_failure(&self) -> bool {
        matches!(self, Self::Core(e) if e.is_capture_failure())
    }
}
