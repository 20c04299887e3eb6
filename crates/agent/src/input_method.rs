//! Record-or-file choice

use aurora_ivr_config::PromptsConfig;
use std::str::FromStr;

use crate::{AgentError, CallerChannel};

/// How the caller's audio is obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    /// Record from the input device
    Record,
    /// Read a WAV file named by the operator
    File,
}

impl FromStr for InputMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "record" => Ok(Self::Record),
            "file" => Ok(Self::File),
            _ => Err(()),
        }
    }
}

/// Ask until a valid choice is made or `max_attempts` runs out
pub async fn choose_input_method(
    channel: &CallerChannel,
    prompts: &PromptsConfig,
    max_attempts: u32,
) -> Result<InputMethod, AgentError> {
    for attempt in 1..=max_attempts {
        channel.say(&prompts.input_method_question).await;
        let answer = channel.ask("Record / File: ").await?;

        match answer.parse::<InputMethod>() {
            Ok(method) => {
                tracing::debug!(?method, attempt, "Input method chosen");
                return Ok(method);
            }
            Err(()) => {
                tracing::debug!(answer = %answer, attempt, "Invalid input method");
                channel.say(&prompts.invalid_input_method).await;
            }
        }
    }

    Err(AgentError::InputMethodExhausted {
        attempts: max_attempts,
    })
}
