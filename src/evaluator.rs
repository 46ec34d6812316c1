//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::alphabet::CharClass;
use crate::sections::{LENGTH_BUCKETS, character_variety_section, length_section};
use crate::types::PasswordEvaluation;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum EvaluationError {
    /// Presence ratios divide by the password length, so an empty password
    /// is rejected up front.
    #[error("cannot evaluate an empty password")]
    EmptyPassword,
}

/// Evaluates password strength.
///
/// The length score buckets the character count (`<12`, `12-15`, `>=16`)
/// and normalizes the tier over the three buckets; the complexity score is
/// the number of distinct character classes present over the four classes.
///
/// # Arguments
/// * `password` - The password to evaluate, taken verbatim
///
/// # Errors
/// Returns [`EvaluationError::EmptyPassword`] for an empty password.
pub fn evaluate_password_strength(
    password: &SecretString,
) -> Result<PasswordEvaluation, EvaluationError> {
    if password.expose_secret().is_empty() {
        return Err(EvaluationError::EmptyPassword);
    }

    let length_tier = length_section(password);
    let variety = character_variety_section(password);

    #[cfg(feature = "tracing")]
    tracing::debug!(length_tier, variety, "password scored");

    Ok(PasswordEvaluation {
        length_score: f64::from(length_tier) / f64::from(LENGTH_BUCKETS),
        complexity_score: f64::from(variety) / CharClass::ALL.len() as f64,
    })
}

/// Async version that sends the evaluation result via channel.
///
/// Sleeps briefly before evaluating so rapid-fire callers (e.g. a UI
/// re-evaluating on every keystroke) can cancel superseded requests; a token
/// cancelled before the sleep elapses drops the request without sending.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Result<PasswordEvaluation, EvaluationError>>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("evaluation cancelled before scoring");
        return;
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
