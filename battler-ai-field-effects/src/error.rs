use battler_state::StateError;
use thiserror::Error;

/// An error that prevents field effects from being scored at all.
#[derive(Error, Debug)]
pub enum FieldEffectError {
    #[error("invalid battle state: {0}")]
    InvalidState(#[from] StateError),
    #[error("invalid field effect options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}
