use crate::validate::ValidationErrors;
use thiserror::Error;

pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Failure reported by a host collaborator call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    #[error("host call {call} failed: {message}")]
    CallFailed { call: &'static str, message: String },
    #[error("host bridge is unavailable")]
    Unavailable,
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("typography config is invalid: {0}")]
    Invalid(ValidationErrors),
    #[error("host rejected typography system: {message}")]
    Rejected { message: String },
    #[error(transparent)]
    Bridge(#[from] BridgeError),
}
