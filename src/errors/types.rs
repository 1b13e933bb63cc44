use super::fault::ExceptionKind;
use thiserror::Error;
/// Configuration-time failures. These always surface to the caller of the
/// registration call; they are never routed through dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("{parameter} must not be absent: {message}")]
    InvalidArgument { parameter: &'static str, message: String },
    #[error("a handler for {kind} is already registered")]
    DuplicateRegistration { kind: ExceptionKind },
}
impl HandlerError {
    pub fn absent_handler() -> Self {
        Self::InvalidArgument {
            parameter: "handler",
            message: "Handler must not be null".to_string(),
        }
    }
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::DuplicateRegistration { .. })
    }
}
