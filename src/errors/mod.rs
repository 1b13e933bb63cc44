pub mod fault;
pub mod types;
pub use fault::{Exception, ExceptionKind, Fault, PanicError};
pub use types::HandlerError;
