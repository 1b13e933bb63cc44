//! Declarative exception routing.
//!
//! Register one handler per exact error type, optionally a catch-all, then run
//! operations under a boundary that routes their failures instead of letting
//! them propagate:
//!
//! ```
//! use faultroute::ExceptionHandler;
//! use std::sync::{Arc, Mutex};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("timed out")]
//! struct TimeoutError;
//! #[derive(Debug, thiserror::Error)]
//! #[error("io failure")]
//! struct IOError;
//!
//! let log = Arc::new(Mutex::new(Vec::new()));
//! let sink = log.clone();
//! let mut handler = ExceptionHandler::new();
//! handler
//!     .handle::<TimeoutError, _>(|_| {})
//!     .unwrap()
//!     .unhandled(move |fault| sink.lock().unwrap().push(format!("fallback:{}", fault.kind())));
//! handler.run_action(|| Err(IOError.into()));
//! assert_eq!(*log.lock().unwrap(), vec!["fallback:IOError".to_string()]);
//! ```
//!
//! Lookup is by exact kind: a handler for a wrapper error never sees the error
//! it wraps. With no matching handler and no fallback the failure is dropped.
//! Nothing here locks; wrap an [`ExceptionHandler`] in a `Mutex` to share it.
pub mod config;
pub mod errors;
pub mod executor;
pub mod monitoring;
pub mod registry;
pub use config::HandlerConfig;
pub use errors::{Exception, ExceptionKind, Fault, HandlerError, PanicError};
pub use executor::ExceptionHandler;
pub use monitoring::{DispatchOutcome, DispatchStats};
pub use registry::{FallbackHandler, HandlerRegistry};
