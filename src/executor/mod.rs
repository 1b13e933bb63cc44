//! Guarded execution.
//!
//! [`ExceptionHandler`] owns a [`HandlerRegistry`] and runs operations inside a
//! boundary that never lets their failure escape:
//!
//! ```
//! use faultroute::{ExceptionHandler, Fault};
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("no such key")]
//! struct NotFoundError;
//!
//! let mut handler = ExceptionHandler::handling::<NotFoundError, _>(|_| {}).unwrap();
//! let value = handler.run_function(|| -> Result<u32, Fault> { Err(NotFoundError.into()) }, 7);
//! assert_eq!(value, 7);
//! ```
//!
//! A failure whose kind has no handler while no fallback is set is dropped;
//! only the configured discard log line records it.
use crate::config::HandlerConfig;
use crate::errors::{Exception, Fault, HandlerError, PanicError};
use crate::monitoring::{DispatchOutcome, DispatchStats};
use crate::registry::HandlerRegistry;
use log::{debug, warn};
use std::panic::{self, AssertUnwindSafe};
#[derive(Debug, Default)]
pub struct ExceptionHandler {
    registry: HandlerRegistry,
    config: HandlerConfig,
    stats: DispatchStats,
}
impl ExceptionHandler {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_config(config: HandlerConfig) -> Self {
        Self {
            registry: HandlerRegistry::new(),
            config,
            stats: DispatchStats::default(),
        }
    }
    /// Entry point: a default-configured handler with `T` already registered.
    pub fn handling<T, F>(handler: F) -> Result<Self, HandlerError>
    where
        T: Exception,
        F: FnMut(&T) + Send + 'static,
    {
        let mut this = Self::new();
        this.handle::<T, F>(handler)?;
        Ok(this)
    }
    pub fn handle<T, F>(&mut self, handler: F) -> Result<&mut Self, HandlerError>
    where
        T: Exception,
        F: FnMut(&T) + Send + 'static,
    {
        self.registry.register::<T, F>(handler)?;
        Ok(self)
    }
    pub fn handle_optional<T, F>(
        &mut self,
        handler: Option<F>,
    ) -> Result<&mut Self, HandlerError>
    where
        T: Exception,
        F: FnMut(&T) + Send + 'static,
    {
        self.registry.register_optional::<T, F>(handler)?;
        Ok(self)
    }
    pub fn unhandled<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&Fault) + Send + 'static,
    {
        self.registry.set_fallback(handler);
        self
    }
    pub fn unhandled_optional<F>(
        &mut self,
        handler: Option<F>,
    ) -> Result<&mut Self, HandlerError>
    where
        F: FnMut(&Fault) + Send + 'static,
    {
        self.registry.set_fallback_optional(handler)?;
        Ok(self)
    }
    /// Runs `action`; any failure is dispatched and then swallowed.
    pub fn run_action<F>(&mut self, action: F)
    where
        F: FnOnce() -> Result<(), Fault>,
    {
        self.run_function(action, ());
    }
    /// Runs `func`, returning its value, or `default` once a failure has been
    /// dispatched.
    pub fn run_function<T, F>(&mut self, func: F, default: T) -> T
    where
        F: FnOnce() -> Result<T, Fault>,
    {
        match self.guard(func) {
            Ok(value) => {
                self.stats.record_success();
                value
            }
            Err(fault) => {
                let outcome = self.dispatch(&fault);
                self.stats.record(&outcome);
                default
            }
        }
    }
    /// Dispatches `fault` through the registry. Panics raised by a handler or
    /// the fallback propagate to the caller. Direct calls are not counted in
    /// [`stats`](Self::stats); only guarded runs are.
    pub fn dispatch(&mut self, fault: &Fault) -> DispatchOutcome {
        let outcome = self.registry.dispatch(fault);
        match outcome {
            DispatchOutcome::Handled(kind) | DispatchOutcome::Fallback(kind) => {
                if let Some(level) = self.config.dispatch_level().to_level() {
                    log::log!(level, "{} {} failure: {}", outcome.label(), kind, fault);
                }
            }
            DispatchOutcome::Discarded(kind) => {
                if let Some(level) = self.config.discard_level().to_level() {
                    log::log!(level, "discarded unhandled {} failure: {}", kind, fault);
                }
            }
        }
        outcome
    }
    fn guard<T, F>(&mut self, func: F) -> Result<T, Fault>
    where
        F: FnOnce() -> Result<T, Fault>,
    {
        let result = if self.config.catch_panics {
            match panic::catch_unwind(AssertUnwindSafe(func)) {
                Ok(result) => result,
                Err(payload) => {
                    let error = PanicError::from_payload(payload);
                    warn!("guarded operation panicked: {}", error.message);
                    self.stats.record_panic();
                    Err(Fault::new(error))
                }
            }
        } else {
            func()
        };
        if let Err(fault) = &result {
            debug!("guarded operation failed with {}", fault.kind());
        }
        result
    }
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }
    pub fn stats(&self) -> &DispatchStats {
        &self.stats
    }
    pub fn reset_stats(&mut self) {
        self.stats = DispatchStats::default();
    }
}
