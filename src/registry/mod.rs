//! Handler registry: one callback per exact exception kind plus an optional
//! catch-all.
//!
//! The registry does no locking of its own. Registration and dispatch both
//! take `&mut self`; share an instance between threads only behind a caller
//! supplied lock such as `Mutex<HandlerRegistry>`.
use crate::errors::{Exception, ExceptionKind, Fault, HandlerError};
use crate::monitoring::DispatchOutcome;
use log::trace;
use std::collections::HashMap;
type KindHandler = Box<dyn FnMut(&Fault) + Send>;
pub type FallbackHandler = Box<dyn FnMut(&Fault) + Send>;
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<ExceptionKind, KindHandler>,
    fallback: Option<FallbackHandler>,
}
impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }
    /// Registers `handler` for exactly `T`. A second registration for the same
    /// kind is rejected and the first handler stays in place.
    pub fn register<T, F>(&mut self, handler: F) -> Result<&mut Self, HandlerError>
    where
        T: Exception,
        F: FnMut(&T) + Send + 'static,
    {
        let kind = ExceptionKind::of::<T>();
        if self.handlers.contains_key(&kind) {
            return Err(HandlerError::DuplicateRegistration { kind });
        }
        let mut handler = handler;
        self.handlers
            .insert(
                kind,
                Box::new(move |fault: &Fault| {
                    if let Some(error) = fault.downcast_ref::<T>() {
                        handler(error);
                    }
                }),
            );
        trace!("registered handler for {}", kind);
        Ok(self)
    }
    pub fn register_optional<T, F>(
        &mut self,
        handler: Option<F>,
    ) -> Result<&mut Self, HandlerError>
    where
        T: Exception,
        F: FnMut(&T) + Send + 'static,
    {
        match handler {
            Some(handler) => self.register::<T, F>(handler),
            None => Err(HandlerError::absent_handler()),
        }
    }
    /// Sets the catch-all, replacing any earlier one.
    pub fn set_fallback<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&Fault) + Send + 'static,
    {
        if self.fallback.is_some() {
            trace!("replacing fallback handler");
        }
        self.fallback = Some(Box::new(handler));
        self
    }
    pub fn set_fallback_optional<F>(
        &mut self,
        handler: Option<F>,
    ) -> Result<&mut Self, HandlerError>
    where
        F: FnMut(&Fault) + Send + 'static,
    {
        let handler = handler.ok_or_else(HandlerError::absent_handler)?;
        Ok(self.set_fallback(handler))
    }
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
    /// Routes `fault` to the handler registered for its exact kind, else to the
    /// fallback, else drops it. Handler panics are not caught here.
    pub fn dispatch(&mut self, fault: &Fault) -> DispatchOutcome {
        let kind = fault.kind();
        if let Some(handler) = self.handlers.get_mut(&kind) {
            handler(fault);
            return DispatchOutcome::Handled(kind);
        }
        match self.fallback.as_mut() {
            Some(fallback) => {
                fallback(fault);
                DispatchOutcome::Fallback(kind)
            }
            None => DispatchOutcome::Discarded(kind),
        }
    }
}
impl std::fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("handlers", &self.handlers.len())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    #[derive(Debug, thiserror::Error)]
    #[error("not found: {0}")]
    struct NotFoundError(&'static str);
    #[derive(Debug, thiserror::Error)]
    #[error("timeout")]
    struct TimeoutError;
    #[derive(Debug, thiserror::Error)]
    #[error("io")]
    struct IOError;
    fn recorder() -> Arc<Mutex<Vec<String>>> {
        Arc::new(Mutex::new(Vec::new()))
    }
    #[test]
    fn test_exact_kind_dispatch() {
        let log = recorder();
        let mut registry = HandlerRegistry::new();
        let l1 = log.clone();
        let l2 = log.clone();
        registry
            .register::<NotFoundError, _>(move |e| {
                l1.lock().unwrap().push(format!("nf:{}", e.0))
            })
            .unwrap()
            .register::<TimeoutError, _>(move |_| l2.lock().unwrap().push("timeout".into()))
            .unwrap();
        let outcome = registry.dispatch(&Fault::new(NotFoundError("key")));
        assert_eq!(outcome, DispatchOutcome::Handled(ExceptionKind::of::<NotFoundError>()));
        assert_eq!(*log.lock().unwrap(), vec!["nf:key".to_string()]);
    }
    #[test]
    fn test_duplicate_registration_keeps_first() {
        let log = recorder();
        let mut registry = HandlerRegistry::new();
        let l1 = log.clone();
        registry
            .register::<TimeoutError, _>(move |_| l1.lock().unwrap().push("first".into()))
            .unwrap();
        let l2 = log.clone();
        let err = registry
            .register::<TimeoutError, _>(move |_| l2.lock().unwrap().push("second".into()))
            .unwrap_err();
        assert_eq!(
            err,
            HandlerError::DuplicateRegistration { kind: ExceptionKind::of::<TimeoutError>() }
        );
        registry.dispatch(&Fault::new(TimeoutError));
        assert_eq!(*log.lock().unwrap(), vec!["first".to_string()]);
    }
    #[test]
    fn test_absent_handler_leaves_registry_unchanged() {
        let log = recorder();
        let mut registry = HandlerRegistry::new();
        let l = log.clone();
        registry.set_fallback(move |f| l.lock().unwrap().push(format!("fallback:{}", f.kind())));
        let err = registry
            .register_optional::<IOError, fn(&IOError)>(None)
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(
            registry.dispatch(&Fault::new(IOError)),
            DispatchOutcome::Fallback(ExceptionKind::of::<IOError>())
        );
        assert!(registry.register::<IOError, _>(|_| {}).is_ok());
        assert_eq!(*log.lock().unwrap(), vec!["fallback:IOError".to_string()]);
    }
    #[test]
    fn test_absent_fallback_rejected() {
        let mut registry = HandlerRegistry::new();
        let err = registry
            .set_fallback_optional::<fn(&Fault)>(None)
            .unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(!registry.has_fallback());
        assert_eq!(
            registry.dispatch(&Fault::new(IOError)),
            DispatchOutcome::Discarded(ExceptionKind::of::<IOError>())
        );
    }
    #[test]
    fn test_fallback_is_replaced() {
        let log = recorder();
        let mut registry = HandlerRegistry::new();
        let l1 = log.clone();
        let l2 = log.clone();
        registry
            .set_fallback(move |_| l1.lock().unwrap().push("old".into()))
            .set_fallback(move |_| l2.lock().unwrap().push("new".into()));
        registry.dispatch(&Fault::new(IOError));
        assert_eq!(*log.lock().unwrap(), vec!["new".to_string()]);
    }
}
