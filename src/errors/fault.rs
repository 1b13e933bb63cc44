use std::any::{type_name, Any, TypeId};
use std::error::Error as StdError;
use std::fmt;
use std::hash::{Hash, Hasher};
/// Anything a guarded operation can raise.
///
/// Implemented for every `Error + Send + Sync + 'static` type, so user error
/// types need no extra code to take part in dispatch.
pub trait Exception: StdError + Send + Sync + 'static {
    fn kind(&self) -> ExceptionKind;
    fn as_any(&self) -> &dyn Any;
    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static);
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync>;
}
impl<E> Exception for E
where
    E: StdError + Send + Sync + 'static,
{
    fn kind(&self) -> ExceptionKind {
        ExceptionKind::of::<E>()
    }
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self
    }
    fn into_any(self: Box<Self>) -> Box<dyn Any + Send + Sync> {
        self
    }
}
/// Exact lookup tag for a concrete error type.
///
/// Two kinds are equal only when they name the same type; there is no
/// relationship between a wrapper error and the error it wraps.
#[derive(Clone, Copy)]
pub struct ExceptionKind {
    id: TypeId,
    type_name: &'static str,
}
impl ExceptionKind {
    pub fn of<E: 'static>() -> Self {
        Self {
            id: TypeId::of::<E>(),
            type_name: type_name::<E>(),
        }
    }
    /// Short name: last path segment with generic arguments stripped.
    pub fn name(&self) -> &'static str {
        short_type_name(self.type_name)
    }
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }
}
impl PartialEq for ExceptionKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
impl Eq for ExceptionKind {}
impl Hash for ExceptionKind {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
impl fmt::Debug for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExceptionKind({})", self.type_name)
    }
}
impl fmt::Display for ExceptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
fn short_type_name(full: &'static str) -> &'static str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
/// Owned, type-erased exception carried in the `Err` of a guarded operation.
///
/// `Fault` intentionally does not implement `std::error::Error`; that keeps
/// the blanket `From<E: Exception>` conversion coherent so `?` works on any
/// error type inside a guarded closure.
pub struct Fault {
    inner: Box<dyn Exception>,
}
impl Fault {
    pub fn new<E: Exception>(error: E) -> Self {
        Self { inner: Box::new(error) }
    }
    pub fn kind(&self) -> ExceptionKind {
        self.inner.as_ref().kind()
    }
    pub fn is<E: Exception>(&self) -> bool {
        self.kind() == ExceptionKind::of::<E>()
    }
    pub fn downcast_ref<E: Exception>(&self) -> Option<&E> {
        self.inner.as_ref().as_any().downcast_ref::<E>()
    }
    pub fn downcast<E: Exception>(self) -> Result<E, Self> {
        if !self.is::<E>() {
            return Err(self);
        }
        match self.inner.into_any().downcast::<E>() {
            Ok(error) => Ok(*error),
            Err(_) => unreachable!("kind matched but downcast failed"),
        }
    }
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.inner.as_ref().as_error()
    }
}
impl<E: Exception> From<E> for Fault {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.as_error(), f)
    }
}
impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_error(), f)
    }
}
/// Raised in place of a panic caught at the guarded boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("guarded operation panicked: {message}")]
pub struct PanicError {
    pub message: String,
}
impl PanicError {
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Box<dyn Any>".to_string()
        };
        Self { message }
    }
}
