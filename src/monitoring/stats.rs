use crate::errors::ExceptionKind;
use serde::Serialize;
/// What the guarded boundary did with a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Handled(ExceptionKind),
    Fallback(ExceptionKind),
    /// No handler and no fallback: the error was dropped.
    Discarded(ExceptionKind),
}
impl DispatchOutcome {
    pub fn kind(&self) -> ExceptionKind {
        match self {
            Self::Handled(kind) | Self::Fallback(kind) | Self::Discarded(kind) => *kind,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Handled(_) => "handled",
            Self::Fallback(_) => "fallback",
            Self::Discarded(_) => "discarded",
        }
    }
}
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DispatchStats {
    pub succeeded: u64,
    pub handled: u64,
    pub fallback: u64,
    pub discarded: u64,
    pub panics: u64,
}
impl DispatchStats {
    pub fn record_success(&mut self) {
        self.succeeded += 1;
    }
    pub fn record_panic(&mut self) {
        self.panics += 1;
    }
    pub fn record(&mut self, outcome: &DispatchOutcome) {
        match outcome {
            DispatchOutcome::Handled(_) => self.handled += 1,
            DispatchOutcome::Fallback(_) => self.fallback += 1,
            DispatchOutcome::Discarded(_) => self.discarded += 1,
        }
    }
    /// Adds another handler's counters into these.
    pub fn merge(&mut self, other: &DispatchStats) {
        self.succeeded += other.succeeded;
        self.handled += other.handled;
        self.fallback += other.fallback;
        self.discarded += other.discarded;
        self.panics += other.panics;
    }
    pub fn failures(&self) -> u64 {
        self.handled + self.fallback + self.discarded
    }
    pub fn total_runs(&self) -> u64 {
        self.succeeded + self.failures()
    }
}
#[cfg(test)]
mod tests {
    use super::*;
    #[derive(Debug, thiserror::Error)]
    #[error("io")]
    struct IOError;
    #[test]
    fn test_stats_counting() {
        let kind = ExceptionKind::of::<IOError>();
        let mut stats = DispatchStats::default();
        stats.record_success();
        stats.record(&DispatchOutcome::Handled(kind));
        stats.record(&DispatchOutcome::Fallback(kind));
        stats.record(&DispatchOutcome::Discarded(kind));
        stats.record(&DispatchOutcome::Discarded(kind));
        assert_eq!(stats.failures(), 4);
        assert_eq!(stats.total_runs(), 5);
        assert_eq!(stats.discarded, 2);
        assert_eq!(DispatchOutcome::Fallback(kind).label(), "fallback");
        assert_eq!(DispatchOutcome::Discarded(kind).kind().name(), "IOError");
    }
    #[test]
    fn test_merge_sums_counters() {
        let kind = ExceptionKind::of::<IOError>();
        let mut first = DispatchStats::default();
        first.record(&DispatchOutcome::Handled(kind));
        first.record_success();
        let mut second = DispatchStats::default();
        second.record(&DispatchOutcome::Discarded(kind));
        second.record_panic();
        first.merge(&second);
        assert_eq!(first.handled, 1);
        assert_eq!(first.discarded, 1);
        assert_eq!(first.panics, 1);
        assert_eq!(first.total_runs(), 3);
    }
}
