pub mod stats;
pub use stats::{DispatchOutcome, DispatchStats};
