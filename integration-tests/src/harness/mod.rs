pub mod fixtures;
pub mod tracing;

pub use fixtures::LogDir;
pub use self::tracing::{CapturedEvent, capture_events};
