pub mod cli;
pub mod error;
pub mod latency;
pub mod logging;
