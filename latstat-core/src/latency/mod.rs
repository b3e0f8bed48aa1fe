//! Latency Report Pipeline
//!
//! Turns a directory of plain-text logs into per-event latency statistics.
//!
//! Log lines of interest look like `FFT time: 120 us`. Each of the six known
//! event labels is matched independently, anywhere in the file, and every
//! match contributes one measurement in microseconds.
//!
//! The overall data processing architecture is:
//!
//! discover_logs
//! select_file (ChoiceProvider)
//! read_latencies
//! LatencySamples
//! Report
//! render_plain / render_pretty / render_json
//!

mod discover;
mod extract;
mod labels;
mod report;
mod select;
mod stats;
#[cfg(test)]
mod tests;

pub use discover::*;
pub use extract::*;
pub use labels::*;
pub use report::*;
pub use select::*;
pub use stats::*;
