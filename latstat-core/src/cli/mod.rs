mod list;
mod report;
#[cfg(test)]
mod tests;

pub use list::*;
pub use report::*;

/// Printed instead of a menu when the scanned directory holds no logs.
pub const NO_LOGS_MESSAGE: &str = "No .txt files found in the specified folder.";
