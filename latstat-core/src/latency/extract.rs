use crate::error::LatencyError;
use crate::latency::EventLabel;
use std::fs;
use std::path::Path;

/// Measurements found for one label, in order of appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleSet {
    pub label: EventLabel,
    pub values: Vec<u64>,
}

/// Sample sets for every known label, in [`EventLabel::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatencySamples {
    sets: Vec<SampleSet>,
}

impl LatencySamples {
    /// One empty sample set per label.
    pub fn empty() -> Self {
        Self {
            sets: EventLabel::ALL
                .iter()
                .map(|label| SampleSet {
                    label: *label,
                    values: Vec::new(),
                })
                .collect(),
        }
    }

    pub fn get(&self, label: EventLabel) -> &[u64] {
        &self.sets[label as usize].values
    }

    pub fn iter(&self) -> impl Iterator<Item = &SampleSet> {
        self.sets.iter()
    }

    pub fn total(&self) -> usize {
        self.sets.iter().map(|s| s.values.len()).sum()
    }

    fn set_mut(&mut self, label: EventLabel) -> &mut Vec<u64> {
        &mut self.sets[label as usize].values
    }
}

/// Collects every `<label>: <digits> us` occurrence in `contents`.
///
/// Each label is scanned independently, left to right, without overlap.
///
/// # Errors
///
/// Returns `LatencyError::InvalidMeasurement` if a digit run does not fit
/// in a `u64`.
pub fn extract_latencies(contents: &str) -> Result<LatencySamples, LatencyError> {
    let mut samples = LatencySamples::empty();

    for label in EventLabel::ALL {
        let values = samples.set_mut(label);

        for caps in label.pattern().captures_iter(contents) {
            let digits = &caps[1];
            let value = digits
                .parse::<u64>()
                .map_err(|e| LatencyError::InvalidMeasurement {
                    label,
                    value: digits.to_string(),
                    source: e,
                })?;
            values.push(value);
        }

        tracing::debug!(label = %label, samples = values.len(), "extracted samples");
    }

    Ok(samples)
}

/// Reads the whole file at `path` and extracts its measurements.
pub fn read_latencies(path: &Path) -> Result<LatencySamples, LatencyError> {
    let contents = fs::read_to_string(path).map_err(|e| LatencyError::read_file(path, e))?;
    extract_latencies(&contents)
}
