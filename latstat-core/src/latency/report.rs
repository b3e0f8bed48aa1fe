use crate::latency::{EventLabel, LatencySamples, Summary, summarize};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    pub label: EventLabel,
    /// `None` when the file held no measurement for this label.
    pub summary: Option<Summary>,
}

/// Per-label statistics for one log file, in [`EventLabel::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub entries: Vec<ReportEntry>,
}

#[derive(Serialize)]
struct ReportEntryJson {
    label: EventLabel,
    count: usize,
    mean_us: Option<f64>,
    std_dev_us: Option<f64>,
}

impl Report {
    pub fn from_samples(samples: &LatencySamples) -> Self {
        Self {
            entries: samples
                .iter()
                .map(|set| ReportEntry {
                    label: set.label,
                    summary: summarize(&set.values),
                })
                .collect(),
        }
    }

    pub fn get(&self, label: EventLabel) -> Option<&ReportEntry> {
        self.entries.iter().find(|e| e.label == label)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::from("\nStatistics:\n");

        for entry in &self.entries {
            out.push_str(&format!("{}:\n", entry.label));
            match &entry.summary {
                Some(s) => {
                    out.push_str(&format!("  Number of samples: {}\n", s.count));
                    out.push_str(&format!("  Average: {:.2} us\n", s.mean));
                    out.push_str(&format!("  Standard deviation: {:.2} us\n", s.std_dev));
                }
                None => out.push_str("  No data available\n"),
            }
        }

        out
    }

    pub fn render_pretty(&self) -> String {
        let mut out = format!("\n{}\n", "Statistics:".bold());

        for entry in &self.entries {
            out.push_str(&format!("{}\n", format!("{}:", entry.label).bold()));
            match &entry.summary {
                Some(s) => {
                    let mean = format!("{:.2}", s.mean);
                    let std_dev = format!("{:.2}", s.std_dev);
                    out.push_str(&format!("  Number of samples: {}\n", s.count.cyan()));
                    out.push_str(&format!("  Average: {} us\n", mean.green()));
                    out.push_str(&format!("  Standard deviation: {} us\n", std_dev.green()));
                }
                None => {
                    out.push_str(&format!("  {}\n", "No data available".yellow()));
                }
            }
        }

        out
    }

    pub fn render_json(&self) -> anyhow::Result<String> {
        let entries: Vec<ReportEntryJson> = self
            .entries
            .iter()
            .map(|e| ReportEntryJson {
                label: e.label,
                count: e.summary.map(|s| s.count).unwrap_or(0),
                mean_us: e.summary.map(|s| s.mean),
                std_dev_us: e.summary.map(|s| s.std_dev),
            })
            .collect();

        Ok(serde_json::to_string_pretty(&entries)?)
    }
}
