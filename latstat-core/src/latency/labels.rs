use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// A category of timed operation reported by the receiver node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventLabel {
    #[serde(rename = "Freq shift time")]
    FreqShift,
    #[serde(rename = "Freq return time")]
    FreqReturn,
    #[serde(rename = "Srate change time")]
    SrateChange,
    #[serde(rename = "Samples recv time")]
    SamplesRecv,
    #[serde(rename = "Https req time")]
    HttpsReq,
    #[serde(rename = "FFT time")]
    Fft,
}

impl EventLabel {
    /// All labels, in report order.
    pub const ALL: [EventLabel; 6] = [
        EventLabel::FreqShift,
        EventLabel::FreqReturn,
        EventLabel::SrateChange,
        EventLabel::SamplesRecv,
        EventLabel::HttpsReq,
        EventLabel::Fft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventLabel::FreqShift => "Freq shift time",
            EventLabel::FreqReturn => "Freq return time",
            EventLabel::SrateChange => "Srate change time",
            EventLabel::SamplesRecv => "Samples recv time",
            EventLabel::HttpsReq => "Https req time",
            EventLabel::Fft => "FFT time",
        }
    }

    /// The compiled `<label>: <digits> us` matcher for this label.
    pub fn pattern(&self) -> &'static Regex {
        &LABEL_PATTERNS[*self as usize]
    }
}

impl fmt::Display for EventLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Indexed by discriminant, so the order must follow `EventLabel::ALL`.
static LABEL_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    EventLabel::ALL
        .iter()
        .map(|label| measurement_pattern(label.as_str()))
        .collect()
});

fn measurement_pattern(label: &str) -> Regex {
    let source = format!(r"{}: ([0-9]+) us", regex::escape(label));
    Regex::new(&source).expect("label pattern is a valid regex")
}
