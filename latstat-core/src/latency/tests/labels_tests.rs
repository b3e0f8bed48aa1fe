use crate::latency::EventLabel;
use pretty_assertions::assert_eq;

#[test]
fn labels_are_in_report_order() {
    // Act
    let names: Vec<&str> = EventLabel::ALL.iter().map(EventLabel::as_str).collect();

    // Assert
    assert_eq!(
        names,
        vec![
            "Freq shift time",
            "Freq return time",
            "Srate change time",
            "Samples recv time",
            "Https req time",
            "FFT time",
        ]
    );
}

#[test]
fn pattern_captures_digit_run() {
    // Arrange
    let line = "[node] FFT time: 4521 us (batch 7)";

    // Act
    let caps = EventLabel::Fft.pattern().captures(line).unwrap();

    // Assert
    assert_eq!(&caps[1], "4521");
}

#[test]
fn pattern_requires_exact_shape() {
    let re = EventLabel::HttpsReq.pattern();

    assert!(!re.is_match("Https req time: 12 ms"));
    assert!(!re.is_match("Https req time:12 us"));
    assert!(!re.is_match("Https req time: us"));
    assert!(!re.is_match("https req time: 12 us"));
    assert!(re.is_match("Https req time: 12 us"));
}

#[test]
fn display_matches_label_text() {
    assert_eq!(EventLabel::SrateChange.to_string(), "Srate change time");
}
