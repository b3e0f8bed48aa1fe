use crate::latency::summarize;
use pretty_assertions::assert_eq;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn empty_set_has_no_summary() {
    assert_eq!(summarize(&[]), None);
}

#[test]
fn single_sample_has_zero_deviation() {
    // Act
    let s = summarize(&[999999]).unwrap();

    // Assert
    assert_eq!(s.count, 1);
    assert_close(s.mean, 999999.0);
    assert_close(s.std_dev, 0.0);
}

#[test]
fn deviation_uses_population_form() {
    // Arrange: sample form would give sqrt(200) ~= 14.14
    let values = [120, 140];

    // Act
    let s = summarize(&values).unwrap();

    // Assert
    assert_eq!(s.count, 2);
    assert_close(s.mean, 130.0);
    assert_close(s.std_dev, 10.0);
}

#[test]
fn known_distribution() {
    // Act
    let s = summarize(&[2, 4, 4, 4, 5, 5, 7, 9]).unwrap();

    // Assert
    assert_eq!(s.count, 8);
    assert_close(s.mean, 5.0);
    assert_close(s.std_dev, 2.0);
}

#[test]
fn large_values_do_not_overflow_the_sum() {
    // Act
    let s = summarize(&[u64::MAX, u64::MAX]).unwrap();

    // Assert
    assert_close(s.mean, u64::MAX as f64);
    assert_close(s.std_dev, 0.0);
}
