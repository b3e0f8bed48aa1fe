/// Descriptive statistics for one non-empty sample set, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
}

/// Computes count, mean and population standard deviation.
///
/// Returns `None` for an empty slice; no arithmetic is done in that case.
/// The deviation divides by `n`, not `n - 1`.
pub fn summarize(values: &[u64]) -> Option<Summary> {
    if values.is_empty() {
        return None;
    }

    let count = values.len();
    let n = count as f64;

    let sum: u128 = values.iter().map(|v| u128::from(*v)).sum();
    let mean = sum as f64 / n;

    let squared_deviations: f64 = values
        .iter()
        .map(|v| {
            let d = *v as f64 - mean;
            d * d
        })
        .sum();
    let std_dev = (squared_deviations / n).sqrt();

    Some(Summary {
        count,
        mean,
        std_dev,
    })
}
