use ordered_float::OrderedFloat;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::usize_to_f64,
};

/// Two samples closer than this are counted as the same value by [`mode`].
pub const MODE_TOLERANCE: f64 = 1e-9;

fn require_data(name: &str, data: &[f64]) -> EvalResult<()> {
    if data.is_empty() {
        return Err(RuntimeError::invalid_argument(format!("empty dataset for {name}")));
    }
    Ok(())
}

fn sorted(data: &[f64]) -> Vec<f64> {
    let mut copy = data.to_vec();
    copy.sort_by_key(|&x| OrderedFloat(x));
    copy
}

/// Arithmetic mean.
///
/// # Example
/// ```
/// use multicalc::domain::statistics::mean;
///
/// assert_eq!(mean(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap(), 5.0);
/// assert!(mean(&[]).is_err());
/// ```
pub fn mean(data: &[f64]) -> EvalResult<f64> {
    require_data("mean", data)?;
    Ok(data.iter().sum::<f64>() / usize_to_f64(data.len()))
}

/// Middle value of the sorted data; the average of the two middle values
/// for an even count.
pub fn median(data: &[f64]) -> EvalResult<f64> {
    require_data("median", data)?;
    let sorted = sorted(data);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Ok((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Ok(sorted[mid])
    }
}

/// Most frequent value.
///
/// Runs of neighbouring sorted values that differ by less than
/// [`MODE_TOLERANCE`] count as one value. On a tie the first (smallest)
/// maximal run wins, and with no repeats the smallest value is returned.
pub fn mode(data: &[f64]) -> EvalResult<f64> {
    require_data("mode", data)?;
    let sorted = sorted(data);
    let mut mode = sorted[0];
    let mut best = 1;
    let mut run = 1;
    for pair in sorted.windows(2) {
        if (pair[1] - pair[0]).abs() < MODE_TOLERANCE {
            run += 1;
            if run > best {
                best = run;
                mode = pair[1];
            }
        } else {
            run = 1;
        }
    }
    Ok(mode)
}

/// Population variance (divides by `N`).
pub fn variance(data: &[f64]) -> EvalResult<f64> {
    require_data("var", data)?;
    let mean = mean(data)?;
    let sum: f64 = data.iter().map(|x| (x - mean) * (x - mean)).sum();
    Ok(sum / usize_to_f64(data.len()))
}

/// Population standard deviation.
pub fn stddev(data: &[f64]) -> EvalResult<f64> {
    require_data("stddev", data)?;
    Ok(variance(data)?.sqrt())
}

/// Standard score of `value` against `data`.
///
/// # Returns
/// - `Ok(f64)`: `(value - mean) / stddev`.
/// - `Err(RuntimeError::InvalidArgument)`: If `data` is empty.
/// - `Err(RuntimeError::DivisionByZero)`: If the standard deviation is `0`.
pub fn zscore(value: f64, data: &[f64]) -> EvalResult<f64> {
    require_data("zscore", data)?;
    let mean = mean(data)?;
    let sd = stddev(data)?;
    if sd == 0.0 {
        return Err(RuntimeError::division_by_zero("zscore of a dataset with zero standard deviation"));
    }
    Ok((value - mean) / sd)
}

/// Pearson correlation coefficient of paired samples.
///
/// # Returns
/// - `Ok(f64)`: A value in `[-1, 1]`.
/// - `Err(RuntimeError::InvalidArgument)`: If either sample is empty.
/// - `Err(RuntimeError::DimensionMismatch)`: If the samples differ in length.
/// - `Err(RuntimeError::DivisionByZero)`: If either sample has zero variance.
///
/// # Example
/// ```
/// use multicalc::domain::statistics::correlation;
///
/// let r = correlation(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();
/// assert!((r - 1.0).abs() < 1e-12);
/// ```
pub fn correlation(x: &[f64], y: &[f64]) -> EvalResult<f64> {
    require_data("correlation", x)?;
    require_data("correlation", y)?;
    if x.len() != y.len() {
        return Err(RuntimeError::dimension_mismatch(format!("correlation samples have {} and {} values",
                                                            x.len(),
                                                            y.len())));
    }
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let (mut sum_xy, mut sum_x2, mut sum_y2) = (0.0, 0.0, 0.0);
    for (a, b) in x.iter().zip(y) {
        let dx = a - mean_x;
        let dy = b - mean_y;
        sum_xy += dx * dy;
        sum_x2 += dx * dx;
        sum_y2 += dy * dy;
    }

    let denominator = (sum_x2 * sum_y2).sqrt();
    if denominator == 0.0 {
        return Err(RuntimeError::division_by_zero("correlation of a sample with zero variance"));
    }
    Ok(sum_xy / denominator)
}
