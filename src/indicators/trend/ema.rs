//! EMA (Exponential Moving Average) indicator

use crate::indicators::error::IndicatorError;

/// Calculate the exponential moving average as a series aligned 1:1 with the
/// input.
///
/// The first `period - 1` entries are `None` (warm-up). The seed at index
/// `period - 1` is the plain mean of the first `period` values; every later
/// value applies the smoothing factor `k = 2 / (period + 1)`:
///
/// `ema_i = (value_i - ema_{i-1}) * k + ema_{i-1}`
///
/// A period of 1 degenerates to the identity series (`k = 1`). A period of 0
/// is a contract violation. When the series is shorter than `period` the
/// whole output is `None`.
pub fn ema(values: &[f64], period: usize) -> Result<Vec<Option<f64>>, IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidPeriod { period });
    }
    if values.len() < period {
        return Ok(vec![None; values.len()]);
    }

    let mut result: Vec<Option<f64>> = vec![None; period - 1];

    let seed: f64 = values[..period].iter().sum::<f64>() / period as f64;
    let k = 2.0 / (period as f64 + 1.0);
    let mut current = seed;
    result.push(Some(current));

    for &value in &values[period..] {
        current = (value - current) * k + current;
        result.push(Some(current));
    }

    Ok(result)
}
