//! MACD (Moving Average Convergence Divergence) indicator
//!
//! MACD = EMA(fast) - EMA(slow)
//! Signal = EMA(signal period) of the MACD line
//! Histogram = MACD - Signal

use crate::indicators::error::IndicatorError;
use crate::indicators::trend::ema;

/// Standard MACD periods (fast, slow, signal).
pub const DEFAULT_MACD_PERIODS: (usize, usize, usize) = (12, 26, 9);

/// The three MACD series, each aligned 1:1 with the input prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Macd {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Calculate the MACD line, signal line, and histogram.
///
/// The MACD line is populated from index `slow - 1`; the signal line is the
/// EMA of the MACD line's values, so its first entry lands `signal - 1`
/// indices later; the histogram exists wherever both operands do. All values
/// are rounded to 6 decimal places to bound floating-point drift. Inputs
/// shorter than `slow + signal` produce fully-`None` series.
pub fn macd(
    prices: &[f64],
    fast: usize,
    slow: usize,
    signal: usize,
) -> Result<Macd, IndicatorError> {
    if slow <= fast {
        return Err(IndicatorError::InvalidMacdPeriods { fast, slow });
    }

    let n = prices.len();
    let mut result = Macd {
        macd: vec![None; n],
        signal: vec![None; n],
        histogram: vec![None; n],
    };
    if n < slow + signal {
        return Ok(result);
    }

    let fast_ema = ema(prices, fast)?;
    let slow_ema = ema(prices, slow)?;

    let macd_start = slow - 1;
    for i in macd_start..n {
        if let (Some(f), Some(s)) = (fast_ema[i], slow_ema[i]) {
            result.macd[i] = Some(round6(f - s));
        }
    }

    // The signal line is an EMA over the compact MACD values; its own warm-up
    // padding re-aligns it against the MACD line's start.
    let macd_values: Vec<f64> = result.macd[macd_start..].iter().flatten().copied().collect();
    let signal_ema = ema(&macd_values, signal)?;
    for (offset, value) in signal_ema.iter().enumerate() {
        if let Some(v) = value {
            result.signal[macd_start + offset] = Some(round6(*v));
        }
    }

    for i in 0..n {
        if let (Some(m), Some(s)) = (result.macd[i], result.signal[i]) {
            result.histogram[i] = Some(round6(m - s));
        }
    }

    Ok(result)
}

/// Calculate MACD with the default periods (12, 26, 9).
pub fn macd_default(prices: &[f64]) -> Result<Macd, IndicatorError> {
    let (fast, slow, signal) = DEFAULT_MACD_PERIODS;
    macd(prices, fast, slow, signal)
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
