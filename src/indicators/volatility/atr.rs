//! ATR (Average True Range) indicator

use crate::models::Candle;

/// Standard ATR period.
pub const DEFAULT_ATR_PERIOD: usize = 14;

/// Calculate ATR as a series aligned 1:1 with the input candles.
///
/// True range is `max(high - low, |high - prev_close|, |low - prev_close|)`.
/// The seed at index `period` is the plain mean of the first `period` true
/// ranges; later values use Wilder smoothing, mirroring the RSI warm-up.
/// Inputs shorter than `period + 1` candles produce a fully-`None` series.
pub fn atr(candles: &[Candle], period: usize) -> Vec<Option<f64>> {
    let n = candles.len();
    if period == 0 || n < period + 1 {
        return vec![None; n];
    }

    let true_ranges: Vec<f64> = candles
        .windows(2)
        .map(|pair| true_range(&pair[1], pair[0].close))
        .collect();

    let mut result: Vec<Option<f64>> = vec![None; period];
    let mut current = true_ranges[..period].iter().sum::<f64>() / period as f64;
    result.push(Some(current));

    for &tr in &true_ranges[period..] {
        current = (current * (period as f64 - 1.0) + tr) / period as f64;
        result.push(Some(current));
    }

    result
}

/// Calculate ATR with the default period (14).
pub fn atr_default(candles: &[Candle]) -> Vec<Option<f64>> {
    atr(candles, DEFAULT_ATR_PERIOD)
}

fn true_range(candle: &Candle, prev_close: f64) -> f64 {
    let high_low = candle.high - candle.low;
    let high_close = (candle.high - prev_close).abs();
    let low_close = (candle.low - prev_close).abs();
    high_low.max(high_close).max(low_close)
}
