//! RSI (Relative Strength Index) indicator
//!
//! RSI = 100 - (100 / (1 + RS)), RS = average gain / average loss

/// Standard RSI period.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Calculate RSI over per-step closing deltas.
///
/// The average gain/loss pair is seeded with the plain mean of the first
/// `period` deltas and updated with Wilder smoothing
/// (`avg = (avg * (period - 1) + new) / period`) afterwards. A zero average
/// loss resolves to exactly 100. Output length is `prices.len() - period`;
/// shorter inputs yield an empty result.
pub fn rsi(prices: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || prices.len() < period + 1 {
        return Vec::new();
    }

    let deltas: Vec<f64> = prices.windows(2).map(|pair| pair[1] - pair[0]).collect();

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for &delta in &deltas[..period] {
        if delta >= 0.0 {
            avg_gain += delta;
        } else {
            avg_loss += delta.abs();
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    let mut result = Vec::with_capacity(deltas.len() - period + 1);
    result.push(rsi_value(avg_gain, avg_loss));

    for &delta in &deltas[period..] {
        let (gain, loss) = if delta > 0.0 {
            (delta, 0.0)
        } else {
            (0.0, delta.abs())
        };
        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;
        result.push(rsi_value(avg_gain, avg_loss));
    }

    result
}

/// Calculate RSI with the default period (14).
pub fn rsi_default(prices: &[f64]) -> Vec<f64> {
    rsi(prices, DEFAULT_RSI_PERIOD)
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
