//! RSI divergence detection.
//!
//! Divergence reads price and oscillator disagreeing on a fresh extremum:
//! price printing a lower low while RSI holds a higher low (bullish), or a
//! higher high while RSI rolls over (bearish) — often a reversal cue.

/// Detect bullish RSI divergence: the latest close makes a strictly lower low
/// than any close in the `lookback` candles preceding it, while the latest
/// RSI is strictly above the RSI recorded at that prior low.
///
/// The scan anchors on the single most extreme close in the window, not on
/// the most recent local swing; among equal extremes the scan direction
/// (most recent backwards, strict comparison) keeps the latest bar. Returns
/// `false` when either series is shorter than `lookback`, or when the prior
/// low has no corresponding RSI entry.
pub fn detect_bullish_divergence(closes: &[f64], rsi_values: &[f64], lookback: usize) -> bool {
    let Some(extremum) = scan_setup(closes, rsi_values, lookback) else {
        return false;
    };

    let mut low = f64::INFINITY;
    let mut low_index = None;
    for i in (extremum.window_start..closes.len() - 1).rev() {
        if closes[i] < low {
            low = closes[i];
            low_index = Some(i);
        }
    }

    let Some(index) = low_index else { return false };
    if extremum.current_close >= low {
        return false;
    }
    match rsi_values.get(index) {
        Some(&prior_rsi) => extremum.current_rsi > prior_rsi,
        None => false,
    }
}

/// Detect bearish RSI divergence: the mirror of
/// [`detect_bullish_divergence`] — a strictly higher high in price with a
/// strictly lower RSI than at the prior high.
pub fn detect_bearish_divergence(closes: &[f64], rsi_values: &[f64], lookback: usize) -> bool {
    let Some(extremum) = scan_setup(closes, rsi_values, lookback) else {
        return false;
    };

    let mut high = f64::NEG_INFINITY;
    let mut high_index = None;
    for i in (extremum.window_start..closes.len() - 1).rev() {
        if closes[i] > high {
            high = closes[i];
            high_index = Some(i);
        }
    }

    let Some(index) = high_index else { return false };
    if extremum.current_close <= high {
        return false;
    }
    match rsi_values.get(index) {
        Some(&prior_rsi) => extremum.current_rsi < prior_rsi,
        None => false,
    }
}

struct ScanSetup {
    current_close: f64,
    current_rsi: f64,
    window_start: usize,
}

fn scan_setup(closes: &[f64], rsi_values: &[f64], lookback: usize) -> Option<ScanSetup> {
    if closes.len() < lookback || rsi_values.len() < lookback {
        return None;
    }
    Some(ScanSetup {
        current_close: *closes.last()?,
        current_rsi: *rsi_values.last()?,
        window_start: closes.len().saturating_sub(1 + lookback),
    })
}
