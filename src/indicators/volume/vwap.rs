//! VWAP (Volume-Weighted Average Price) indicator

use crate::models::Candle;

/// Calculate the cumulative volume-weighted average price, one value per
/// candle.
///
/// Each entry is the running sum of `close * volume` divided by the running
/// sum of `volume` up to and including that candle. The close price is used
/// as the weighting basis throughout (not the typical price). Candles with
/// absent volume contribute zero weight; while the cumulative volume is still
/// zero the output falls back to the candle's close.
pub fn vwap(candles: &[Candle]) -> Vec<f64> {
    let mut result = Vec::with_capacity(candles.len());
    let mut cumulative_pv = 0.0;
    let mut cumulative_volume = 0.0;

    for candle in candles {
        let volume = candle.volume.unwrap_or(0.0);
        cumulative_pv += candle.close * volume;
        cumulative_volume += volume;

        if cumulative_volume > 0.0 {
            result.push(cumulative_pv / cumulative_volume);
        } else {
            result.push(candle.close);
        }
    }

    result
}
