//! Unit tests for the VWAP indicator

use candela::indicators::volume::vwap;
use candela::models::Candle;
use chrono::{TimeZone, Utc};

fn candle(close: f64, volume: f64, index: usize) -> Candle {
    let time = Utc.timestamp_opt(1_700_000_000 + index as i64 * 300, 0).unwrap();
    Candle::new(close, close + 0.5, close - 0.5, close, volume, time)
}

#[test]
fn test_vwap_empty_input() {
    assert!(vwap(&[]).is_empty());
}

#[test]
fn test_vwap_equal_volumes_is_running_mean() {
    let candles = vec![candle(10.0, 1.0, 0), candle(20.0, 1.0, 1), candle(30.0, 1.0, 2)];
    assert_eq!(vwap(&candles), vec![10.0, 15.0, 20.0]);
}

#[test]
fn test_vwap_weights_by_volume() {
    let candles = vec![candle(10.0, 3.0, 0), candle(20.0, 1.0, 1)];
    assert_eq!(vwap(&candles), vec![10.0, 12.5]);
}

#[test]
fn test_vwap_zero_volume_falls_back_to_close() {
    let time = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let candles = vec![
        Candle::without_volume(42.0, 42.5, 41.5, 42.0, time),
        candle(50.0, 10.0, 1),
    ];
    let result = vwap(&candles);
    // No traded volume yet: defined fallback instead of a division by zero.
    assert_eq!(result[0], 42.0);
    // Once volume arrives, only weighted candles contribute.
    assert_eq!(result[1], 50.0);
}

#[test]
fn test_vwap_output_is_aligned_with_input() {
    let candles: Vec<Candle> = (0..25)
        .map(|i| candle(100.0 + i as f64, 1_000.0 + i as f64, i))
        .collect();
    assert_eq!(vwap(&candles).len(), candles.len());
}
