//! Unit tests for the ATR indicator

use candela::indicators::volatility::{atr, atr_default};
use candela::models::Candle;
use chrono::{TimeZone, Utc};

fn candle(high: f64, low: f64, close: f64, index: usize) -> Candle {
    let time = Utc.timestamp_opt(1_700_000_000 + index as i64 * 300, 0).unwrap();
    Candle::new(close, high, low, close, 1_000.0, time)
}

#[test]
fn test_atr_insufficient_data() {
    let candles: Vec<Candle> = (0..3).map(|i| candle(101.0, 99.0, 100.0, i)).collect();
    assert_eq!(atr_default(&candles), vec![None; 3]);
}

#[test]
fn test_atr_zero_period() {
    let candles: Vec<Candle> = (0..5).map(|i| candle(101.0, 99.0, 100.0, i)).collect();
    assert_eq!(atr(&candles, 0), vec![None; 5]);
}

#[test]
fn test_atr_known_values() {
    // True ranges: 4, 4, 4 (the high/low span dominates each bar).
    let candles = vec![
        candle(12.0, 8.0, 10.0, 0),
        candle(13.0, 9.0, 12.0, 1),
        candle(15.0, 11.0, 14.0, 2),
        candle(14.0, 10.0, 11.0, 3),
    ];
    assert_eq!(atr(&candles, 2), vec![None, None, Some(4.0), Some(4.0)]);
}

#[test]
fn test_atr_gap_up_uses_previous_close() {
    // A gap above the prior close widens the true range beyond high - low.
    let candles = vec![
        candle(10.5, 9.5, 10.0, 0),
        candle(16.0, 15.0, 15.5, 1),
        candle(16.5, 15.5, 16.0, 2),
    ];
    // TR1 = max(1.0, |16 - 10|, |15 - 10|) = 6.0; TR2 = 1.0
    let result = atr(&candles, 2);
    assert_eq!(result.len(), 3);
    assert_eq!(result[0], None);
    assert_eq!(result[1], None);
    let seeded = result[2].unwrap();
    assert!((seeded - 3.5).abs() < 1e-9);
}

#[test]
fn test_atr_warmup_and_alignment() {
    let candles: Vec<Candle> = (0..50)
        .map(|i| candle(101.0 + i as f64 * 0.1, 99.0 + i as f64 * 0.1, 100.0 + i as f64 * 0.1, i))
        .collect();
    let result = atr_default(&candles);
    assert_eq!(result.len(), candles.len());
    assert!(result[..14].iter().all(Option::is_none));
    for value in result[14..].iter() {
        let v = value.expect("ATR defined after warm-up");
        assert!(v > 0.0);
    }
}
