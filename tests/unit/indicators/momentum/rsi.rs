//! Unit tests for the RSI indicator

use candela::indicators::momentum::{rsi, rsi_default};

#[test]
fn test_rsi_empty_input() {
    assert!(rsi(&[], 14).is_empty());
}

#[test]
fn test_rsi_insufficient_data() {
    // Needs period + 1 prices to form the seed deltas.
    assert!(rsi(&[1.0, 2.0, 3.0], 3).is_empty());
    assert!(rsi(&[1.0, 2.0, 3.0, 4.0], 4).is_empty());
}

#[test]
fn test_rsi_constant_prices() {
    // No losses at all resolves to exactly 100, never NaN.
    let result = rsi(&[10.0, 10.0, 10.0, 10.0, 10.0], 2);
    assert_eq!(result, vec![100.0, 100.0, 100.0]);
}

#[test]
fn test_rsi_all_gains() {
    let prices: Vec<f64> = (1..=20).map(|i| i as f64).collect();
    let result = rsi(&prices, 14);
    assert_eq!(result.len(), 6);
    assert!(result.iter().all(|&v| v == 100.0));
}

#[test]
fn test_rsi_all_losses() {
    let prices: Vec<f64> = (1..=20).map(|i| 21.0 - i as f64).collect();
    let result = rsi(&prices, 14);
    assert_eq!(result.len(), 6);
    assert!(result.iter().all(|&v| v == 0.0));
}

#[test]
fn test_rsi_wilder_smoothing() {
    // Deltas: +1, +1, -1, +2 with period 2.
    // Seed: gain 1.0 / loss 0.0           -> 100
    // -1:   gain 0.5 / loss 0.5, RS = 1   -> 50
    // +2:   gain 1.25 / loss 0.25, RS = 5 -> 100 - 100/6
    let result = rsi(&[1.0, 2.0, 3.0, 2.0, 4.0], 2);
    assert_eq!(result.len(), 3);
    assert!((result[0] - 100.0).abs() < 1e-9);
    assert!((result[1] - 50.0).abs() < 1e-9);
    assert!((result[2] - (100.0 - 100.0 / 6.0)).abs() < 1e-9);
}

#[test]
fn test_rsi_stays_in_range() {
    let prices: Vec<f64> = (0..41)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 5.0)
        .collect();
    let result = rsi_default(&prices);
    assert_eq!(result.len(), prices.len() - 14);
    for value in result {
        assert!((0.0..=100.0).contains(&value), "RSI out of range: {value}");
    }
}
