//! Unit tests for the EMA indicator

use candela::indicators::trend::ema;
use candela::indicators::IndicatorError;

#[test]
fn test_ema_zero_period_is_contract_violation() {
    assert_eq!(
        ema(&[1.0, 2.0, 3.0], 0),
        Err(IndicatorError::InvalidPeriod { period: 0 })
    );
}

#[test]
fn test_ema_period_one_is_identity() {
    let prices = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let expected: Vec<Option<f64>> = prices.iter().map(|&p| Some(p)).collect();
    assert_eq!(ema(&prices, 1).unwrap(), expected);
}

#[test]
fn test_ema_insufficient_data_pads_with_none() {
    assert_eq!(ema(&[1.0, 2.0, 3.0], 5).unwrap(), vec![None, None, None]);
}

#[test]
fn test_ema_empty_input() {
    assert!(ema(&[], 5).unwrap().is_empty());
}

#[test]
fn test_ema_known_values() {
    // Seed at index 2 is the mean of the first three values; afterwards
    // k = 2 / (3 + 1) = 0.5.
    let result = ema(&[10.0, 11.0, 12.0, 13.0, 14.0], 3).unwrap();
    assert_eq!(result[0], None);
    assert_eq!(result[1], None);
    assert_eq!(result[2], Some(11.0));
    assert_eq!(result[3], Some(12.0));
    assert_eq!(result[4], Some(13.0));
}

#[test]
fn test_ema_seed_is_mean_of_first_window() {
    let prices = [22.27, 22.19, 22.08, 22.17, 22.18];
    let result = ema(&prices, 5).unwrap();
    let seed = result[4].expect("seed should be present at index period - 1");
    assert!((seed - 22.178).abs() < 1e-9);
}

#[test]
fn test_ema_output_is_aligned_with_input() {
    let prices: Vec<f64> = (0..30).map(|i| 50.0 + (i % 7) as f64).collect();
    let result = ema(&prices, 9).unwrap();
    assert_eq!(result.len(), prices.len());
    assert!(result[..8].iter().all(Option::is_none));
    assert!(result[8..].iter().all(Option::is_some));
}
