//! SMA (Simple Moving Average) indicator

/// Calculate the simple moving average over a trailing window.
///
/// Returns one value per complete window (`prices.len() - period + 1` in
/// total), maintained with a running sum. An empty input, a zero period, or a
/// period longer than the series all yield an empty result.
pub fn sma(prices: &[f64], period: usize) -> Vec<f64> {
    if prices.is_empty() || period == 0 || period > prices.len() {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(prices.len() - period + 1);
    let mut sum: f64 = prices[..period].iter().sum();
    result.push(sum / period as f64);

    for i in period..prices.len() {
        sum += prices[i] - prices[i - period];
        result.push(sum / period as f64);
    }

    result
}
