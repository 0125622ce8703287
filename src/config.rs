//! Runtime configuration for signal evaluation and process environment.

use serde::{Deserialize, Serialize};

/// Tunables for the confluence signal generator.
///
/// Defaults match the production strategy: RSI(14)/ATR(14) with a 20-bar
/// divergence lookback on the primary timeframe, EMA(9)/EMA(21) crossover,
/// and an EMA(20) trend gate on the bias timeframe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignalConfig {
    /// RSI period on the primary timeframe.
    pub rsi_period: usize,
    /// ATR period on the primary timeframe.
    pub atr_period: usize,
    /// Candles scanned (before the latest) for divergence extrema.
    pub divergence_lookback: usize,
    /// Fast EMA period for the crossover trigger.
    pub ema_fast_period: usize,
    /// Slow EMA period for the crossover trigger.
    pub ema_slow_period: usize,
    /// EMA period on the bias timeframe; also its minimum candle count.
    pub bias_ema_period: usize,
    /// Trailing candles averaged for the volume health gate.
    pub volume_lookback: usize,
    /// Latest volume must exceed this fraction of the trailing average.
    pub volume_floor: f64,
    /// ATR must exceed this fraction of the current price.
    pub min_atr_price_ratio: f64,
    /// Price band around VWAP that still counts as a pullback entry.
    pub vwap_pullback_band: f64,
    /// Winning score at or above this is a STRONG signal.
    pub strong_threshold: f64,
    /// Winning score at or above this is at least MODERATE.
    pub moderate_threshold: f64,
    /// Stop-loss distance in ATR multiples.
    pub stop_atr_multiple: f64,
    /// First profit-target distance in ATR multiples; the second doubles it.
    pub target_atr_multiple: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            atr_period: 14,
            divergence_lookback: 20,
            ema_fast_period: 9,
            ema_slow_period: 21,
            bias_ema_period: 20,
            volume_lookback: 10,
            volume_floor: 0.8,
            min_atr_price_ratio: 0.0005,
            vwap_pullback_band: 0.005,
            strong_threshold: 4.0,
            moderate_threshold: 2.5,
            stop_atr_multiple: 1.5,
            target_atr_multiple: 3.0,
        }
    }
}

impl SignalConfig {
    /// Minimum primary-timeframe candle count for a full evaluation.
    pub fn min_primary_candles(&self) -> usize {
        (self.rsi_period + 1)
            .max(self.divergence_lookback)
            .max(self.atr_period)
    }
}

/// Deployment environment, from `CANDELA_ENV` (defaults to `development`).
pub fn environment() -> String {
    std::env::var("CANDELA_ENV").unwrap_or_else(|_| "development".to_string())
}
