//! Two-timeframe confluence signal generator.
//!
//! Each invocation is a pure function of its two input series: indicators are
//! computed on the primary (short) timeframe, an EMA on the bias (long)
//! timeframe gates the trade direction, and independent buy/sell scores
//! accumulate from VWAP positioning, RSI divergence, and EMA crossover. The
//! winning score resolves to a direction and confidence tier; STRONG signals
//! additionally carry ATR-derived trade parameters.

use crate::config::SignalConfig;
use crate::indicators::{atr, ema, rsi, vwap, IndicatorError};
use crate::models::{
    Candle, IndicatorSnapshot, SignalDirection, SignalStrength, TradeParameters, TradingSignal,
};
use crate::signals::channel::SignalChannel;
use crate::signals::divergence::{detect_bearish_divergence, detect_bullish_divergence};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

pub struct SignalGenerator {
    config: SignalConfig,
    channel: Option<Arc<SignalChannel>>,
}

impl SignalGenerator {
    pub fn new(config: SignalConfig) -> Self {
        Self {
            config,
            channel: None,
        }
    }

    /// Attach a notification channel. Every generated signal, including the
    /// insufficient-data ones, is published to it as well as returned.
    pub fn with_channel(mut self, channel: Arc<SignalChannel>) -> Self {
        self.channel = Some(channel);
        self
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Evaluate the current market state and produce a fresh signal.
    ///
    /// `candles` is the primary (short) timeframe, `bias_candles` the longer
    /// timeframe used for trend bias; both oldest-to-newest. History
    /// shortfalls produce a well-formed NEUTRAL/WEAK signal whose reason
    /// names the unmet requirement — they are never an error.
    pub fn generate(&self, candles: &[Candle], bias_candles: &[Candle]) -> TradingSignal {
        let cfg = &self.config;
        let timestamp = last_time(candles);

        let min_primary = cfg.min_primary_candles();
        if candles.len() < min_primary {
            return self.finish(TradingSignal::neutral(
                format!(
                    "Not enough primary-timeframe candle data for reliable signals (need {}, have {}).",
                    min_primary,
                    candles.len()
                ),
                timestamp,
            ));
        }
        if bias_candles.len() < cfg.bias_ema_period {
            return self.finish(TradingSignal::neutral(
                format!(
                    "Not enough bias-timeframe candle data for trend bias (need {}, have {}).",
                    cfg.bias_ema_period,
                    bias_candles.len()
                ),
                timestamp,
            ));
        }

        let closes: Vec<f64> = candles.iter().map(|c| c.close).collect();
        let current_price = closes[closes.len() - 1];

        let rsi_values = rsi(&closes, cfg.rsi_period);
        let vwap_values = vwap(candles);
        let atr_values = atr(candles, cfg.atr_period);
        let ema_fast = match ema(&closes, cfg.ema_fast_period) {
            Ok(series) => series,
            Err(error) => return self.finish(self.invalid_config(error, timestamp)),
        };
        let ema_slow = match ema(&closes, cfg.ema_slow_period) {
            Ok(series) => series,
            Err(error) => return self.finish(self.invalid_config(error, timestamp)),
        };

        let snapshot = IndicatorSnapshot {
            rsi: rsi_values.last().copied(),
            vwap: vwap_values.last().copied(),
            atr: atr_values.last().copied().flatten(),
            ema9: ema_fast.last().copied().flatten(),
            ema21: ema_slow.last().copied().flatten(),
        };

        let (
            Some(current_rsi),
            Some(current_vwap),
            Some(current_atr),
            Some(current_ema_fast),
            Some(current_ema_slow),
        ) = (
            snapshot.rsi,
            snapshot.vwap,
            snapshot.atr,
            snapshot.ema9,
            snapshot.ema21,
        )
        else {
            let mut signal = TradingSignal::neutral(
                "Indicator warm-up incomplete; not enough history for all indicators.",
                timestamp,
            );
            signal.indicators = snapshot;
            return self.finish(signal);
        };

        let bias_closes: Vec<f64> = bias_candles.iter().map(|c| c.close).collect();
        let bias_ema = match ema(&bias_closes, cfg.bias_ema_period) {
            Ok(series) => series,
            Err(error) => return self.finish(self.invalid_config(error, timestamp)),
        };
        let Some(current_bias_ema) = bias_ema.last().copied().flatten() else {
            let mut signal = TradingSignal::neutral(
                "Indicator warm-up incomplete; not enough history for all indicators.",
                timestamp,
            );
            signal.indicators = snapshot;
            return self.finish(signal);
        };

        let trend = if current_price > current_bias_ema {
            TrendBias::Up
        } else {
            TrendBias::Down
        };

        let bullish_divergence =
            detect_bullish_divergence(&closes, &rsi_values, cfg.divergence_lookback);
        let bearish_divergence =
            detect_bearish_divergence(&closes, &rsi_values, cfg.divergence_lookback);

        let crossover = match (previous_value(&ema_fast), previous_value(&ema_slow)) {
            (Some(prev_fast), Some(prev_slow)) => {
                if current_ema_fast > current_ema_slow && prev_fast <= prev_slow {
                    EmaCross::Bullish
                } else if current_ema_fast < current_ema_slow && prev_fast >= prev_slow {
                    EmaCross::Bearish
                } else {
                    EmaCross::None
                }
            }
            _ => EmaCross::None,
        };

        let mut buy_score: f64 = 0.0;
        let mut sell_score: f64 = 0.0;
        let mut reasons: Vec<String> = Vec::new();

        match trend {
            TrendBias::Up => {
                reasons.push("HTF Trend: UP".to_string());
                buy_score += 1.0;

                if current_price > current_vwap {
                    reasons.push("Price above VWAP (intraday bullish bias)".to_string());
                    buy_score += 1.0;
                } else if current_price < current_vwap
                    && current_price > current_vwap * (1.0 - cfg.vwap_pullback_band)
                {
                    reasons.push("Price near VWAP (potential pullback entry)".to_string());
                    buy_score += 0.5;
                }

                if bullish_divergence {
                    reasons.push(
                        "Bullish RSI Divergence detected (momentum fading for sellers)".to_string(),
                    );
                    buy_score += 2.0;
                }
                if crossover == EmaCross::Bullish {
                    reasons.push(format!(
                        "Bullish EMA Crossover ({} EMA > {} EMA)",
                        cfg.ema_fast_period, cfg.ema_slow_period
                    ));
                    buy_score += 1.5;
                }
            }
            TrendBias::Down => {
                reasons.push("HTF Trend: DOWN".to_string());
                sell_score += 1.0;

                if current_price < current_vwap {
                    reasons.push("Price below VWAP (intraday bearish bias)".to_string());
                    sell_score += 1.0;
                } else if current_price < current_vwap * (1.0 + cfg.vwap_pullback_band) {
                    reasons.push("Price near VWAP (potential pullback entry)".to_string());
                    sell_score += 0.5;
                }

                if bearish_divergence {
                    reasons.push(
                        "Bearish RSI Divergence detected (momentum fading for buyers)".to_string(),
                    );
                    sell_score += 2.0;
                }
                if crossover == EmaCross::Bearish {
                    reasons.push(format!(
                        "Bearish EMA Crossover ({} EMA < {} EMA)",
                        cfg.ema_fast_period, cfg.ema_slow_period
                    ));
                    sell_score += 1.5;
                }
            }
        }

        // Volume/volatility health gate: thin tape or a dead range downgrades
        // whichever side is in play instead of adding a third score axis.
        let window_start = candles.len().saturating_sub(cfg.volume_lookback);
        let recent_volumes: Vec<f64> = candles[window_start..]
            .iter()
            .filter_map(|c| c.volume)
            .collect();
        let average_volume = if recent_volumes.is_empty() {
            0.0
        } else {
            recent_volumes.iter().sum::<f64>() / recent_volumes.len() as f64
        };
        let volume_healthy = candles[candles.len() - 1]
            .volume
            .map_or(false, |v| v > average_volume * cfg.volume_floor);
        let volatility_healthy = current_atr > current_price * cfg.min_atr_price_ratio;

        if buy_score > 0.0 && (!volume_healthy || !volatility_healthy) {
            reasons.push("Volume or volatility not optimal for a strong signal".to_string());
            buy_score -= 1.0;
        }
        if sell_score > 0.0 && (!volume_healthy || !volatility_healthy) {
            reasons.push("Volume or volatility not optimal for a strong signal".to_string());
            sell_score -= 1.0;
        }

        debug!(
            buy_score,
            sell_score,
            rsi = current_rsi,
            vwap = current_vwap,
            atr = current_atr,
            "confluence scores computed"
        );

        let mut signal = TradingSignal {
            direction: SignalDirection::Neutral,
            strength: SignalStrength::Weak,
            indicators: snapshot,
            timestamp,
            reason: String::new(),
            trade_parameters: None,
        };

        let trace = reasons.join(", ");
        if buy_score >= cfg.strong_threshold && buy_score > sell_score {
            signal.direction = SignalDirection::Buy;
            signal.strength = SignalStrength::Strong;
            signal.reason = format!("Strong Buy Signal: {trace}");
        } else if buy_score >= cfg.moderate_threshold && buy_score > sell_score {
            signal.direction = SignalDirection::Buy;
            signal.strength = SignalStrength::Moderate;
            signal.reason = format!("Moderate Buy Signal: {trace}");
        } else if sell_score >= cfg.strong_threshold && sell_score > buy_score {
            signal.direction = SignalDirection::Sell;
            signal.strength = SignalStrength::Strong;
            signal.reason = format!("Strong Sell Signal: {trace}");
        } else if sell_score >= cfg.moderate_threshold && sell_score > buy_score {
            signal.direction = SignalDirection::Sell;
            signal.strength = SignalStrength::Moderate;
            signal.reason = format!("Moderate Sell Signal: {trace}");
        } else if trace.is_empty() {
            signal.reason = "Neutral: no strong confluence detected.".to_string();
        } else {
            signal.reason = format!("Neutral: {trace}");
        }

        if signal.strength == SignalStrength::Strong {
            let stop_distance = current_atr * cfg.stop_atr_multiple;
            let target_distance = current_atr * cfg.target_atr_multiple;
            signal.trade_parameters = Some(if signal.direction == SignalDirection::Buy {
                TradeParameters {
                    entry: current_price,
                    stop_loss: current_price - stop_distance,
                    profit_target1: current_price + target_distance,
                    profit_target2: current_price + 2.0 * target_distance,
                }
            } else {
                TradeParameters {
                    entry: current_price,
                    stop_loss: current_price + stop_distance,
                    profit_target1: current_price - target_distance,
                    profit_target2: current_price - 2.0 * target_distance,
                }
            });
        }

        if signal.direction != SignalDirection::Neutral {
            info!(
                direction = %signal.direction,
                strength = %signal.strength,
                price = current_price,
                "trading signal generated"
            );
        }

        self.finish(signal)
    }

    fn invalid_config(&self, error: IndicatorError, timestamp: DateTime<Utc>) -> TradingSignal {
        TradingSignal::neutral(format!("Invalid signal configuration: {error}."), timestamp)
    }

    fn finish(&self, signal: TradingSignal) -> TradingSignal {
        if let Some(channel) = &self.channel {
            channel.publish(&signal);
        }
        signal
    }
}

impl Default for SignalGenerator {
    fn default() -> Self {
        Self::new(SignalConfig::default())
    }
}

fn last_time(candles: &[Candle]) -> DateTime<Utc> {
    candles
        .last()
        .map(|c| c.time)
        .unwrap_or(DateTime::UNIX_EPOCH)
}

fn previous_value(series: &[Option<f64>]) -> Option<f64> {
    if series.len() < 2 {
        None
    } else {
        series[series.len() - 2]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum TrendBias {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum EmaCross {
    Bullish,
    Bearish,
    None,
}
