use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade direction recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

impl fmt::Display for SignalDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalDirection::Buy => write!(f, "BUY"),
            SignalDirection::Sell => write!(f, "SELL"),
            SignalDirection::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Confidence tier, ordered `Weak < Moderate < Strong`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalStrength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for SignalStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalStrength::Weak => write!(f, "WEAK"),
            SignalStrength::Moderate => write!(f, "MODERATE"),
            SignalStrength::Strong => write!(f, "STRONG"),
        }
    }
}

/// Current indicator values attached to an emitted signal.
///
/// Fields stay `None` while the corresponding indicator is still in warm-up
/// or when the signal was produced on an insufficient-data path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorSnapshot {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub rsi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub vwap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub atr: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ema9: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub ema21: Option<f64>,
}

/// Actionable levels derived from ATR, present only on STRONG signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeParameters {
    pub entry: f64,
    pub stop_loss: f64,
    pub profit_target1: f64,
    pub profit_target2: f64,
}

/// The output of one generator invocation.
///
/// Immutable once produced: the generator constructs a fresh value per call
/// and subscribers on the notification channel observe a stable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradingSignal {
    pub direction: SignalDirection,
    pub strength: SignalStrength,
    pub indicators: IndicatorSnapshot,
    /// Time of the last evaluated candle, epoch milliseconds on the wire.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub trade_parameters: Option<TradeParameters>,
}

impl TradingSignal {
    /// A well-formed NEUTRAL/WEAK signal for paths where evaluation could not
    /// run to completion. The reason names the failed requirement.
    pub fn neutral(reason: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            direction: SignalDirection::Neutral,
            strength: SignalStrength::Weak,
            indicators: IndicatorSnapshot::default(),
            timestamp,
            reason: reason.into(),
            trade_parameters: None,
        }
    }
}

impl fmt::Display for TradingSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.direction == SignalDirection::Neutral {
            if self.reason.is_empty() {
                return write!(f, "Neutral market conditions. No strong trading signals detected.");
            }
            return write!(f, "{}", self.reason);
        }

        let mut parts = Vec::new();
        if let Some(rsi) = self.indicators.rsi {
            parts.push(format!("RSI at {:.2}", rsi));
        }
        if let Some(vwap) = self.indicators.vwap {
            parts.push(format!("VWAP at {:.2}", vwap));
        }
        if let Some(atr) = self.indicators.atr {
            parts.push(format!("ATR at {:.2}", atr));
        }
        if let Some(ema9) = self.indicators.ema9 {
            parts.push(format!("EMA9 at {:.2}", ema9));
        }
        if let Some(ema21) = self.indicators.ema21 {
            parts.push(format!("EMA21 at {:.2}", ema21));
        }

        write!(f, "{} {} signal", self.strength, self.direction)?;
        if !parts.is_empty() {
            write!(f, " ({})", parts.join(", "))?;
        }
        let reason = if self.reason.is_empty() {
            "N/A"
        } else {
            self.reason.as_str()
        };
        write!(f, ". Reason: {reason}")
    }
}
