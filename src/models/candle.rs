use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar for a fixed time bucket.
///
/// Series are expected oldest-to-newest with strictly increasing `time`;
/// ordering and OHLC consistency are the caller's responsibility and are not
/// re-checked here. Inconsistent bars degrade signal quality but never panic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    /// Traded volume for the bucket. Some upstream feeds omit it.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub volume: Option<f64>,
    /// Bucket open time, epoch seconds on the wire.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub time: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        time: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume: Some(volume),
            time,
        }
    }

    /// A bar from a feed that does not report volume.
    pub fn without_volume(open: f64, high: f64, low: f64, close: f64, time: DateTime<Utc>) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume: None,
            time,
        }
    }
}
