//! Stateless mathematical transforms over price and candle series.
//!
//! Every function here is deterministic and side-effect-free. Insufficient
//! history is a soft condition (empty or `None`-padded output, per function);
//! only genuine contract violations surface as [`IndicatorError`].

pub mod error;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use error::IndicatorError;
pub use momentum::{macd, rsi, Macd};
pub use trend::{ema, sma};
pub use volatility::atr;
pub use volume::vwap;
