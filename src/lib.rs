//! Candle analytics engine: technical indicators, RSI divergence detection,
//! and a two-timeframe confluence signal generator with a pub/sub relay for
//! downstream consumers.
//!
//! The crate is a pure, synchronous library. Callers supply candle series
//! (oldest to newest) and receive an immutable [`models::TradingSignal`] per
//! invocation; data acquisition, persistence, and rendering live elsewhere.

pub mod config;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod signals;
