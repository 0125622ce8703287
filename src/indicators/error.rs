//! Contract-violation errors for the indicator library.

use thiserror::Error;

/// Raised when an indicator is called outside its domain contract.
///
/// These indicate caller bugs, not bad market data; data-quality problems
/// (short history, missing volume) degrade softly instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndicatorError {
    #[error("EMA period must be at least 1, got {period}")]
    InvalidPeriod { period: usize },

    #[error("MACD slow period ({slow}) must be greater than fast period ({fast})")]
    InvalidMacdPeriods { fast: usize, slow: usize },
}
