//! Signal evaluation: divergence detection, confluence scoring, and the
//! notification channel.

pub mod channel;
pub mod divergence;
pub mod generator;

pub use channel::{SignalChannel, Subscription};
pub use divergence::{detect_bearish_divergence, detect_bullish_divergence};
pub use generator::SignalGenerator;
