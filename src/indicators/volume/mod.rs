//! Volume indicators: VWAP

pub mod vwap;

pub use vwap::*;
