//! Unit tests for the candle model wire format

use candela::models::Candle;
use chrono::{TimeZone, Utc};

#[test]
fn test_candle_serializes_time_as_epoch_seconds() {
    let candle = Candle::new(
        100.0,
        101.0,
        99.0,
        100.5,
        1_234.0,
        Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    );
    let value = serde_json::to_value(&candle).unwrap();
    assert_eq!(value["time"], 1_700_000_000i64);
    assert_eq!(value["volume"], 1_234.0);
}

#[test]
fn test_candle_without_volume_omits_the_field() {
    let candle = Candle::without_volume(
        100.0,
        101.0,
        99.0,
        100.5,
        Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    );
    let value = serde_json::to_value(&candle).unwrap();
    assert!(value.get("volume").is_none());
}

#[test]
fn test_candle_round_trips() {
    let candle = Candle::new(
        100.0,
        101.0,
        99.0,
        100.5,
        1_234.0,
        Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
    );
    let json = serde_json::to_string(&candle).unwrap();
    let parsed: Candle = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, candle);
}

#[test]
fn test_candle_parses_feed_payload() {
    // The shape an upstream OHLCV feed delivers.
    let json = r#"{"open":100.0,"high":101.0,"low":99.0,"close":100.5,"time":1700000000}"#;
    let parsed: Candle = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.close, 100.5);
    assert_eq!(parsed.volume, None);
    assert_eq!(parsed.time, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
}
