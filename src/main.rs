use candela::config::SignalConfig;
use candela::logging::init_logging;
use candela::models::{Candle, TradingSignal};
use candela::signals::{SignalChannel, SignalGenerator};
use chrono::{Duration, Utc};
use std::sync::Arc;
use tracing::info;

fn main() {
    init_logging();

    let channel = Arc::new(SignalChannel::new());
    let _subscription = channel.subscribe(|signal: &TradingSignal| {
        info!(
            direction = %signal.direction,
            strength = %signal.strength,
            "signal received on channel"
        );
    });

    let generator = SignalGenerator::new(SignalConfig::default()).with_channel(channel.clone());
    let bias = flat_series(90.0, 25, 3600);

    // An uptrend pullback that pops back through the short EMAs.
    let primary = crossover_series(106.0);
    let signal = generator.generate(&primary, &bias);
    print_signal("Scenario 1 (bullish crossover)", &signal);

    // Too little history; the generator degrades gracefully.
    let short_history = flat_series(100.0, 10, 300);
    let signal = generator.generate(&short_history, &bias);
    print_signal("Scenario 2 (insufficient data)", &signal);
}

fn print_signal(label: &str, signal: &TradingSignal) {
    println!("{label}:");
    println!("  {signal}");
    match serde_json::to_string_pretty(signal) {
        Ok(json) => println!("{json}"),
        Err(error) => eprintln!("  failed to serialize signal: {error}"),
    }
    println!();
}

fn flat_series(close: f64, count: usize, step_seconds: i64) -> Vec<Candle> {
    let start = Utc::now() - Duration::seconds(step_seconds * count as i64);
    (0..count)
        .map(|i| {
            Candle::new(
                close,
                close + 0.5,
                close - 0.5,
                close,
                1_000.0,
                start + Duration::seconds(step_seconds * i as i64),
            )
        })
        .collect()
}

fn crossover_series(final_close: f64) -> Vec<Candle> {
    let mut closes = vec![100.0; 35];
    closes.extend([99.0; 4]);
    closes.push(final_close);

    let start = Utc::now() - Duration::seconds(300 * closes.len() as i64);
    let mut prev = closes[0];
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = prev;
            prev = close;
            Candle::new(
                open,
                open.max(close) + 0.5,
                open.min(close) - 0.5,
                close,
                1_000.0,
                start + Duration::seconds(300 * i as i64),
            )
        })
        .collect()
}
