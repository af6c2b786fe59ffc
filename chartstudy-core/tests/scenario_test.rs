//! End-to-end scenarios through the public `compute` contract.
//!
//! Each scenario builds a small fixed candle history, computes configs made by
//! the factory, and checks the emitted points.

use std::collections::BTreeMap;

use chartstudy_core::{compute, compute_all, Candle, ConfigFactory, IndicatorResult, SeededIds};

const T0: i64 = 1_704_153_600; // 2024-01-02 00:00 UTC
const DAY: i64 = 86_400;

/// 30 daily candles with closes 100, 101, ..., 129.
fn steady_uptrend() -> Vec<Candle> {
    (0..30)
        .map(|i| {
            let close = 100.0 + i as f64;
            let open = close - 1.0;
            Candle::new(T0 + i * DAY, open, close + 0.5, open - 0.5, close, 10_000.0)
        })
        .collect()
}

/// 20 flat daily candles: OHLC = 50, no volume.
fn flat_no_volume() -> Vec<Candle> {
    (0..20)
        .map(|i| Candle::new(T0 + i * DAY, 50.0, 50.0, 50.0, 50.0, 0.0))
        .collect()
}

fn run(kind: &str, params: &[(&str, f64)], candles: &[Candle]) -> IndicatorResult {
    let factory = ConfigFactory::new(SeededIds::new(42));
    let overrides: BTreeMap<String, f64> =
        params.iter().map(|(k, v)| (k.to_string(), *v)).collect();
    let config = factory.create(kind, Some(&overrides)).unwrap();
    compute(&config, candles).unwrap()
}

// ── Scenario A: steady uptrend ───────────────────────────────────────

#[test]
fn uptrend_sma20() {
    let candles = steady_uptrend();
    let result = run("sma", &[("period", 20.0)], &candles);
    let line = &result.lines[0];

    assert_eq!(line.label, "SMA(20)");
    assert_eq!(line.data.len(), 11);
    assert_eq!(line.data[0].time, candles[19].time);
    assert_eq!(line.data[0].value, 109.5);
    assert_eq!(line.data[10].value, 119.5);
}

#[test]
fn uptrend_rsi_reaches_100() {
    let candles = steady_uptrend();
    let result = run("rsi", &[("period", 14.0)], &candles);
    let line = &result.lines[0];

    assert_eq!(line.data[0].time, candles[14].time);
    assert_eq!(line.data.last().map(|p| p.value), Some(100.0));
}

#[test]
fn uptrend_psar_never_flips() {
    let candles = steady_uptrend();
    let result = run("psar", &[], &candles);
    let line = &result.lines[0];

    assert_eq!(line.label, "PSAR(0.02,0.2)");
    assert_eq!(line.data.len(), candles.len() - 1);
    for point in &line.data {
        let candle = candles.iter().find(|c| c.time == point.time).unwrap();
        assert!(point.value < candle.low, "SAR above price at {}", point.time);
    }
}

#[test]
fn uptrend_macd_positive() {
    let candles = steady_uptrend();
    let result = run("macd", &[("fast", 3.0), ("slow", 6.0), ("signal", 3.0)], &candles);
    let macd = result.line("macd").unwrap();
    assert_eq!(macd.data[0].time, candles[5].time);
    assert!(macd.data.iter().all(|p| p.value > 0.0));

    let signal = result.line("signal").unwrap();
    assert_eq!(signal.data[0].time, candles[7].time);
    assert_eq!(result.line("histogram").unwrap().data.len(), signal.data.len());
}

#[test]
fn uptrend_bollinger_has_band() {
    let candles = steady_uptrend();
    let result = run("bollinger", &[], &candles);
    assert!(result.overlay);
    assert_eq!(result.lines.len(), 3);
    assert_eq!(result.lines[0].label, "BB(20,2)");
    assert_eq!(result.bands.len(), 1);
    assert_eq!(result.bands[0].fill_opacity, 0.1);
}

// ── Scenario B: flat market, no volume ───────────────────────────────

#[test]
fn flat_vwap_absent() {
    let result = run("vwap", &[], &flat_no_volume());
    assert_eq!(result.lines.len(), 1);
    assert!(result.lines[0].data.is_empty());
}

#[test]
fn flat_cci_zero() {
    let candles = flat_no_volume();
    let result = run("cci", &[("period", 5.0)], &candles);
    let line = &result.lines[0];
    assert_eq!(line.data.len(), candles.len() - 4);
    assert!(line.data.iter().all(|p| p.value == 0.0));
}

#[test]
fn flat_stochastic_midpoint() {
    let result = run("stochastic", &[("k_period", 5.0), ("d_period", 3.0)], &flat_no_volume());
    let k = result.line("k").unwrap();
    assert_eq!(k.data.len(), 16);
    assert!(k.data.iter().all(|p| p.value == 50.0));
    assert!(result.line("d").unwrap().data.iter().all(|p| p.value == 50.0));
}

#[test]
fn flat_degenerate_fallbacks() {
    let candles = flat_no_volume();
    let expect_all = |kind: &str, value: f64| {
        let result = run(kind, &[("period", 5.0)], &candles);
        assert!(!result.lines[0].data.is_empty(), "{kind} emitted nothing");
        for p in &result.lines[0].data {
            assert!((p.value - value).abs() < 1e-9, "{kind} at {}: {}", p.time, p.value);
        }
    };
    expect_all("williams_r", -50.0);
    expect_all("cmo", 0.0);
    expect_all("roc", 0.0);
    expect_all("mfi", 100.0);
    expect_all("atr", 0.0);
    expect_all("obv", 0.0);
    expect_all("adx", 0.0);
    expect_all("trix", 0.0);
}

// ── Batch ────────────────────────────────────────────────────────────

#[test]
fn batch_matches_single_calls() {
    let candles = steady_uptrend();
    let factory = ConfigFactory::new(SeededIds::new(1));
    let configs: Vec<_> = ["sma", "ema", "rsi", "keltner", "aroon"]
        .iter()
        .map(|k| factory.create(k, None).unwrap())
        .collect();

    let batch = compute_all(&configs, &candles);
    for (config, result) in configs.iter().zip(&batch) {
        let single = compute(config, &candles);
        assert_eq!(result.as_ref().map(|r| r.digest()), single.map(|r| r.digest()));
    }
}
