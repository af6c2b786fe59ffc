//! Criterion benchmarks for ChartStudy hot paths.
//!
//! Benchmarks:
//! 1. Windowed indicators (monotonic deque and running-sum paths)
//! 2. Chained EMA families (apply_on_valid stages)
//! 3. Stateful trend indicators (PSAR, SuperTrend, ADX)
//! 4. Full dispatch: every catalog entry, sequential vs. parallel batch

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chartstudy_core::indicators::{
    Adx, Aroon, Cci, Donchian, Mfi, ParabolicSar, Supertrend, Tema, Trix,
};
use chartstudy_core::{compute, compute_all, list_definitions, Candle, ConfigFactory, Indicator};

// ── Helpers ──────────────────────────────────────────────────────────

fn make_candles(n: usize) -> Vec<Candle> {
    let t0 = 1_577_923_200; // 2020-01-02 00:00 UTC
    (0..n)
        .map(|i| {
            let close = 100.0 + (i as f64 * 0.1).sin() * 10.0;
            let open = close - 0.3;
            let high = close + 1.5;
            let low = close - 1.5;
            let volume = 1_000_000.0 + (i % 500_000) as f64;
            Candle::new(t0 + i as i64 * 86_400, open, high, low, close, volume)
        })
        .collect()
}

fn boxed(indicator: impl Indicator + 'static) -> Box<dyn Indicator> {
    Box::new(indicator)
}

const BAR_COUNTS: [usize; 3] = [252, 1260, 2520];

fn bench_group(c: &mut Criterion, name: &str, indicators: &[(&str, Box<dyn Indicator>)]) {
    let mut group = c.benchmark_group(name);
    for &bar_count in &BAR_COUNTS {
        let candles = make_candles(bar_count);
        for (label, indicator) in indicators {
            group.bench_with_input(BenchmarkId::new(*label, bar_count), &candles, |b, candles| {
                b.iter(|| indicator.compute(black_box(candles)));
            });
        }
    }
    group.finish();
}

// ── 1. Windows ───────────────────────────────────────────────────────

fn bench_windows(c: &mut Criterion) {
    bench_group(
        c,
        "windowed",
        &[
            ("donchian_50", boxed(Donchian::new(50).unwrap())),
            ("aroon_25", boxed(Aroon::new(25).unwrap())),
            ("mfi_14", boxed(Mfi::new(14).unwrap())),
            ("cci_20", boxed(Cci::new(20).unwrap())),
        ],
    );
}

// ── 2. Chained EMAs ──────────────────────────────────────────────────

fn bench_chained(c: &mut Criterion) {
    bench_group(
        c,
        "chained",
        &[
            ("tema_20", boxed(Tema::new(20).unwrap())),
            ("trix_15", boxed(Trix::new(15).unwrap())),
        ],
    );
}

// ── 3. Stateful ──────────────────────────────────────────────────────

fn bench_stateful(c: &mut Criterion) {
    bench_group(
        c,
        "stateful",
        &[
            ("psar", boxed(ParabolicSar::new(0.02, 0.2).unwrap())),
            ("supertrend_10_3", boxed(Supertrend::new(10, 3.0).unwrap())),
            ("adx_14", boxed(Adx::new(14).unwrap())),
        ],
    );
}

// ── 4. Full dispatch ─────────────────────────────────────────────────

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_catalog");
    let factory = ConfigFactory::default();
    let configs: Vec<_> = list_definitions()
        .iter()
        .map(|def| factory.create(def.kind.as_str(), None).unwrap())
        .collect();

    for &bar_count in &BAR_COUNTS {
        let candles = make_candles(bar_count);

        group.bench_with_input(BenchmarkId::new("sequential", bar_count), &candles, |b, candles| {
            b.iter(|| {
                configs
                    .iter()
                    .map(|cfg| compute(black_box(cfg), black_box(candles)))
                    .collect::<Vec<_>>()
            });
        });

        group.bench_with_input(BenchmarkId::new("parallel", bar_count), &candles, |b, candles| {
            b.iter(|| compute_all(black_box(&configs), black_box(candles)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_windows,
    bench_chained,
    bench_stateful,
    bench_dispatch,
);
criterion_main!(benches);
