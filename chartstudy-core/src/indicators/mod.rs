//! Concrete indicator implementations.
//!
//! All 26 indicator families implement the `Indicator` trait from
//! `crate::indicator`. Each module also exposes its calculation as a plain
//! function over candles or a dense `&[f64]`, so composed indicators reuse the
//! building blocks (`ema`, `sma`, `wilder_smooth`, `true_range`) directly.
//!
//! Multi-line indicators (MACD, Bollinger, Stochastic, ADX, Donchian, Keltner,
//! Aroon) return every line from one `compute` call, primary line first.

pub mod adx;
pub mod aroon;
pub mod atr;
pub mod bollinger;
pub mod cci;
pub mod chaikin;
pub mod cmo;
pub mod dema;
pub mod donchian;
pub mod ema;
pub mod force;
pub mod keltner;
pub mod macd;
pub mod mfi;
pub mod obv;
pub mod parabolic_sar;
pub mod roc;
pub mod rsi;
pub mod sma;
pub mod stochastic;
pub mod supertrend;
pub mod tema;
pub mod trix;
pub mod vwap;
pub mod williams_r;
pub mod window;
pub mod wma;

pub use adx::Adx;
pub use aroon::Aroon;
pub use atr::Atr;
pub use bollinger::Bollinger;
pub use cci::Cci;
pub use chaikin::Chaikin;
pub use cmo::Cmo;
pub use dema::Dema;
pub use donchian::Donchian;
pub use ema::Ema;
pub use force::ForceIndex;
pub use keltner::Keltner;
pub use macd::Macd;
pub use mfi::Mfi;
pub use obv::Obv;
pub use parabolic_sar::ParabolicSar;
pub use roc::Roc;
pub use rsi::Rsi;
pub use sma::Sma;
pub use stochastic::Stochastic;
pub use supertrend::Supertrend;
pub use tema::Tema;
pub use trix::Trix;
pub use vwap::Vwap;
pub use williams_r::WilliamsR;
pub use wma::Wma;

#[cfg(test)]
const TEST_T0: i64 = 1_704_153_600; // 2024-01-02 00:00 UTC

#[cfg(test)]
const TEST_DAY: i64 = 86_400;

/// Create synthetic daily candles from close prices for testing.
///
/// Generates plausible OHLV: open = prev_close (or close for first bar),
/// high = max(open,close) + 1.0, low = min(open,close) - 1.0, volume = 1000.
#[cfg(test)]
pub fn make_candles(closes: &[f64]) -> Vec<crate::domain::Candle> {
    use crate::domain::Candle;
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            let high = open.max(close) + 1.0;
            let low = open.min(close) - 1.0;
            Candle::new(TEST_T0 + i as i64 * TEST_DAY, open, high, low, close, 1000.0)
        })
        .collect()
}

/// Create daily candles from explicit (open, high, low, close) tuples, volume = 1000.
#[cfg(test)]
pub fn make_ohlc(data: &[(f64, f64, f64, f64)]) -> Vec<crate::domain::Candle> {
    use crate::domain::Candle;
    data.iter()
        .enumerate()
        .map(|(i, &(open, high, low, close))| {
            Candle::new(TEST_T0 + i as i64 * TEST_DAY, open, high, low, close, 1000.0)
        })
        .collect()
}

/// First output line of an indicator.
#[cfg(test)]
pub fn primary(
    indicator: &dyn crate::indicator::Indicator,
    candles: &[crate::domain::Candle],
) -> crate::series::Series {
    indicator
        .compute(candles)
        .into_iter()
        .next()
        .map(|line| line.values)
        .unwrap_or_default()
}

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;
