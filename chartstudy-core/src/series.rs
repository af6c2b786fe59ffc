//! Sparse numeric series aligned with the candle timeline.
//!
//! A `Series` has exactly one slot per candle. `None` marks a bar where the
//! indicator has no value yet (warm-up) or cannot produce one; it is never
//! encoded as 0.0 or NaN.

use crate::domain::Candle;

pub type Series = Vec<Option<f64>>;

/// A series with every slot empty.
pub fn empty(len: usize) -> Series {
    vec![None; len]
}

/// Apply `f` to the valid (`Some`) subsequence of `series` and merge the
/// output back at the original indices.
///
/// `f` sees a dense slice with the gaps removed and must return a series of
/// the same length as that slice. This is how chained indicators (DEMA, TEMA,
/// TRIX, the MACD signal line, Stochastic %D, ADX) feed one stage's output into
/// the next without per-indicator index bookkeeping.
pub fn apply_on_valid<F>(series: &[Option<f64>], f: F) -> Series
where
    F: FnOnce(&[f64]) -> Series,
{
    let (indices, values): (Vec<usize>, Vec<f64>) = series
        .iter()
        .enumerate()
        .filter_map(|(i, v)| v.map(|v| (i, v)))
        .unzip();

    let inner = f(&values);
    debug_assert_eq!(inner.len(), values.len(), "stage changed series length");

    let mut out = empty(series.len());
    for (slot, value) in indices.iter().zip(inner) {
        out[*slot] = value;
    }
    out
}

/// Element-wise combination of two series; empty wherever either input is.
pub fn zip_with<F>(a: &[Option<f64>], b: &[Option<f64>], f: F) -> Series
where
    F: Fn(f64, f64) -> f64,
{
    a.iter()
        .zip(b)
        .map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) => Some(f(*x, *y)),
            _ => None,
        })
        .collect()
}

/// Index of the first populated slot.
pub fn first_valid(series: &[Option<f64>]) -> Option<usize> {
    series.iter().position(|v| v.is_some())
}

pub fn closes(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.close).collect()
}

pub fn highs(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.high).collect()
}

pub fn lows(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(|c| c.low).collect()
}

pub fn typical_prices(candles: &[Candle]) -> Vec<f64> {
    candles.iter().map(Candle::typical_price).collect()
}
