//! Stochastic oscillator.
//!
//! - %K = 100 * (close - LL) / (HH - LL) over the last `k_period` bars,
//!   from index k_period - 1. A flat window (HH == LL) gives 50.
//! - %D = SMA(d_period) of %K, from index k_period + d_period - 2.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::sma::sma;
use crate::indicators::window::{rolling_max, rolling_min};
use crate::series::{apply_on_valid, empty, highs, lows, Series};

#[derive(Debug, Clone)]
pub struct Stochastic {
    k_period: usize,
    d_period: usize,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StochasticSeries {
    pub k: Series,
    pub d: Series,
}

impl Stochastic {
    pub fn new(k_period: usize, d_period: usize) -> Result<Self, IndicatorError> {
        let k_period = check_period("Stochastic", "k_period", k_period)?;
        let d_period = check_period("Stochastic", "d_period", d_period)?;
        Ok(Self {
            k_period,
            d_period,
            name: format!("Stoch({k_period},{d_period})"),
        })
    }
}

/// Position of `value` inside [low, high] scaled to 0..=100; `flat` when the range is empty.
pub(crate) fn range_position(value: f64, high: f64, low: f64, flat: f64) -> f64 {
    let range = high - low;
    if range == 0.0 {
        flat
    } else {
        100.0 * (value - low) / range
    }
}

pub fn stochastic(candles: &[Candle], k_period: usize, d_period: usize) -> StochasticSeries {
    let hh = rolling_max(&highs(candles), k_period);
    let ll = rolling_min(&lows(candles), k_period);

    let mut k = empty(candles.len());
    for (i, candle) in candles.iter().enumerate() {
        if let (Some(h), Some(l)) = (hh[i], ll[i]) {
            k[i] = Some(range_position(candle.close, h, l, 50.0));
        }
    }

    let d = apply_on_valid(&k, |values| sma(values, d_period));
    StochasticSeries { k, d }
}

impl Indicator for Stochastic {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.k_period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let out = stochastic(candles, self.k_period, self.d_period);
        vec![
            NamedSeries::new("k", self.name.clone(), out.k),
            NamedSeries::new("d", format!("%D({})", self.d_period), out.d),
        ]
    }
}
