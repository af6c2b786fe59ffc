//! Simple Moving Average (SMA).
//!
//! Rolling mean of close prices over a lookback window.
//! Lookback: period - 1 (first valid value at index period-1).

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::window::RunningSum;
use crate::series::{closes, empty, Series};

#[derive(Debug, Clone)]
pub struct Sma {
    period: usize,
    name: String,
}

impl Sma {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("SMA", "period", period)?;
        Ok(Self {
            period,
            name: format!("SMA({period})"),
        })
    }
}

/// Rolling mean of `values`. The first window is summed directly so the first
/// emitted value is the plain mean; later values roll the sum forward.
pub fn sma(values: &[f64], period: usize) -> Series {
    let n = values.len();
    let mut result = empty(n);
    if period == 0 || n < period {
        return result;
    }

    let mut window = RunningSum::new(period);
    for (i, &v) in values.iter().enumerate() {
        window.push(v);
        result[i] = window.mean();
    }
    result
}

impl Indicator for Sma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let values = sma(&closes(candles), self.period);
        vec![NamedSeries::new("sma", self.name.clone(), values)]
    }
}
