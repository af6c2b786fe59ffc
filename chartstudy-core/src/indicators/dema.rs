//! Double Exponential Moving Average (DEMA).
//!
//! E1 = EMA(close, n), E2 = EMA(E1, n) over E1's valid subsequence.
//! DEMA = 2*E1 - E2; while E2 is still warming up the value falls back to E1.
//! Lookback: period - 1.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::ema::ema;
use crate::series::{apply_on_valid, closes, Series};

#[derive(Debug, Clone)]
pub struct Dema {
    period: usize,
    name: String,
}

impl Dema {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("DEMA", "period", period)?;
        Ok(Self {
            period,
            name: format!("DEMA({period})"),
        })
    }
}

pub fn dema(values: &[f64], period: usize) -> Series {
    let e1 = ema(values, period);
    let e2 = apply_on_valid(&e1, |v| ema(v, period));

    e1.iter()
        .zip(&e2)
        .map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => Some(2.0 * a - b),
            (Some(a), None) => Some(*a),
            _ => None,
        })
        .collect()
}

impl Indicator for Dema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let values = dema(&closes(candles), self.period);
        vec![NamedSeries::new("dema", self.name.clone(), values)]
    }
}
