//! Triple Exponential Moving Average (TEMA).
//!
//! E1 = EMA(close), E2 = EMA(E1), E3 = EMA(E2), each stage over the previous
//! stage's valid subsequence. TEMA = 3*E1 - 3*E2 + E3.
//! Until both E2 and E3 exist the value falls back to E1.
//! Lookback: period - 1.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::ema::ema;
use crate::series::{apply_on_valid, closes, Series};

#[derive(Debug, Clone)]
pub struct Tema {
    period: usize,
    name: String,
}

impl Tema {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("TEMA", "period", period)?;
        Ok(Self {
            period,
            name: format!("TEMA({period})"),
        })
    }
}

pub fn tema(values: &[f64], period: usize) -> Series {
    let e1 = ema(values, period);
    let e2 = apply_on_valid(&e1, |v| ema(v, period));
    let e3 = apply_on_valid(&e2, |v| ema(v, period));

    (0..values.len())
        .map(|i| match (e1[i], e2[i], e3[i]) {
            (Some(a), Some(b), Some(c)) => Some(3.0 * a - 3.0 * b + c),
            (Some(a), _, _) => Some(a),
            _ => None,
        })
        .collect()
}

impl Indicator for Tema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let values = tema(&closes(candles), self.period);
        vec![NamedSeries::new("tema", self.name.clone(), values)]
    }
}
