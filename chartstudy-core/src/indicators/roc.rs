//! Rate of Change (ROC).
//!
//! Percentage price change over N bars.
//! ROC[t] = (close[t] - close[t-period]) / close[t-period] * 100
//! A zero base close gives 0.
//! Lookback: period.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::series::{closes, empty, Series};

#[derive(Debug, Clone)]
pub struct Roc {
    period: usize,
    name: String,
}

impl Roc {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("ROC", "period", period)?;
        Ok(Self {
            period,
            name: format!("ROC({period})"),
        })
    }
}

pub fn roc(values: &[f64], period: usize) -> Series {
    let n = values.len();
    let mut result = empty(n);

    for i in period..n {
        let prev = values[i - period];
        result[i] = Some(if prev == 0.0 {
            0.0
        } else {
            (values[i] - prev) / prev * 100.0
        });
    }

    result
}

impl Indicator for Roc {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "roc",
            self.name.clone(),
            roc(&closes(candles), self.period),
        )]
    }
}
