//! Chande Momentum Oscillator (CMO).
//!
//! CMO = 100 * (up - down) / (up + down), where up and down are the sums of
//! positive and negative close-to-close changes over the last `period` diffs.
//! No movement in the window gives 0.
//! Lookback: period.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::window::RunningSum;
use crate::series::{closes, empty, Series};

#[derive(Debug, Clone)]
pub struct Cmo {
    period: usize,
    name: String,
}

impl Cmo {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("CMO", "period", period)?;
        Ok(Self {
            period,
            name: format!("CMO({period})"),
        })
    }
}

pub fn cmo(values: &[f64], period: usize) -> Series {
    let mut result = empty(values.len());
    let mut ups = RunningSum::new(period);
    let mut downs = RunningSum::new(period);

    for i in 1..values.len() {
        let change = values[i] - values[i - 1];
        ups.push(change.max(0.0));
        downs.push((-change).max(0.0));

        if !ups.is_full() {
            continue;
        }
        let (up, down) = (ups.sum().max(0.0), downs.sum().max(0.0));
        let total = up + down;
        result[i] = Some(if total == 0.0 {
            0.0
        } else {
            100.0 * (up - down) / total
        });
    }

    result
}

impl Indicator for Cmo {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "cmo",
            self.name.clone(),
            cmo(&closes(candles), self.period),
        )]
    }
}
