//! Relative Strength Index (RSI).
//!
//! Uses Wilder smoothing of average gains and average losses, seeded by the
//! simple mean of the first `period` close-to-close changes.
//! RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//! Lookback: period.
//! Edge case: avg_loss == 0 → RSI = 100.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::series::{closes, empty, Series};

#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
    name: String,
}

impl Rsi {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("RSI", "period", period)?;
        Ok(Self {
            period,
            name: format!("RSI({period})"),
        })
    }
}

pub fn rsi(values: &[f64], period: usize) -> Series {
    let n = values.len();
    let mut result = empty(n);

    if period == 0 || n < period + 1 {
        return result;
    }

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let ch = values[i] - values[i - 1];
        if ch > 0.0 {
            avg_gain += ch;
        } else {
            avg_loss -= ch;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    result[period] = Some(rsi_value(avg_gain, avg_loss));

    let p = period as f64;
    for i in (period + 1)..n {
        let ch = values[i] - values[i - 1];
        let gain = ch.max(0.0);
        let loss = (-ch).max(0.0);

        avg_gain = (avg_gain * (p - 1.0) + gain) / p;
        avg_loss = (avg_loss * (p - 1.0) + loss) / p;

        result[i] = Some(rsi_value(avg_gain, avg_loss));
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

impl Indicator for Rsi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let values = rsi(&closes(candles), self.period);
        vec![NamedSeries::new("rsi", self.name.clone(), values)]
    }
}
