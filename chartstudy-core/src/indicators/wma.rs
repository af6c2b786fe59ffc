//! Weighted Moving Average (WMA).
//!
//! Linear weights 1..=period, newest bar heaviest, normalized by period(period+1)/2.
//! Rolled forward in O(1) per bar: when the window slides, every weight drops
//! by one, so `weighted -= window_sum` before the new value enters at weight `period`.
//! Lookback: period - 1.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::series::{closes, empty, Series};

#[derive(Debug, Clone)]
pub struct Wma {
    period: usize,
    name: String,
}

impl Wma {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("WMA", "period", period)?;
        Ok(Self {
            period,
            name: format!("WMA({period})"),
        })
    }
}

pub fn wma(values: &[f64], period: usize) -> Series {
    let n = values.len();
    let mut result = empty(n);
    if period == 0 || n < period {
        return result;
    }

    let denom = (period * (period + 1)) as f64 / 2.0;

    let mut weighted = 0.0;
    let mut window_sum = 0.0;
    for (w, &v) in values[..period].iter().enumerate() {
        weighted += (w + 1) as f64 * v;
        window_sum += v;
    }
    result[period - 1] = Some(weighted / denom);

    for i in period..n {
        weighted += period as f64 * values[i] - window_sum;
        window_sum += values[i] - values[i - period];
        result[i] = Some(weighted / denom);
    }

    result
}

impl Indicator for Wma {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let values = wma(&closes(candles), self.period);
        vec![NamedSeries::new("wma", self.name.clone(), values)]
    }
}
