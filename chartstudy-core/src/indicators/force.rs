//! Force Index — EMA of (close change * volume).
//!
//! raw[0] = 0, raw[t] = (close[t] - close[t-1]) * volume[t].
//! Lookback: period - 1.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::ema::ema;
use crate::series::Series;

#[derive(Debug, Clone)]
pub struct ForceIndex {
    period: usize,
    name: String,
}

impl ForceIndex {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("Force", "period", period)?;
        Ok(Self {
            period,
            name: format!("Force({period})"),
        })
    }
}

pub fn force_index(candles: &[Candle], period: usize) -> Series {
    let raw: Vec<f64> = candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                0.0
            } else {
                (c.close - candles[i - 1].close) * c.volume
            }
        })
        .collect();
    ema(&raw, period)
}

impl Indicator for ForceIndex {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "force",
            self.name.clone(),
            force_index(candles, self.period),
        )]
    }
}
