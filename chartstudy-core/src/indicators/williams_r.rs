//! Williams %R.
//!
//! %R = -100 * (HH - close) / (HH - LL) over the last `period` bars.
//! Range is [-100, 0]; a flat window gives -50.
//! Lookback: period - 1.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::window::{rolling_max, rolling_min};
use crate::series::{empty, highs, lows, Series};

#[derive(Debug, Clone)]
pub struct WilliamsR {
    period: usize,
    name: String,
}

impl WilliamsR {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("Williams %R", "period", period)?;
        Ok(Self {
            period,
            name: format!("%R({period})"),
        })
    }
}

pub fn williams_r(candles: &[Candle], period: usize) -> Series {
    let hh = rolling_max(&highs(candles), period);
    let ll = rolling_min(&lows(candles), period);

    let mut result = empty(candles.len());
    for (i, candle) in candles.iter().enumerate() {
        let (Some(h), Some(l)) = (hh[i], ll[i]) else {
            continue;
        };
        let range = h - l;
        result[i] = Some(if range == 0.0 {
            -50.0
        } else {
            -100.0 * (h - candle.close) / range
        });
    }
    result
}

impl Indicator for WilliamsR {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "williams_r",
            self.name.clone(),
            williams_r(candles, self.period),
        )]
    }
}
