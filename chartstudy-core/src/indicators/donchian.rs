//! Donchian Channel — highest high / lowest low over a lookback window.
//!
//! - Upper: max(high[t-period+1..=t])
//! - Lower: min(low[t-period+1..=t])
//! - Middle: (upper + lower) / 2
//!
//! Lookback: period - 1.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::window::{rolling_max, rolling_min};
use crate::series::{highs, lows, zip_with, Series};

#[derive(Debug, Clone)]
pub struct Donchian {
    period: usize,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonchianSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

impl Donchian {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("Donchian", "period", period)?;
        Ok(Self {
            period,
            name: format!("DC({period})"),
        })
    }
}

pub fn donchian(candles: &[Candle], period: usize) -> DonchianSeries {
    let upper = rolling_max(&highs(candles), period);
    let lower = rolling_min(&lows(candles), period);
    let middle = zip_with(&upper, &lower, |u, l| (u + l) / 2.0);
    DonchianSeries {
        upper,
        middle,
        lower,
    }
}

impl Indicator for Donchian {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let out = donchian(candles, self.period);
        vec![
            NamedSeries::new("upper", format!("{} Upper", self.name), out.upper),
            NamedSeries::new("middle", format!("{} Middle", self.name), out.middle),
            NamedSeries::new("lower", format!("{} Lower", self.name), out.lower),
        ]
    }
}
