//! Keltner Channel — EMA +/- ATR multiplier.
//!
//! - Middle: EMA(close, period)
//! - Upper: middle + multiplier * ATR(period)
//! - Lower: middle - multiplier * ATR(period)
//!
//! EMA and ATR share the period, so all three lines start at period - 1.

use crate::domain::Candle;
use crate::indicator::{check_non_negative, check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::atr::atr;
use crate::indicators::ema::ema;
use crate::series::{closes, zip_with, Series};

#[derive(Debug, Clone)]
pub struct Keltner {
    period: usize,
    multiplier: f64,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeltnerSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

impl Keltner {
    pub fn new(period: usize, multiplier: f64) -> Result<Self, IndicatorError> {
        let period = check_period("Keltner", "period", period)?;
        let multiplier = check_non_negative("Keltner", "multiplier", multiplier)?;
        Ok(Self {
            period,
            multiplier,
            name: format!("KC({period},{multiplier})"),
        })
    }
}

pub fn keltner(candles: &[Candle], period: usize, multiplier: f64) -> KeltnerSeries {
    let middle = ema(&closes(candles), period);
    let range = atr(candles, period);
    let upper = zip_with(&middle, &range, |m, a| m + multiplier * a);
    let lower = zip_with(&middle, &range, |m, a| m - multiplier * a);
    KeltnerSeries {
        upper,
        middle,
        lower,
    }
}

impl Indicator for Keltner {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let out = keltner(candles, self.period, self.multiplier);
        vec![
            NamedSeries::new("middle", self.name.clone(), out.middle),
            NamedSeries::new("upper", format!("{} Upper", self.name), out.upper),
            NamedSeries::new("lower", format!("{} Lower", self.name), out.lower),
        ]
    }
}
