//! Aroon — measures time since highest high and lowest low as a percentage.
//!
//! Aroon Up = 100 * (period - bars_since_highest_high) / period
//! Aroon Down = 100 * (period - bars_since_lowest_low) / period
//! The window spans period + 1 bars; ties resolve to the most recent bar.
//! Lookback: period.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::window::MonotonicWindow;
use crate::series::{empty, Series};

#[derive(Debug, Clone)]
pub struct Aroon {
    period: usize,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AroonSeries {
    pub up: Series,
    pub down: Series,
}

impl Aroon {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("Aroon", "period", period)?;
        Ok(Self {
            period,
            name: format!("Aroon({period})"),
        })
    }
}

pub fn aroon(candles: &[Candle], period: usize) -> AroonSeries {
    let n = candles.len();
    let mut up = empty(n);
    let mut down = empty(n);

    let mut highest = MonotonicWindow::max(period + 1);
    let mut lowest = MonotonicWindow::min(period + 1);
    let p = period as f64;

    for (i, c) in candles.iter().enumerate() {
        highest.push(i, c.high);
        lowest.push(i, c.low);
        if i < period {
            continue;
        }
        if let Some((at, _)) = highest.extreme() {
            up[i] = Some(100.0 * (p - (i - at) as f64) / p);
        }
        if let Some((at, _)) = lowest.extreme() {
            down[i] = Some(100.0 * (p - (i - at) as f64) / p);
        }
    }

    AroonSeries { up, down }
}

impl Indicator for Aroon {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let out = aroon(candles, self.period);
        vec![
            NamedSeries::new("up", format!("{} Up", self.name), out.up),
            NamedSeries::new("down", format!("{} Down", self.name), out.down),
        ]
    }
}
