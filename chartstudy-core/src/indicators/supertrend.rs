//! SuperTrend — ATR-based directional indicator.
//!
//! Inherently sequential/stateful: direction flips between support and resistance
//! based on close vs band comparisons.
//!
//! Seeded at the first ATR bar (period - 1) with hl2 +/- multiplier * ATR,
//! trending up. Output is the active band: the lower band (support) when
//! trending up, the upper band (resistance) when trending down.

use crate::domain::Candle;
use crate::indicator::{check_non_negative, check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::atr::atr;
use crate::series::{empty, first_valid, Series};

#[derive(Debug, Clone)]
pub struct Supertrend {
    period: usize,
    multiplier: f64,
    name: String,
}

impl Supertrend {
    pub fn new(period: usize, multiplier: f64) -> Result<Self, IndicatorError> {
        let period = check_period("SuperTrend", "period", period)?;
        let multiplier = check_non_negative("SuperTrend", "multiplier", multiplier)?;
        Ok(Self {
            period,
            multiplier,
            name: format!("ST({period},{multiplier})"),
        })
    }
}

pub fn supertrend(candles: &[Candle], period: usize, multiplier: f64) -> Series {
    let n = candles.len();
    let mut result = empty(n);

    let range = atr(candles, period);
    let Some(start) = first_valid(&range) else {
        return result;
    };

    let bands = |i: usize, a: f64| {
        let hl2 = candles[i].hl2();
        (hl2 + multiplier * a, hl2 - multiplier * a)
    };

    let Some(seed_atr) = range[start] else {
        return result;
    };
    let (mut upper, mut lower) = bands(start, seed_atr);
    let mut trending_up = true;
    result[start] = Some(lower);

    for i in (start + 1)..n {
        let Some(a) = range[i] else { continue };
        let (basic_upper, basic_lower) = bands(i, a);
        let prev_close = candles[i - 1].close;

        // Resistance only tightens while the prior close stayed under it.
        upper = if prev_close <= upper {
            basic_upper.min(upper)
        } else {
            basic_upper
        };
        // Support only tightens while the prior close stayed above it.
        lower = if prev_close >= lower {
            basic_lower.max(lower)
        } else {
            basic_lower
        };

        let close = candles[i].close;
        if trending_up && close < lower {
            trending_up = false;
        } else if !trending_up && close > upper {
            trending_up = true;
        }

        result[i] = Some(if trending_up { lower } else { upper });
    }

    result
}

impl Indicator for Supertrend {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "supertrend",
            self.name.clone(),
            supertrend(candles, self.period, self.multiplier),
        )]
    }
}
