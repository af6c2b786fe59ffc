//! Chaikin Oscillator.
//!
//! Money flow multiplier = ((close - low) - (high - close)) / (high - low),
//! 0 when high == low. The Accumulation/Distribution line is the running sum
//! of multiplier * volume; the oscillator is EMA(fast) - EMA(slow) of it.
//! Lookback: max(fast, slow) - 1.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::ema::ema;
use crate::series::{zip_with, Series};

#[derive(Debug, Clone)]
pub struct Chaikin {
    fast: usize,
    slow: usize,
    name: String,
}

impl Chaikin {
    pub fn new(fast: usize, slow: usize) -> Result<Self, IndicatorError> {
        let fast = check_period("Chaikin", "fast", fast)?;
        let slow = check_period("Chaikin", "slow", slow)?;
        Ok(Self {
            fast,
            slow,
            name: format!("Chaikin({fast},{slow})"),
        })
    }
}

fn money_flow_multiplier(c: &Candle) -> f64 {
    let range = c.high - c.low;
    if range == 0.0 {
        0.0
    } else {
        ((c.close - c.low) - (c.high - c.close)) / range
    }
}

/// Accumulation/Distribution line.
pub fn accumulation_distribution(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .scan(0.0, |ad, c| {
            *ad += money_flow_multiplier(c) * c.volume;
            Some(*ad)
        })
        .collect()
}

pub fn chaikin(candles: &[Candle], fast: usize, slow: usize) -> Series {
    let ad = accumulation_distribution(candles);
    zip_with(&ema(&ad, fast), &ema(&ad, slow), |f, s| f - s)
}

impl Indicator for Chaikin {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.fast.max(self.slow) - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "chaikin",
            self.name.clone(),
            chaikin(candles, self.fast, self.slow),
        )]
    }
}
