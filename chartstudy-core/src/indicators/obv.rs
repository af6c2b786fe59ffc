//! On-Balance Volume (OBV).
//!
//! Running total of volume, added on up closes and subtracted on down closes.
//! The first bar starts the total at its own volume. No warm-up.

use crate::domain::Candle;
use crate::indicator::{Indicator, NamedSeries};
use crate::series::Series;

#[derive(Debug, Clone)]
pub struct Obv {
    name: String,
}

impl Obv {
    pub fn new() -> Self {
        Self {
            name: "OBV".to_string(),
        }
    }
}

impl Default for Obv {
    fn default() -> Self {
        Self::new()
    }
}

pub fn obv(candles: &[Candle]) -> Series {
    let mut total = 0.0;
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i == 0 {
                total = c.volume;
            } else {
                let prev = candles[i - 1].close;
                if c.close > prev {
                    total += c.volume;
                } else if c.close < prev {
                    total -= c.volume;
                }
            }
            Some(total)
        })
        .collect()
}

impl Indicator for Obv {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new("obv", self.name.clone(), obv(candles))]
    }
}
