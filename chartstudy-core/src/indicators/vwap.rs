//! Volume-Weighted Average Price (VWAP), session-anchored.
//!
//! VWAP = Σ(typical_price * volume) / Σ(volume), restarting at the first
//! candle of every UTC calendar day.
//! Kept as an incremental weighted mean, so a session's first traded bar
//! reports its own typical price exactly.
//! No warm-up; a bar is left empty while the session's cumulative volume is zero.

use crate::domain::Candle;
use crate::indicator::{Indicator, NamedSeries};
use crate::series::{empty, Series};

#[derive(Debug, Clone)]
pub struct Vwap {
    name: String,
}

impl Vwap {
    pub fn new() -> Self {
        Self {
            name: "VWAP".to_string(),
        }
    }
}

impl Default for Vwap {
    fn default() -> Self {
        Self::new()
    }
}

pub fn vwap(candles: &[Candle]) -> Series {
    let mut result = empty(candles.len());
    let mut session = None;
    let mut mean: Option<f64> = None;
    let mut cum_vol = 0.0;

    for (i, candle) in candles.iter().enumerate() {
        let day = candle.utc_date();
        if i == 0 || day != session {
            session = day;
            mean = None;
            cum_vol = 0.0;
        }

        if candle.volume > 0.0 {
            cum_vol += candle.volume;
            let tp = candle.typical_price();
            mean = Some(match mean {
                None => tp,
                Some(m) => m + (tp - m) * (candle.volume / cum_vol),
            });
        }

        result[i] = mean;
    }

    result
}

impl Indicator for Vwap {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        0
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new("vwap", self.name.clone(), vwap(candles))]
    }
}
