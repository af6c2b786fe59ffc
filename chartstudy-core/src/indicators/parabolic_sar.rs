//! Parabolic SAR — Wilder's acceleration factor system.
//!
//! Inherently sequential/stateful: maintains direction, extreme point (EP),
//! and acceleration factor (AF). AF starts at `step`, grows by `step` on each
//! new EP and is capped at `max`.
//!
//! Seed: uptrend if close[1] >= close[0]; SAR = low[0] (up) or high[0] (down),
//! EP = high[1] (up) or low[1] (down).
//! Lookback: 1 (needs at least 2 candles to start).

use crate::domain::Candle;
use crate::indicator::{check_positive, Indicator, IndicatorError, NamedSeries};
use crate::series::{empty, Series};

#[derive(Debug, Clone)]
pub struct ParabolicSar {
    step: f64,
    max: f64,
    name: String,
}

impl ParabolicSar {
    pub fn new(step: f64, max: f64) -> Result<Self, IndicatorError> {
        let step = check_positive("PSAR", "step", step)?;
        if !max.is_finite() || max < step {
            return Err(IndicatorError::invalid("PSAR", "max", max, "must be >= step"));
        }
        Ok(Self {
            step,
            max,
            name: format!("PSAR({step},{max})"),
        })
    }
}

pub fn parabolic_sar(candles: &[Candle], step: f64, max: f64) -> Series {
    let n = candles.len();
    let mut result = empty(n);

    if n < 2 {
        return result;
    }

    let mut is_long = candles[1].close >= candles[0].close;
    let mut af = step;
    let (mut sar, mut ep) = if is_long {
        (candles[0].low, candles[1].high)
    } else {
        (candles[0].high, candles[1].low)
    };

    result[1] = Some(sar);

    for i in 2..n {
        let bar = &candles[i];
        let mut next = sar + af * (ep - sar);

        if is_long {
            // Never above the two previous lows.
            next = next.min(candles[i - 1].low).min(candles[i - 2].low);

            if bar.low < next {
                is_long = false;
                next = ep;
                ep = bar.low;
                af = step;
            } else if bar.high > ep {
                ep = bar.high;
                af = (af + step).min(max);
            }
        } else {
            // Never below the two previous highs.
            next = next.max(candles[i - 1].high).max(candles[i - 2].high);

            if bar.high > next {
                is_long = true;
                next = ep;
                ep = bar.high;
                af = step;
            } else if bar.low < ep {
                ep = bar.low;
                af = (af + step).min(max);
            }
        }

        sar = next;
        result[i] = Some(sar);
    }

    result
}

impl Indicator for ParabolicSar {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "psar",
            self.name.clone(),
            parabolic_sar(candles, self.step, self.max),
        )]
    }
}
