//! MACD — Moving Average Convergence/Divergence.
//!
//! - MACD line: EMA(close, fast) - EMA(close, slow), from index slow-1
//!   (or fast-1 if fast is the longer period).
//! - Signal: EMA(signal) computed over the MACD line's valid subsequence and
//!   placed back at the original bar indices.
//! - Histogram: MACD - signal, wherever the signal exists.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::ema::ema;
use crate::series::{apply_on_valid, closes, zip_with, Series};

#[derive(Debug, Clone)]
pub struct Macd {
    fast: usize,
    slow: usize,
    signal: usize,
    name: String,
}

/// The three MACD output lines.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Series,
    pub signal: Series,
    pub histogram: Series,
}

impl Macd {
    pub fn new(fast: usize, slow: usize, signal: usize) -> Result<Self, IndicatorError> {
        let fast = check_period("MACD", "fast", fast)?;
        let slow = check_period("MACD", "slow", slow)?;
        let signal = check_period("MACD", "signal", signal)?;
        Ok(Self {
            fast,
            slow,
            signal,
            name: format!("MACD({fast},{slow},{signal})"),
        })
    }
}

pub fn macd(values: &[f64], fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let fast_ema = ema(values, fast);
    let slow_ema = ema(values, slow);
    let macd = zip_with(&fast_ema, &slow_ema, |f, s| f - s);
    let signal = apply_on_valid(&macd, |v| ema(v, signal));
    let histogram = zip_with(&macd, &signal, |m, s| m - s);
    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

impl Indicator for Macd {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.fast.max(self.slow) - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let out = macd(&closes(candles), self.fast, self.slow, self.signal);
        vec![
            NamedSeries::new("macd", self.name.clone(), out.macd),
            NamedSeries::new("signal", format!("Signal({})", self.signal), out.signal),
            NamedSeries::new("histogram", "Histogram", out.histogram),
        ]
    }
}
