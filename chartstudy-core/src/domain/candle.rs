//! Candle — the fundamental market data unit.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// OHLCV bar for one time bucket.
///
/// `time` is the bucket's opening instant in whole seconds since the Unix epoch (UTC).
/// Candle sequences handed to the engine must be strictly ascending by `time`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Candle {
    pub fn new(time: i64, open: f64, high: f64, low: f64, close: f64, volume: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// (high + low + close) / 3
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// (high + low) / 2
    pub fn hl2(&self) -> f64 {
        (self.high + self.low) / 2.0
    }

    /// UTC calendar day the candle opens on. `None` if `time` is outside chrono's range.
    pub fn utc_date(&self) -> Option<NaiveDate> {
        DateTime::<Utc>::from_timestamp(self.time, 0).map(|dt| dt.date_naive())
    }

    /// Returns true if every price and the volume is finite.
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }

    /// Basic OHLCV sanity check: finite fields, high >= low, open/close inside
    /// the range, non-negative volume.
    pub fn is_sane(&self) -> bool {
        if !self.is_finite() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.volume >= 0.0
    }
}

/// Reasons a candle sequence cannot be fed to the engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CandleError {
    #[error("candle {index}: time {time} does not follow previous time {previous}")]
    Unordered { index: usize, previous: i64, time: i64 },
    #[error("candle {index}: non-finite price or volume")]
    NonFinite { index: usize },
    #[error("candle {index}: negative volume {volume}")]
    NegativeVolume { index: usize, volume: f64 },
}

/// Check the engine's input contract: strictly increasing times, finite
/// fields, non-negative volume. Reports the first offending index.
pub fn validate_candles(candles: &[Candle]) -> Result<(), CandleError> {
    for (index, candle) in candles.iter().enumerate() {
        if !candle.is_finite() {
            return Err(CandleError::NonFinite { index });
        }
        if candle.volume < 0.0 {
            return Err(CandleError::NegativeVolume {
                index,
                volume: candle.volume,
            });
        }
        if index > 0 {
            let previous = candles[index - 1].time;
            if candle.time <= previous {
                return Err(CandleError::Unordered {
                    index,
                    previous,
                    time: candle.time,
                });
            }
        }
    }
    Ok(())
}
