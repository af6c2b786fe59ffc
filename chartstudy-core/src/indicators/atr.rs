//! Average True Range (ATR).
//!
//! True Range: max(high-low, |high-prev_close|, |low-prev_close|); the first
//! bar has no previous close, so TR[0] = high - low.
//! ATR uses Wilder smoothing seeded by the mean of the first `period` TRs.
//! Lookback: period - 1.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::series::{empty, Series};

#[derive(Debug, Clone)]
pub struct Atr {
    period: usize,
    name: String,
}

impl Atr {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("ATR", "period", period)?;
        Ok(Self {
            period,
            name: format!("ATR({period})"),
        })
    }
}

/// True Range series. TR[0] = high[0] - low[0].
pub fn true_range(candles: &[Candle]) -> Vec<f64> {
    candles
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let range = c.high - c.low;
            if i == 0 {
                return range;
            }
            let pc = candles[i - 1].close;
            range.max((c.high - pc).abs()).max((c.low - pc).abs())
        })
        .collect()
}

/// Wilder smoothing (alpha = 1/period) of a dense series.
/// Seed: mean of the first `period` values, placed at index period-1.
pub fn wilder_smooth(values: &[f64], period: usize) -> Series {
    let n = values.len();
    let mut result = empty(n);

    if period == 0 || n < period {
        return result;
    }

    let p = period as f64;
    let seed = values[..period].iter().sum::<f64>() / p;
    result[period - 1] = Some(seed);

    let mut prev = seed;
    for i in period..n {
        let smoothed = (prev * (p - 1.0) + values[i]) / p;
        result[i] = Some(smoothed);
        prev = smoothed;
    }

    result
}

pub fn atr(candles: &[Candle], period: usize) -> Series {
    wilder_smooth(&true_range(candles), period)
}

impl Indicator for Atr {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "atr",
            self.name.clone(),
            atr(candles, self.period),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_ohlc, DEFAULT_EPSILON};

    #[test]
    fn true_range_basic() {
        let candles = make_ohlc(&[
            (100.0, 105.0, 95.0, 102.0),  // TR = 105-95 = 10
            (102.0, 108.0, 100.0, 106.0), // TR = max(8, |108-102|, |100-102|) = 8
            (106.0, 107.0, 98.0, 99.0),   // TR = max(9, |107-106|, |98-106|) = 9
        ]);
        let tr = true_range(&candles);
        assert_approx(tr[0], 10.0, DEFAULT_EPSILON);
        assert_approx(tr[1], 8.0, DEFAULT_EPSILON);
        assert_approx(tr[2], 9.0, DEFAULT_EPSILON);
    }

    #[test]
    fn true_range_gap_up() {
        let candles = make_ohlc(&[
            (98.0, 102.0, 97.0, 100.0),
            (110.0, 115.0, 108.0, 112.0), // TR = max(7, 15, 8) = 15
        ]);
        assert_approx(true_range(&candles)[1], 15.0, DEFAULT_EPSILON);
    }

    #[test]
    fn atr_period_3() {
        let candles = make_ohlc(&[
            (100.0, 105.0, 95.0, 102.0),  // TR = 10
            (102.0, 108.0, 100.0, 106.0), // TR = 8
            (106.0, 107.0, 98.0, 99.0),   // TR = 9
            (99.0, 103.0, 97.0, 101.0),   // TR = 6
            (101.0, 106.0, 100.0, 105.0), // TR = 6
        ]);
        let result = atr(&candles, 3);

        assert!(result[0].is_none());
        assert!(result[1].is_none());
        // Seed: mean(10, 8, 9) = 9
        assert_approx(result[2].unwrap(), 9.0, DEFAULT_EPSILON);
        // (9*2 + 6)/3 = 8
        assert_approx(result[3].unwrap(), 8.0, DEFAULT_EPSILON);
        // (8*2 + 6)/3 = 22/3
        assert_approx(result[4].unwrap(), 22.0 / 3.0, DEFAULT_EPSILON);
    }

    #[test]
    fn atr_never_negative() {
        let candles = make_ohlc(&[
            (10.0, 10.0, 10.0, 10.0),
            (10.0, 12.0, 9.0, 11.0),
            (11.0, 11.0, 11.0, 11.0),
            (11.0, 15.0, 8.0, 9.0),
        ]);
        for v in atr(&candles, 2).iter().flatten() {
            assert!(*v >= 0.0);
        }
    }

    #[test]
    fn atr_lookback() {
        assert_eq!(Atr::new(14).unwrap().lookback(), 13);
    }
}
