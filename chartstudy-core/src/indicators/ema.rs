//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[t] = alpha * close[t] + (1 - alpha) * EMA[t-1], alpha = 2/(period+1)
//! Seed: EMA[period-1] = plain mean of the first `period` values (never the first close).
//! Lookback: period - 1.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::series::{closes, empty, Series};

#[derive(Debug, Clone)]
pub struct Ema {
    period: usize,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("EMA", "period", period)?;
        Ok(Self {
            period,
            name: format!("EMA({period})"),
        })
    }
}

/// EMA of an arbitrary dense series.
/// Used directly by composed indicators (MACD, Keltner, Chaikin, Force) and,
/// through `apply_on_valid`, by the chained ones (DEMA, TEMA, TRIX).
pub fn ema(values: &[f64], period: usize) -> Series {
    let n = values.len();
    let mut result = empty(n);

    if period == 0 || n < period {
        return result;
    }

    let alpha = 2.0 / (period as f64 + 1.0);

    let seed = values[..period].iter().sum::<f64>() / period as f64;
    result[period - 1] = Some(seed);

    let mut prev = seed;
    for i in period..n {
        let next = values[i] * alpha + prev * (1.0 - alpha);
        result[i] = Some(next);
        prev = next;
    }

    result
}

impl Indicator for Ema {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let values = ema(&closes(candles), self.period);
        vec![NamedSeries::new("ema", self.name.clone(), values)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::sma::sma;
    use crate::indicators::{assert_approx, make_candles, primary, DEFAULT_EPSILON};

    #[test]
    fn ema_period_1_equals_close() {
        let candles = make_candles(&[100.0, 200.0, 300.0]);
        let result = primary(&Ema::new(1).unwrap(), &candles);
        assert_approx(result[0].unwrap(), 100.0, DEFAULT_EPSILON);
        assert_approx(result[1].unwrap(), 200.0, DEFAULT_EPSILON);
        assert_approx(result[2].unwrap(), 300.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_3_known_values() {
        // alpha = 0.5, seed at index 2 = mean(10,11,12) = 11
        // EMA[3] = 0.5*13 + 0.5*11 = 12, EMA[4] = 0.5*14 + 0.5*12 = 13
        let candles = make_candles(&[10.0, 11.0, 12.0, 13.0, 14.0]);
        let result = primary(&Ema::new(3).unwrap(), &candles);

        assert!(result[0].is_none());
        assert!(result[1].is_none());
        assert_approx(result[2].unwrap(), 11.0, DEFAULT_EPSILON);
        assert_approx(result[3].unwrap(), 12.0, DEFAULT_EPSILON);
        assert_approx(result[4].unwrap(), 13.0, DEFAULT_EPSILON);
    }

    #[test]
    fn ema_seed_is_sma_not_first_close() {
        let values = [5.0, 9.0, 1.0, 7.0, 3.0, 8.0];
        let e = ema(&values, 4);
        let s = sma(&values, 4);
        assert_eq!(e[3], s[3]);
        assert_ne!(e[3], Some(values[0]));
    }

    #[test]
    fn ema_too_few_values() {
        assert!(ema(&[1.0, 2.0], 3).iter().all(Option::is_none));
        assert!(ema(&[], 3).is_empty());
    }

    #[test]
    fn ema_lookback() {
        assert_eq!(Ema::new(20).unwrap().lookback(), 19);
        assert_eq!(Ema::new(1).unwrap().lookback(), 0);
    }
}
