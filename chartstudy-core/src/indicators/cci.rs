//! Commodity Channel Index (CCI).
//!
//! CCI = (tp - SMA(tp)) / (0.015 * MAD(tp)), where tp is the typical price and
//! MAD the mean absolute deviation around the current window mean.
//! A window with zero deviation (every typical price equal) gives 0.
//! Lookback: period - 1.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::series::{empty, typical_prices, Series};

/// Lambert's scaling constant.
const CCI_FACTOR: f64 = 0.015;

#[derive(Debug, Clone)]
pub struct Cci {
    period: usize,
    name: String,
}

impl Cci {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("CCI", "period", period)?;
        Ok(Self {
            period,
            name: format!("CCI({period})"),
        })
    }
}

pub fn cci(candles: &[Candle], period: usize) -> Series {
    let tp = typical_prices(candles);
    let mut result = empty(tp.len());
    if period == 0 || tp.len() < period {
        return result;
    }

    for (i, window) in tp.windows(period).enumerate() {
        let i = i + period - 1;
        // Equal prices have zero deviation; a rounded mean would not.
        if window.iter().all(|&v| v == window[0]) {
            result[i] = Some(0.0);
            continue;
        }
        let mean = window.iter().sum::<f64>() / period as f64;
        let mad = window.iter().map(|v| (v - mean).abs()).sum::<f64>() / period as f64;
        result[i] = Some(if mad == 0.0 {
            0.0
        } else {
            (tp[i] - mean) / (CCI_FACTOR * mad)
        });
    }

    result
}

impl Indicator for Cci {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "cci",
            self.name.clone(),
            cci(candles, self.period),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_ohlc};

    #[test]
    fn cci_known_value() {
        // Typical prices: 10, 12, 14
        let candles = make_ohlc(&[
            (10.0, 11.0, 9.0, 10.0),
            (12.0, 13.0, 11.0, 12.0),
            (14.0, 15.0, 13.0, 14.0),
        ]);
        let out = cci(&candles, 3);
        assert!(out[1].is_none());
        // mean 12, MAD = 4/3, CCI = 2 / (0.015 * 4/3) = 100
        assert_approx(out[2].unwrap(), 100.0, 1e-9);
    }

    #[test]
    fn cci_flat_is_zero() {
        let candles = make_ohlc(&[(50.0, 50.0, 50.0, 50.0); 6]);
        let out = cci(&candles, 3);
        assert!(out[2..].iter().all(|v| *v == Some(0.0)));
    }

    #[test]
    fn cci_is_zero_on_flat_tail_after_varied_history() {
        let mut data: Vec<(f64, f64, f64, f64)> = (0..20)
            .map(|i| {
                let c = 100.0 + ((i * 7919) % 1000) as f64 / 97.0;
                (c - 0.13, c + 0.71, c - 0.37, c)
            })
            .collect();
        data.extend([(104.29, 104.29, 104.29, 104.29); 8]);
        let out = cci(&make_ohlc(&data), 5);
        for (i, v) in out.iter().enumerate().skip(24) {
            assert_eq!(*v, Some(0.0), "bar {i}");
        }
    }

    #[test]
    fn cci_sign_follows_price() {
        let candles = make_ohlc(&[
            (14.0, 15.0, 13.0, 14.0),
            (12.0, 13.0, 11.0, 12.0),
            (10.0, 11.0, 9.0, 10.0),
        ]);
        assert!(cci(&candles, 3)[2].unwrap() < 0.0);
    }
}
