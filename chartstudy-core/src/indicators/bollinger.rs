//! Bollinger Bands — moving average +/- standard deviation multiplier.
//!
//! - Middle: SMA(close, period)
//! - Upper: middle + std_dev * stddev(close, period)
//! - Lower: middle - std_dev * stddev(close, period)
//!
//! Uses population stddev (divide by N), measured around the window mean in a
//! second pass so flat windows give exactly zero width.
//! Lookback: period - 1.

use crate::domain::Candle;
use crate::indicator::{check_non_negative, check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::sma::sma;
use crate::series::{closes, empty, Series};

#[derive(Debug, Clone)]
pub struct Bollinger {
    period: usize,
    std_dev: f64,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BollingerSeries {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

impl Bollinger {
    pub fn new(period: usize, std_dev: f64) -> Result<Self, IndicatorError> {
        let period = check_period("Bollinger", "period", period)?;
        let std_dev = check_non_negative("Bollinger", "std_dev", std_dev)?;
        Ok(Self {
            period,
            std_dev,
            name: format!("BB({period},{std_dev})"),
        })
    }
}

pub fn bollinger(values: &[f64], period: usize, std_dev: f64) -> BollingerSeries {
    let n = values.len();
    let middle = sma(values, period);
    let mut upper = empty(n);
    let mut lower = empty(n);

    for (i, mid) in middle.iter().enumerate() {
        let Some(mean) = *mid else { continue };
        let window = &values[i + 1 - period..=i];
        let variance = window
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / period as f64;
        let width = std_dev * variance.max(0.0).sqrt();
        upper[i] = Some(mean + width);
        lower[i] = Some(mean - width);
    }

    BollingerSeries {
        upper,
        middle,
        lower,
    }
}

impl Indicator for Bollinger {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let out = bollinger(&closes(candles), self.period, self.std_dev);
        vec![
            NamedSeries::new("middle", self.name.clone(), out.middle),
            NamedSeries::new("upper", format!("{} Upper", self.name), out.upper),
            NamedSeries::new("lower", format!("{} Lower", self.name), out.lower),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn bollinger_middle_is_sma() {
        let out = bollinger(&[10.0, 11.0, 12.0, 13.0, 14.0], 3, 2.0);
        assert!(out.middle[1].is_none());
        assert_approx(out.middle[2].unwrap(), 11.0, DEFAULT_EPSILON);
        assert_approx(out.middle[3].unwrap(), 12.0, DEFAULT_EPSILON);
    }

    #[test]
    fn bollinger_population_stddev() {
        // Window [10, 11, 12]: population variance = 2/3
        let out = bollinger(&[10.0, 11.0, 12.0], 3, 2.0);
        let sd = (2.0_f64 / 3.0).sqrt();
        assert_approx(out.upper[2].unwrap(), 11.0 + 2.0 * sd, DEFAULT_EPSILON);
        assert_approx(out.lower[2].unwrap(), 11.0 - 2.0 * sd, DEFAULT_EPSILON);
    }

    #[test]
    fn bollinger_bands_symmetric_and_ordered() {
        let values = [10.0, 13.0, 9.0, 14.0, 12.0, 8.0, 15.0];
        let out = bollinger(&values, 3, 2.0);
        for i in 2..values.len() {
            let (u, m, l) = (out.upper[i].unwrap(), out.middle[i].unwrap(), out.lower[i].unwrap());
            assert!(l <= m && m <= u);
            assert_approx(u - m, m - l, 1e-9);
        }
    }

    #[test]
    fn bollinger_constant_price_zero_width() {
        let out = bollinger(&[100.0; 4], 3, 2.0);
        assert_eq!(out.upper[2], Some(100.0));
        assert_eq!(out.lower[2], Some(100.0));
    }

    #[test]
    fn bollinger_rejects_negative_multiplier() {
        assert!(Bollinger::new(20, -1.0).is_err());
        assert!(Bollinger::new(0, 2.0).is_err());
    }
}
