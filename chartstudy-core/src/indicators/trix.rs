//! TRIX — one-bar percentage change of a triple-smoothed EMA.
//!
//! E1 = EMA(close), E2 = EMA(E1), E3 = EMA(E2), each stage run over the
//! previous stage's valid subsequence. TRIX = 100 * (E3[t] - E3[t-1]) / E3[t-1].
//! A zero previous E3 gives 0.
//! Lookback: 3 * period - 2.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::ema::ema;
use crate::series::{apply_on_valid, closes, empty, Series};

#[derive(Debug, Clone)]
pub struct Trix {
    period: usize,
    name: String,
}

impl Trix {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("TRIX", "period", period)?;
        Ok(Self {
            period,
            name: format!("TRIX({period})"),
        })
    }
}

pub fn trix(values: &[f64], period: usize) -> Series {
    let e1 = ema(values, period);
    let e2 = apply_on_valid(&e1, |v| ema(v, period));
    let e3 = apply_on_valid(&e2, |v| ema(v, period));

    apply_on_valid(&e3, |v| {
        let mut out = empty(v.len());
        for i in 1..v.len() {
            let prev = v[i - 1];
            out[i] = Some(if prev == 0.0 {
                0.0
            } else {
                100.0 * (v[i] - prev) / prev
            });
        }
        out
    })
}

impl Indicator for Trix {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        3 * self.period - 2
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "trix",
            self.name.clone(),
            trix(&closes(candles), self.period),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::assert_approx;
    use crate::series::first_valid;

    fn ramp(n: usize) -> Vec<f64> {
        (0..n).map(|i| 50.0 + i as f64 * 0.5).collect()
    }

    #[test]
    fn trix_first_index() {
        let out = trix(&ramp(30), 4);
        assert_eq!(first_valid(&out), Some(10));
    }

    #[test]
    fn trix_matches_triple_ema() {
        let values = ramp(25);
        let out = trix(&values, 3);
        let e1: Vec<f64> = ema(&values, 3).into_iter().flatten().collect();
        let e2: Vec<f64> = ema(&e1, 3).into_iter().flatten().collect();
        let e3: Vec<f64> = ema(&e2, 3).into_iter().flatten().collect();
        // e3[0] sits at bar 6, so bar 7 is the first change
        let expected = 100.0 * (e3[1] - e3[0]) / e3[0];
        assert_approx(out[7].unwrap(), expected, 1e-9);
    }

    #[test]
    fn trix_constant_is_zero() {
        let out = trix(&[42.0; 20], 3);
        for v in out.iter().flatten() {
            assert_approx(*v, 0.0, 1e-12);
        }
    }

    #[test]
    fn trix_zero_base_is_zero() {
        let out = trix(&[0.0, 0.0, 0.0, 1.0], 1);
        assert_eq!(out[1], Some(0.0));
        assert_eq!(out[3], Some(0.0));
    }
}
