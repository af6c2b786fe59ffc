//! ADX — Average Directional Index (Wilder).
//!
//! Steps:
//! 1. Compute TR, +DM and -DM from consecutive bars, starting at bar 1
//! 2. Smooth all three with Wilder smoothing (alpha = 1/period)
//! 3. +DI = 100 * smoothed(+DM) / smoothed(TR), -DI likewise
//! 4. DX = 100 * |+DI - -DI| / (+DI + -DI)
//! 5. ADX = Wilder-smoothed DX over the DX valid subsequence
//!
//! ±DI first appear at bar `period`, ADX at bar `2 * period - 1`.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::atr::{true_range, wilder_smooth};
use crate::series::{apply_on_valid, empty, Series};

#[derive(Debug, Clone)]
pub struct Adx {
    period: usize,
    name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdxSeries {
    pub adx: Series,
    pub plus_di: Series,
    pub minus_di: Series,
}

impl Adx {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("ADX", "period", period)?;
        Ok(Self {
            period,
            name: format!("ADX({period})"),
        })
    }
}

/// Directional movement between two consecutive bars: (+DM, -DM).
fn directional_movement(prev: &Candle, cur: &Candle) -> (f64, f64) {
    let up = cur.high - prev.high;
    let down = prev.low - cur.low;
    let plus = if up > down && up > 0.0 { up } else { 0.0 };
    let minus = if down > up && down > 0.0 { down } else { 0.0 };
    (plus, minus)
}

pub fn adx(candles: &[Candle], period: usize) -> AdxSeries {
    let n = candles.len();
    let mut plus_di = empty(n);
    let mut minus_di = empty(n);
    let mut dx = empty(n);

    if n < 2 {
        return AdxSeries {
            adx: empty(n),
            plus_di,
            minus_di,
        };
    }

    // Everything below is offset by one: slot j describes bar j + 1.
    let tr = &true_range(candles)[1..];
    let (plus_dm, minus_dm): (Vec<f64>, Vec<f64>) = candles
        .windows(2)
        .map(|pair| directional_movement(&pair[0], &pair[1]))
        .unzip();

    let smooth_tr = wilder_smooth(tr, period);
    let smooth_plus = wilder_smooth(&plus_dm, period);
    let smooth_minus = wilder_smooth(&minus_dm, period);

    for j in 0..tr.len() {
        let (Some(str_), Some(sp), Some(sm)) = (smooth_tr[j], smooth_plus[j], smooth_minus[j])
        else {
            continue;
        };
        let (pdi, mdi) = if str_ == 0.0 {
            (0.0, 0.0)
        } else {
            (100.0 * sp / str_, 100.0 * sm / str_)
        };
        let di_sum = pdi + mdi;

        let i = j + 1;
        plus_di[i] = Some(pdi);
        minus_di[i] = Some(mdi);
        dx[i] = Some(if di_sum == 0.0 {
            0.0
        } else {
            100.0 * (pdi - mdi).abs() / di_sum
        });
    }

    let adx = apply_on_valid(&dx, |values| wilder_smooth(values, period));

    AdxSeries {
        adx,
        plus_di,
        minus_di,
    }
}

impl Indicator for Adx {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        2 * self.period - 1
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        let out = adx(candles, self.period);
        vec![
            NamedSeries::new("adx", self.name.clone(), out.adx),
            NamedSeries::new("plus_di", "+DI", out.plus_di),
            NamedSeries::new("minus_di", "-DI", out.minus_di),
        ]
    }
}
