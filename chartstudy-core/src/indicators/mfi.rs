//! Money Flow Index (MFI).
//!
//! Raw money flow = typical price * volume. A bar's flow is positive when its
//! typical price rises over the previous bar's, negative when it falls.
//! MFI = 100 - 100 / (1 + positive / negative) over the last `period` flows.
//! No negative flow in the window gives 100.
//! Lookback: period.

use crate::domain::Candle;
use crate::indicator::{check_period, Indicator, IndicatorError, NamedSeries};
use crate::indicators::window::RunningSum;
use crate::series::{empty, Series};

#[derive(Debug, Clone)]
pub struct Mfi {
    period: usize,
    name: String,
}

impl Mfi {
    pub fn new(period: usize) -> Result<Self, IndicatorError> {
        let period = check_period("MFI", "period", period)?;
        Ok(Self {
            period,
            name: format!("MFI({period})"),
        })
    }
}

pub fn mfi(candles: &[Candle], period: usize) -> Series {
    let mut result = empty(candles.len());
    let mut positive = RunningSum::new(period);
    let mut negative = RunningSum::new(period);

    for i in 1..candles.len() {
        let tp = candles[i].typical_price();
        let prev_tp = candles[i - 1].typical_price();
        let flow = tp * candles[i].volume;

        if tp > prev_tp {
            positive.push(flow);
            negative.push(0.0);
        } else if tp < prev_tp {
            positive.push(0.0);
            negative.push(flow);
        } else {
            positive.push(0.0);
            negative.push(0.0);
        }

        if !positive.is_full() {
            continue;
        }
        let (pos, neg) = (positive.sum().max(0.0), negative.sum().max(0.0));
        result[i] = Some(if neg == 0.0 {
            100.0
        } else {
            100.0 - 100.0 / (1.0 + pos / neg)
        });
    }

    result
}

impl Indicator for Mfi {
    fn name(&self) -> &str {
        &self.name
    }

    fn lookback(&self) -> usize {
        self.period
    }

    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries> {
        vec![NamedSeries::new(
            "mfi",
            self.name.clone(),
            mfi(candles, self.period),
        )]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, make_ohlc};

    #[test]
    fn mfi_mixed_flows() {
        // Typical prices: 10, 12, 11, 13 with volume 1000
        let candles = make_ohlc(&[
            (10.0, 11.0, 9.0, 10.0),
            (12.0, 13.0, 11.0, 12.0),
            (11.0, 12.0, 10.0, 11.0),
            (13.0, 14.0, 12.0, 13.0),
        ]);
        let out = mfi(&candles, 2);
        assert!(out[..2].iter().all(Option::is_none));
        // Bars 1..=2: +12000, -11000
        let expected = 100.0 - 100.0 / (1.0 + 12_000.0 / 11_000.0);
        assert_approx(out[2].unwrap(), expected, 1e-9);
        // Bars 2..=3: -11000, +13000
        let expected = 100.0 - 100.0 / (1.0 + 13_000.0 / 11_000.0);
        assert_approx(out[3].unwrap(), expected, 1e-9);
    }

    #[test]
    fn mfi_no_negative_flow_is_100() {
        let candles = make_ohlc(&[
            (10.0, 11.0, 9.0, 10.0),
            (12.0, 13.0, 11.0, 12.0),
            (13.0, 14.0, 12.0, 13.0),
        ]);
        assert_eq!(mfi(&candles, 2)[2], Some(100.0));
    }

    #[test]
    fn mfi_bounds() {
        let candles = make_ohlc(&[
            (10.0, 15.0, 5.0, 12.0),
            (12.0, 14.0, 8.0, 10.0),
            (10.0, 16.0, 7.0, 13.0),
            (13.0, 13.5, 9.0, 11.0),
            (11.0, 17.0, 6.0, 14.0),
        ]);
        for v in mfi(&candles, 2).iter().flatten() {
            assert!((0.0..=100.0).contains(v));
        }
    }

    #[test]
    fn mfi_flat_zero_volume_tail_is_100() {
        let mut candles = make_ohlc(
            &(0..20)
                .map(|i| {
                    let c = 100.0 + ((i * 7919) % 1000) as f64 / 97.0;
                    (c - 0.13, c + 0.71, c - 0.37, c)
                })
                .collect::<Vec<_>>(),
        );
        for (i, c) in candles.iter_mut().enumerate() {
            c.volume = 1_000.0 + (i * 37) as f64 * 1.3;
        }
        let last = candles[candles.len() - 1];
        for k in 1..=8 {
            candles.push(Candle::new(last.time + k * 86_400, 104.29, 104.29, 104.29, 104.29, 0.0));
        }
        let out = mfi(&candles, 5);
        for (i, v) in out.iter().enumerate().skip(26) {
            assert_eq!(*v, Some(100.0), "bar {i}");
        }
    }
}
