//! Factory — converts a kind string plus numeric params into a runtime
//! `Indicator` trait object.
//!
//! Params missing from the map fall back to the catalog default. Every value
//! is validated by the indicator's constructor, so a bad period or multiplier
//! surfaces as `IndicatorError::InvalidParameter` instead of a panic.

use std::collections::BTreeMap;

use crate::catalog::{definition, IndicatorDefinition, IndicatorKind};
use crate::indicator::{period_from_f64, Indicator, IndicatorError};
use crate::indicators::{
    Adx, Aroon, Atr, Bollinger, Cci, Chaikin, Cmo, Dema, Donchian, Ema, ForceIndex, Keltner, Macd,
    Mfi, Obv, ParabolicSar, Roc, Rsi, Sma, Stochastic, Supertrend, Tema, Trix, Vwap, WilliamsR,
    Wma,
};

// ─── Helpers ─────────────────────────────────────────────────────────

struct Params<'a> {
    def: &'static IndicatorDefinition,
    values: &'a BTreeMap<String, f64>,
}

impl Params<'_> {
    /// Named f64 parameter, falling back to the catalog default.
    fn get(&self, name: &str) -> Result<f64, IndicatorError> {
        self.values
            .get(name)
            .copied()
            .or_else(|| self.def.default_param(name))
            .ok_or_else(|| IndicatorError::MissingParameter {
                indicator: self.def.display_name.to_string(),
                name: name.to_string(),
            })
    }

    /// Named period parameter: a finite whole number >= 1.
    fn period(&self, name: &str) -> Result<usize, IndicatorError> {
        period_from_f64(self.def.display_name, name, self.get(name)?)
    }
}

// ─── Indicator factory ───────────────────────────────────────────────

/// Build the indicator for `kind` with `params`.
pub fn create_indicator(
    kind: &str,
    params: &BTreeMap<String, f64>,
) -> Result<Box<dyn Indicator>, IndicatorError> {
    let kind: IndicatorKind = kind
        .parse()
        .map_err(|_| IndicatorError::UnknownIndicatorType(kind.to_string()))?;
    create_indicator_of(kind, params)
}

/// Typed variant of [`create_indicator`].
pub fn create_indicator_of(
    kind: IndicatorKind,
    params: &BTreeMap<String, f64>,
) -> Result<Box<dyn Indicator>, IndicatorError> {
    let p = Params {
        def: definition(kind),
        values: params,
    };

    let indicator: Box<dyn Indicator> = match kind {
        IndicatorKind::Sma => Box::new(Sma::new(p.period("period")?)?),
        IndicatorKind::Ema => Box::new(Ema::new(p.period("period")?)?),
        IndicatorKind::Wma => Box::new(Wma::new(p.period("period")?)?),
        IndicatorKind::Dema => Box::new(Dema::new(p.period("period")?)?),
        IndicatorKind::Tema => Box::new(Tema::new(p.period("period")?)?),
        IndicatorKind::Bollinger => {
            Box::new(Bollinger::new(p.period("period")?, p.get("std_dev")?)?)
        }
        IndicatorKind::Vwap => Box::new(Vwap::new()),
        IndicatorKind::Psar => Box::new(ParabolicSar::new(p.get("step")?, p.get("max")?)?),
        IndicatorKind::Donchian => Box::new(Donchian::new(p.period("period")?)?),
        IndicatorKind::Keltner => {
            Box::new(Keltner::new(p.period("period")?, p.get("multiplier")?)?)
        }
        IndicatorKind::Supertrend => {
            Box::new(Supertrend::new(p.period("period")?, p.get("multiplier")?)?)
        }
        IndicatorKind::Rsi => Box::new(Rsi::new(p.period("period")?)?),
        IndicatorKind::Macd => Box::new(Macd::new(
            p.period("fast")?,
            p.period("slow")?,
            p.period("signal")?,
        )?),
        IndicatorKind::Atr => Box::new(Atr::new(p.period("period")?)?),
        IndicatorKind::Stochastic => Box::new(Stochastic::new(
            p.period("k_period")?,
            p.period("d_period")?,
        )?),
        IndicatorKind::Cci => Box::new(Cci::new(p.period("period")?)?),
        IndicatorKind::WilliamsR => Box::new(WilliamsR::new(p.period("period")?)?),
        IndicatorKind::Adx => Box::new(Adx::new(p.period("period")?)?),
        IndicatorKind::Obv => Box::new(Obv::new()),
        IndicatorKind::Mfi => Box::new(Mfi::new(p.period("period")?)?),
        IndicatorKind::Roc => Box::new(Roc::new(p.period("period")?)?),
        IndicatorKind::Trix => Box::new(Trix::new(p.period("period")?)?),
        IndicatorKind::Chaikin => {
            Box::new(Chaikin::new(p.period("fast")?, p.period("slow")?)?)
        }
        IndicatorKind::Force => Box::new(ForceIndex::new(p.period("period")?)?),
        IndicatorKind::Aroon => Box::new(Aroon::new(p.period("period")?)?),
        IndicatorKind::Cmo => Box::new(Cmo::new(p.period("period")?)?),
    };

    Ok(indicator)
}
