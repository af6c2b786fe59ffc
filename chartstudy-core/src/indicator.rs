//! Indicator trait, named output series, and parameter validation.
//!
//! Indicators are pure functions: candle history in, one or more sparse series
//! out. No state survives a `compute` call.

use crate::domain::Candle;
use crate::series::Series;
use thiserror::Error;

/// Errors raised while building an indicator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IndicatorError {
    #[error("unknown indicator type: {0}")]
    UnknownIndicatorType(String),
    #[error("{indicator}: parameter '{name}' = {value} is invalid ({reason})")]
    InvalidParameter {
        indicator: String,
        name: String,
        value: f64,
        reason: &'static str,
    },
    #[error("{indicator}: missing parameter '{name}'")]
    MissingParameter { indicator: String, name: String },
}

impl IndicatorError {
    pub fn invalid(indicator: &str, name: &str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            indicator: indicator.to_string(),
            name: name.to_string(),
            value,
            reason,
        }
    }
}

/// One output line of an indicator before it is placed on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    /// Stable machine key, e.g. `"upper"`, `"signal"`.
    pub key: &'static str,
    /// Human label with resolved params embedded, e.g. `"SMA(20)"`.
    pub label: String,
    pub values: Series,
}

impl NamedSeries {
    pub fn new(key: &'static str, label: impl Into<String>, values: Series) -> Self {
        Self {
            key,
            label: label.into(),
            values,
        }
    }
}

/// Trait for indicators.
///
/// `compute` takes the full ascending candle history and returns every output
/// line, each with exactly `candles.len()` slots. Slots before warm-up are
/// `None`; populated slots are always finite.
///
/// # Look-ahead guard
/// No value at bar t may depend on candles after t. Every indicator must pass
/// the truncated-vs-full history test.
pub trait Indicator: Send + Sync {
    /// Human-readable name with params, e.g. `"SMA(20)"`.
    fn name(&self) -> &str;

    /// Number of leading bars with no value on the indicator's primary line.
    fn lookback(&self) -> usize;

    /// Compute all output lines for the candle series.
    fn compute(&self, candles: &[Candle]) -> Vec<NamedSeries>;
}

// ─── Parameter checks ────────────────────────────────────────────────

/// A lookback length: finite, whole, >= 1.
pub fn check_period(indicator: &str, name: &str, value: usize) -> Result<usize, IndicatorError> {
    if value == 0 {
        return Err(IndicatorError::invalid(indicator, name, 0.0, "must be >= 1"));
    }
    Ok(value)
}

/// Convert a raw numeric param into a period.
pub fn period_from_f64(indicator: &str, name: &str, value: f64) -> Result<usize, IndicatorError> {
    if !value.is_finite() {
        return Err(IndicatorError::invalid(indicator, name, value, "must be finite"));
    }
    if value.fract() != 0.0 {
        return Err(IndicatorError::invalid(
            indicator,
            name,
            value,
            "must be a whole number",
        ));
    }
    if value < 1.0 {
        return Err(IndicatorError::invalid(indicator, name, value, "must be >= 1"));
    }
    if value > u32::MAX as f64 {
        return Err(IndicatorError::invalid(indicator, name, value, "is too large"));
    }
    Ok(value as usize)
}

/// Multipliers and deviation factors: finite, >= 0.
pub fn check_non_negative(indicator: &str, name: &str, value: f64) -> Result<f64, IndicatorError> {
    if !value.is_finite() {
        return Err(IndicatorError::invalid(indicator, name, value, "must be finite"));
    }
    if value < 0.0 {
        return Err(IndicatorError::invalid(indicator, name, value, "must be >= 0"));
    }
    Ok(value)
}

/// Strictly positive finite value.
pub fn check_positive(indicator: &str, name: &str, value: f64) -> Result<f64, IndicatorError> {
    if !value.is_finite() {
        return Err(IndicatorError::invalid(indicator, name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(IndicatorError::invalid(indicator, name, value, "must be > 0"));
    }
    Ok(value)
}
