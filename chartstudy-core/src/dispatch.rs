//! Dispatcher — routes a config to its calculation and assembles the result.
//!
//! Stateless: every call recomputes from the full candle history. Failures are
//! local to one config; `compute_all` never aborts because one config fails.

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::lookup;
use crate::config::IndicatorConfig;
use crate::domain::{validate_candles, Candle, CandleError};
use crate::factory::create_indicator_of;
use crate::indicator::IndicatorError;
use crate::result::{assemble, IndicatorResult};

/// Why a config produced no result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeError {
    #[error("no candles to compute on")]
    EmptyCandles,
    #[error("unknown indicator type: {0}")]
    UnknownIndicatorType(String),
    #[error(transparent)]
    InvalidParameter(IndicatorError),
    #[error("invalid candles: {0}")]
    InvalidCandles(#[from] CandleError),
}

impl From<IndicatorError> for ComputeError {
    fn from(err: IndicatorError) -> Self {
        match err {
            IndicatorError::UnknownIndicatorType(kind) => Self::UnknownIndicatorType(kind),
            other => Self::InvalidParameter(other),
        }
    }
}

/// Compute one config, reporting why when nothing can be produced.
pub fn try_compute(
    config: &IndicatorConfig,
    candles: &[Candle],
) -> Result<IndicatorResult, ComputeError> {
    if candles.is_empty() {
        return Err(ComputeError::EmptyCandles);
    }
    let def = lookup(&config.kind)
        .ok_or_else(|| ComputeError::UnknownIndicatorType(config.kind.clone()))?;
    validate_candles(candles)?;

    let indicator = create_indicator_of(def.kind, &config.effective_params())?;
    let series = indicator.compute(candles);

    debug!(
        kind = %config.kind,
        id = %config.id,
        candles = candles.len(),
        lines = series.len(),
        "computed {}",
        indicator.name()
    );

    Ok(assemble(config, def, candles, series))
}

/// Compute one config. Absent when the candles are empty or invalid, the kind
/// is unknown, or a parameter is invalid; the reason is logged.
pub fn compute(config: &IndicatorConfig, candles: &[Candle]) -> Option<IndicatorResult> {
    match try_compute(config, candles) {
        Ok(result) => Some(result),
        Err(err) => {
            warn!(kind = %config.kind, id = %config.id, "skipping indicator: {err}");
            None
        }
    }
}

/// Compute every config in parallel over the shared candle slice.
/// Output order matches `configs`; invisible configs are computed too.
pub fn compute_all(configs: &[IndicatorConfig], candles: &[Candle]) -> Vec<Option<IndicatorResult>> {
    configs
        .par_iter()
        .map(|config| compute(config, candles))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigFactory, ConfigPatch};
    use crate::indicators::make_candles;
    use std::collections::BTreeMap;

    fn rising(n: usize) -> Vec<Candle> {
        make_candles(&(0..n).map(|i| 100.0 + i as f64).collect::<Vec<_>>())
    }

    #[test]
    fn empty_candles_is_absent() {
        let cfg = ConfigFactory::default().create("sma", None).unwrap();
        assert!(compute(&cfg, &[]).is_none());
        assert_eq!(try_compute(&cfg, &[]), Err(ComputeError::EmptyCandles));
    }

    #[test]
    fn unknown_kind_is_absent() {
        let mut cfg = ConfigFactory::default().create("sma", None).unwrap();
        cfg.kind = "ichimoku".to_string();
        assert_eq!(
            try_compute(&cfg, &rising(5)),
            Err(ComputeError::UnknownIndicatorType("ichimoku".to_string()))
        );
    }

    #[test]
    fn invalid_param_is_absent() {
        let mut cfg = ConfigFactory::default().create("rsi", None).unwrap();
        cfg.apply(ConfigPatch::new().param("period", 0.0));
        assert!(matches!(
            try_compute(&cfg, &rising(30)),
            Err(ComputeError::InvalidParameter(_))
        ));
        assert!(compute(&cfg, &rising(30)).is_none());
    }

    #[test]
    fn unordered_candles_are_absent() {
        let cfg = ConfigFactory::default().create("sma", None).unwrap();
        let mut candles = rising(5);
        candles.swap(1, 2);
        assert!(matches!(
            try_compute(&cfg, &candles),
            Err(ComputeError::InvalidCandles(_))
        ));
    }

    #[test]
    fn sma_result_shape() {
        let overrides = BTreeMap::from([("period".to_string(), 20.0)]);
        let cfg = ConfigFactory::default().create("sma", Some(&overrides)).unwrap();
        let candles = rising(30);
        let result = compute(&cfg, &candles).unwrap();

        assert_eq!(result.kind, "sma");
        assert!(result.overlay);
        assert_eq!(result.lines.len(), 1);
        assert_eq!(result.lines[0].label, "SMA(20)");
        assert_eq!(result.lines[0].color, cfg.color);
        assert_eq!(result.lines[0].data.len(), 11);
        assert_eq!(result.lines[0].data[0].time, candles[19].time);
        assert_eq!(result.lines[0].data[0].value, 109.5);
    }

    #[test]
    fn macd_result_lines() {
        let cfg = ConfigFactory::default().create("macd", None).unwrap();
        let result = compute(&cfg, &rising(60)).unwrap();
        let labels: Vec<_> = result.lines.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["MACD(12,26,9)", "Signal(9)", "Histogram"]);
        assert!(!result.overlay);
    }

    #[test]
    fn too_short_history_gives_empty_lines() {
        let cfg = ConfigFactory::default().create("sma", None).unwrap();
        let result = compute(&cfg, &rising(5)).unwrap();
        assert!(result.lines[0].data.is_empty());
    }

    #[test]
    fn huge_periods_give_empty_lines_without_allocating() {
        let factory = ConfigFactory::default();
        let candles = rising(30);
        for def in crate::catalog::list_definitions() {
            let huge: BTreeMap<String, f64> = def
                .default_params
                .iter()
                .filter(|(name, _)| {
                    matches!(*name, "period" | "k_period" | "d_period" | "fast" | "slow" | "signal")
                })
                .map(|(name, _)| (name.to_string(), 4e9))
                .collect();
            if huge.is_empty() {
                continue;
            }
            let cfg = factory.create(def.kind.as_str(), Some(&huge)).unwrap();
            let result = compute(&cfg, &candles);
            assert!(result.is_some(), "{} rejected a valid period", def.kind);
            for line in result.unwrap().lines {
                assert!(line.data.is_empty(), "{} emitted {} points", line.label, line.data.len());
            }
        }
    }

    #[test]
    fn compute_all_preserves_order_and_isolates_failures() {
        let factory = ConfigFactory::default();
        let mut bad = factory.create("ema", None).unwrap();
        bad.apply(ConfigPatch::new().param("period", -1.0));
        let mut hidden = factory.create("rsi", None).unwrap();
        hidden.apply(ConfigPatch::new().visible(false));
        let configs = vec![
            factory.create("sma", None).unwrap(),
            bad,
            hidden,
            factory.create("obv", None).unwrap(),
        ];

        let results = compute_all(&configs, &rising(40));
        assert_eq!(results.len(), 4);
        assert_eq!(results[0].as_ref().map(|r| r.id.clone()), Some(configs[0].id.clone()));
        assert!(results[1].is_none());
        assert_eq!(results[2].as_ref().map(|r| r.kind.as_str()), Some("rsi"));
        assert_eq!(results[3].as_ref().map(|r| r.id.clone()), Some(configs[3].id.clone()));
    }
}
