//! ChartStudy Core — technical indicator engine for price charts.
//!
//! Turns an ascending OHLCV candle history into named indicator lines and
//! envelope bands:
//! - Domain types (candles, config ids and id sources)
//! - Indicator catalog: 26 families with defaults, colors and line layout
//! - Config factory and partial config patches
//! - Calculation core: one pure function per family over `Option<f64>` series
//! - Result assembler (sparse points, labels, colors, bands) and dispatcher
//!
//! ```
//! use chartstudy_core::{compute, Candle, ConfigFactory};
//!
//! let candles: Vec<Candle> = (0..30)
//!     .map(|i| {
//!         let close = 100.0 + i as f64;
//!         Candle::new(1_704_153_600 + i * 86_400, close, close + 1.0, close - 1.0, close, 1_000.0)
//!     })
//!     .collect();
//!
//! let config = ConfigFactory::default().create("sma", None).unwrap();
//! let result = compute(&config, &candles).unwrap();
//! assert_eq!(result.lines[0].label, "SMA(20)");
//! assert_eq!(result.lines[0].data[0].value, 109.5);
//! ```

pub mod catalog;
pub mod config;
pub mod dispatch;
pub mod domain;
pub mod factory;
pub mod indicator;
pub mod indicators;
pub mod result;
pub mod series;

pub use catalog::{
    definitions_in, list_definitions, lookup, Category, IndicatorDefinition, IndicatorKind,
};
pub use config::{ConfigError, ConfigFactory, ConfigPatch, IndicatorConfig};
pub use dispatch::{compute, compute_all, try_compute, ComputeError};
pub use domain::{
    validate_candles, Candle, CandleError, IdSource, IndicatorId, SeededIds, SequentialIds,
};
pub use factory::create_indicator;
pub use indicator::{Indicator, IndicatorError, NamedSeries};
pub use result::{Band, IndicatorLine, IndicatorPoint, IndicatorResult};
pub use series::Series;
