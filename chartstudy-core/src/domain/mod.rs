//! Domain types: candles and config identifiers.

pub mod candle;
pub mod ids;

pub use candle::{validate_candles, Candle, CandleError};
pub use ids::{IdSource, IndicatorId, SeededIds, SequentialIds};
