//! Result assembly — wraps raw indicator series into labeled, colored lines
//! and envelope bands ready for a chart renderer.
//!
//! Lines are sparse: a point exists only where the series has a value, so
//! warm-up bars are omitted rather than emitted as zero or NaN.

use serde::{Deserialize, Serialize};

use crate::catalog::IndicatorDefinition;
use crate::config::IndicatorConfig;
use crate::domain::{Candle, IndicatorId};
use crate::indicator::NamedSeries;

/// Fill opacity of envelope bands.
pub const BAND_FILL_OPACITY: f64 = 0.1;

/// Color for a line the catalog does not describe.
const FALLBACK_LINE_COLOR: &str = "#787B86";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub time: i64,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorLine {
    pub key: String,
    pub label: String,
    pub color: String,
    pub data: Vec<IndicatorPoint>,
}

/// Filled region between two lines of the same result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Band {
    pub upper_line: String,
    pub lower_line: String,
    pub color: String,
    pub fill_opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorResult {
    pub id: IndicatorId,
    pub kind: String,
    pub overlay: bool,
    pub lines: Vec<IndicatorLine>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub bands: Vec<Band>,
}

impl IndicatorResult {
    pub fn line(&self, key: &str) -> Option<&IndicatorLine> {
        self.lines.iter().find(|l| l.key == key)
    }

    /// BLAKE3 hex digest of the canonical JSON encoding.
    ///
    /// Two results with the same digest are bit-identical, including every
    /// emitted float.
    pub fn digest(&self) -> String {
        let json = serde_json::to_vec(self).expect("IndicatorResult must serialize");
        blake3::hash(&json).to_hex().to_string()
    }
}

/// Attach times to the populated slots of a series.
fn to_points(candles: &[Candle], values: &[Option<f64>]) -> Vec<IndicatorPoint> {
    candles
        .iter()
        .zip(values)
        .filter_map(|(c, v)| match v {
            Some(value) if value.is_finite() => Some(IndicatorPoint {
                time: c.time,
                value: *value,
            }),
            _ => None,
        })
        .collect()
}

/// Build the result for `config` from the lines its indicator computed.
///
/// The first line takes the config's color; later lines take their catalog
/// color. Envelope kinds get one band spanning their `upper` and `lower` lines.
pub fn assemble(
    config: &IndicatorConfig,
    def: &IndicatorDefinition,
    candles: &[Candle],
    series: Vec<NamedSeries>,
) -> IndicatorResult {
    let lines: Vec<IndicatorLine> = series
        .into_iter()
        .enumerate()
        .map(|(i, s)| {
            let color = if i == 0 {
                config.color.clone()
            } else {
                def.lines
                    .iter()
                    .find(|spec| spec.key == s.key)
                    .map_or(FALLBACK_LINE_COLOR, |spec| spec.color)
                    .to_string()
            };
            IndicatorLine {
                key: s.key.to_string(),
                label: s.label,
                color,
                data: to_points(candles, &s.values),
            }
        })
        .collect();

    let has = |key: &str| lines.iter().any(|l| l.key == key);
    let bands = if def.kind.is_envelope() && has("upper") && has("lower") {
        vec![Band {
            upper_line: "upper".to_string(),
            lower_line: "lower".to_string(),
            color: config.color.clone(),
            fill_opacity: BAND_FILL_OPACITY,
        }]
    } else {
        Vec::new()
    };

    IndicatorResult {
        id: config.id.clone(),
        kind: config.kind.clone(),
        overlay: def.overlay,
        lines,
        bands,
    }
}
