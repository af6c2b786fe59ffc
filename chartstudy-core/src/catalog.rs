//! Indicator catalog — the static registry of every supported indicator.
//!
//! The catalog is immutable and ordered: overlays first (drawn on the price
//! axis), then sub-pane oscillators. Each definition carries its default
//! params, its default color, and the keys of the lines its computation
//! emits, in emission order.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Every indicator family the engine can compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    Sma,
    Ema,
    Wma,
    Dema,
    Tema,
    Bollinger,
    Vwap,
    Psar,
    Donchian,
    Keltner,
    Supertrend,
    Rsi,
    Macd,
    Atr,
    Stochastic,
    Cci,
    WilliamsR,
    Adx,
    Obv,
    Mfi,
    Roc,
    Trix,
    Chaikin,
    Force,
    Aroon,
    Cmo,
}

impl IndicatorKind {
    pub const ALL: [IndicatorKind; 26] = [
        Self::Sma,
        Self::Ema,
        Self::Wma,
        Self::Dema,
        Self::Tema,
        Self::Bollinger,
        Self::Vwap,
        Self::Psar,
        Self::Donchian,
        Self::Keltner,
        Self::Supertrend,
        Self::Rsi,
        Self::Macd,
        Self::Atr,
        Self::Stochastic,
        Self::Cci,
        Self::WilliamsR,
        Self::Adx,
        Self::Obv,
        Self::Mfi,
        Self::Roc,
        Self::Trix,
        Self::Chaikin,
        Self::Force,
        Self::Aroon,
        Self::Cmo,
    ];

    /// Catalog key, e.g. `"williams_r"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sma => "sma",
            Self::Ema => "ema",
            Self::Wma => "wma",
            Self::Dema => "dema",
            Self::Tema => "tema",
            Self::Bollinger => "bollinger",
            Self::Vwap => "vwap",
            Self::Psar => "psar",
            Self::Donchian => "donchian",
            Self::Keltner => "keltner",
            Self::Supertrend => "supertrend",
            Self::Rsi => "rsi",
            Self::Macd => "macd",
            Self::Atr => "atr",
            Self::Stochastic => "stochastic",
            Self::Cci => "cci",
            Self::WilliamsR => "williams_r",
            Self::Adx => "adx",
            Self::Obv => "obv",
            Self::Mfi => "mfi",
            Self::Roc => "roc",
            Self::Trix => "trix",
            Self::Chaikin => "chaikin",
            Self::Force => "force",
            Self::Aroon => "aroon",
            Self::Cmo => "cmo",
        }
    }

    /// Whether results carry a fill band between the upper and lower lines.
    pub fn is_envelope(self) -> bool {
        matches!(self, Self::Bollinger | Self::Donchian | Self::Keltner)
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown indicator type: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for IndicatorKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Trend,
    Momentum,
    Volatility,
    Volume,
}

/// One output line of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSpec {
    pub key: &'static str,
    /// Color used when this is not the first line (the first line takes the config's color).
    pub color: &'static str,
}

const fn line(key: &'static str, color: &'static str) -> LineSpec {
    LineSpec { key, color }
}

/// Immutable catalog entry.
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorDefinition {
    pub kind: IndicatorKind,
    pub display_name: &'static str,
    pub overlay: bool,
    pub default_params: &'static [(&'static str, f64)],
    pub default_color: &'static str,
    pub category: Category,
    pub description: &'static str,
    pub lines: &'static [LineSpec],
}

impl IndicatorDefinition {
    /// Default params as an owned map.
    pub fn default_param_map(&self) -> BTreeMap<String, f64> {
        self.default_params
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    pub fn default_param(&self, name: &str) -> Option<f64> {
        self.default_params
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }
}

// ─── Palette ─────────────────────────────────────────────────────────

const BLUE: &str = "#2962FF";
const ORANGE: &str = "#FF6D00";
const TEAL: &str = "#26A69A";
const RED: &str = "#EF5350";
const PURPLE: &str = "#7E57C2";
const AMBER: &str = "#FFB300";
const GREY: &str = "#787B86";

static DEFINITIONS: [IndicatorDefinition; 26] = [
    IndicatorDefinition {
        kind: IndicatorKind::Sma,
        display_name: "SMA",
        overlay: true,
        default_params: &[("period", 20.0)],
        default_color: BLUE,
        category: Category::Trend,
        description: "Simple moving average of closes",
        lines: &[line("sma", BLUE)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Ema,
        display_name: "EMA",
        overlay: true,
        default_params: &[("period", 20.0)],
        default_color: ORANGE,
        category: Category::Trend,
        description: "Exponential moving average seeded by the simple mean",
        lines: &[line("ema", ORANGE)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Wma,
        display_name: "WMA",
        overlay: true,
        default_params: &[("period", 20.0)],
        default_color: TEAL,
        category: Category::Trend,
        description: "Linearly weighted moving average, newest bar heaviest",
        lines: &[line("wma", TEAL)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Dema,
        display_name: "DEMA",
        overlay: true,
        default_params: &[("period", 20.0)],
        default_color: PURPLE,
        category: Category::Trend,
        description: "Double exponential moving average",
        lines: &[line("dema", PURPLE)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Tema,
        display_name: "TEMA",
        overlay: true,
        default_params: &[("period", 20.0)],
        default_color: AMBER,
        category: Category::Trend,
        description: "Triple exponential moving average",
        lines: &[line("tema", AMBER)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Bollinger,
        display_name: "Bollinger Bands",
        overlay: true,
        default_params: &[("period", 20.0), ("std_dev", 2.0)],
        default_color: BLUE,
        category: Category::Volatility,
        description: "SMA with population standard deviation bands",
        lines: &[line("middle", BLUE), line("upper", GREY), line("lower", GREY)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Vwap,
        display_name: "VWAP",
        overlay: true,
        default_params: &[],
        default_color: PURPLE,
        category: Category::Volume,
        description: "Volume-weighted average price, reset each UTC day",
        lines: &[line("vwap", PURPLE)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Psar,
        display_name: "Parabolic SAR",
        overlay: true,
        default_params: &[("step", 0.02), ("max", 0.2)],
        default_color: AMBER,
        category: Category::Trend,
        description: "Wilder's stop-and-reverse points",
        lines: &[line("psar", AMBER)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Donchian,
        display_name: "Donchian Channels",
        overlay: true,
        default_params: &[("period", 20.0)],
        default_color: TEAL,
        category: Category::Volatility,
        description: "Highest high and lowest low over the window",
        lines: &[line("upper", TEAL), line("middle", GREY), line("lower", TEAL)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Keltner,
        display_name: "Keltner Channels",
        overlay: true,
        default_params: &[("period", 20.0), ("multiplier", 2.0)],
        default_color: PURPLE,
        category: Category::Volatility,
        description: "EMA with ATR bands",
        lines: &[line("middle", PURPLE), line("upper", GREY), line("lower", GREY)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Supertrend,
        display_name: "SuperTrend",
        overlay: true,
        default_params: &[("period", 10.0), ("multiplier", 3.0)],
        default_color: TEAL,
        category: Category::Trend,
        description: "ATR trailing band that flips with the trend",
        lines: &[line("supertrend", TEAL)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Rsi,
        display_name: "RSI",
        overlay: false,
        default_params: &[("period", 14.0)],
        default_color: PURPLE,
        category: Category::Momentum,
        description: "Relative strength index with Wilder smoothing",
        lines: &[line("rsi", PURPLE)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Macd,
        display_name: "MACD",
        overlay: false,
        default_params: &[("fast", 12.0), ("slow", 26.0), ("signal", 9.0)],
        default_color: BLUE,
        category: Category::Momentum,
        description: "Fast minus slow EMA with signal line and histogram",
        lines: &[
            line("macd", BLUE),
            line("signal", ORANGE),
            line("histogram", GREY),
        ],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Atr,
        display_name: "ATR",
        overlay: false,
        default_params: &[("period", 14.0)],
        default_color: RED,
        category: Category::Volatility,
        description: "Average true range with Wilder smoothing",
        lines: &[line("atr", RED)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Stochastic,
        display_name: "Stochastic",
        overlay: false,
        default_params: &[("k_period", 14.0), ("d_period", 3.0)],
        default_color: BLUE,
        category: Category::Momentum,
        description: "Close position within the recent high-low range",
        lines: &[line("k", BLUE), line("d", ORANGE)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Cci,
        display_name: "CCI",
        overlay: false,
        default_params: &[("period", 20.0)],
        default_color: TEAL,
        category: Category::Momentum,
        description: "Commodity channel index of the typical price",
        lines: &[line("cci", TEAL)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::WilliamsR,
        display_name: "Williams %R",
        overlay: false,
        default_params: &[("period", 14.0)],
        default_color: PURPLE,
        category: Category::Momentum,
        description: "Close distance below the recent high, 0 to -100",
        lines: &[line("williams_r", PURPLE)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Adx,
        display_name: "ADX",
        overlay: false,
        default_params: &[("period", 14.0)],
        default_color: AMBER,
        category: Category::Trend,
        description: "Average directional index with +DI and -DI",
        lines: &[
            line("adx", AMBER),
            line("plus_di", TEAL),
            line("minus_di", RED),
        ],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Obv,
        display_name: "OBV",
        overlay: false,
        default_params: &[],
        default_color: BLUE,
        category: Category::Volume,
        description: "On-balance volume",
        lines: &[line("obv", BLUE)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Mfi,
        display_name: "MFI",
        overlay: false,
        default_params: &[("period", 14.0)],
        default_color: TEAL,
        category: Category::Volume,
        description: "Money flow index, a volume-weighted RSI",
        lines: &[line("mfi", TEAL)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Roc,
        display_name: "ROC",
        overlay: false,
        default_params: &[("period", 12.0)],
        default_color: ORANGE,
        category: Category::Momentum,
        description: "Percentage change over the period",
        lines: &[line("roc", ORANGE)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Trix,
        display_name: "TRIX",
        overlay: false,
        default_params: &[("period", 15.0)],
        default_color: RED,
        category: Category::Momentum,
        description: "Rate of change of a triple-smoothed EMA",
        lines: &[line("trix", RED)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Chaikin,
        display_name: "Chaikin Oscillator",
        overlay: false,
        default_params: &[("fast", 3.0), ("slow", 10.0)],
        default_color: AMBER,
        category: Category::Volume,
        description: "EMA difference of the accumulation/distribution line",
        lines: &[line("chaikin", AMBER)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Force,
        display_name: "Force Index",
        overlay: false,
        default_params: &[("period", 13.0)],
        default_color: BLUE,
        category: Category::Volume,
        description: "EMA of price change times volume",
        lines: &[line("force", BLUE)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Aroon,
        display_name: "Aroon",
        overlay: false,
        default_params: &[("period", 25.0)],
        default_color: TEAL,
        category: Category::Trend,
        description: "Bars since the highest high and lowest low",
        lines: &[line("up", TEAL), line("down", RED)],
    },
    IndicatorDefinition {
        kind: IndicatorKind::Cmo,
        display_name: "CMO",
        overlay: false,
        default_params: &[("period", 14.0)],
        default_color: PURPLE,
        category: Category::Momentum,
        description: "Chande momentum oscillator",
        lines: &[line("cmo", PURPLE)],
    },
];

/// Every catalog entry, in catalog order.
pub fn list_definitions() -> &'static [IndicatorDefinition] {
    &DEFINITIONS
}

pub fn lookup(kind: &str) -> Option<&'static IndicatorDefinition> {
    DEFINITIONS.iter().find(|d| d.kind.as_str() == kind)
}

pub fn definition(kind: IndicatorKind) -> &'static IndicatorDefinition {
    // DEFINITIONS is declared in IndicatorKind::ALL order.
    &DEFINITIONS[kind as usize]
}

pub fn definitions_in(category: Category) -> impl Iterator<Item = &'static IndicatorDefinition> {
    DEFINITIONS.iter().filter(move |d| d.category == category)
}
