//! Input files for the `compute` command: candle CSV and indicator TOML.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use chartstudy_core::{validate_candles, Candle, ConfigFactory, ConfigPatch, IndicatorConfig};

/// Read candles from a CSV file with a `time,open,high,low,close,volume` header.
pub fn load_candles(path: &Path) -> Result<Vec<Candle>> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("failed to open candles file {}", path.display()))?;
    let candles =
        parse_candles(file).with_context(|| format!("failed to read {}", path.display()))?;
    validate_candles(&candles).with_context(|| format!("bad candles in {}", path.display()))?;
    Ok(candles)
}

pub fn parse_candles(reader: impl Read) -> Result<Vec<Candle>> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut candles = Vec::new();
    for (row, record) in rdr.deserialize::<Candle>().enumerate() {
        candles.push(record.with_context(|| format!("row {}", row + 1))?);
    }
    Ok(candles)
}

/// One `[[indicator]]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndicatorEntry {
    pub kind: String,
    #[serde(default)]
    pub params: BTreeMap<String, f64>,
    pub color: Option<String>,
    pub visible: Option<bool>,
    pub source_tag: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub indicator: Vec<IndicatorEntry>,
}

impl ConfigFile {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Turn every entry into a config with a fresh id. Fails on the first unknown kind.
    pub fn build(&self, factory: &ConfigFactory) -> Result<Vec<IndicatorConfig>> {
        self.indicator
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let mut config = factory
                    .create_with(
                        &entry.kind,
                        Some(&entry.params),
                        entry.color.as_deref(),
                        entry.source_tag.as_deref(),
                    )
                    .with_context(|| format!("indicator #{}", i + 1))?;
                if let Some(visible) = entry.visible {
                    config.apply(ConfigPatch::new().visible(visible));
                }
                Ok(config)
            })
            .collect()
    }
}

/// Parse a `name=value` flag.
pub fn parse_param(s: &str) -> Result<(String, f64), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
    let value: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    Ok((name.trim().to_string(), value))
}
