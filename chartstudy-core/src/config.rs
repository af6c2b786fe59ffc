//! Indicator configs and the factory that instantiates them from the catalog.
//!
//! - `IndicatorConfig`: one user-visible indicator instance (kind + params + display state).
//! - `ConfigPatch`: partial edit applied in place (param edits, visibility, color).
//! - `ConfigFactory`: merges catalog defaults with overrides and stamps a fresh id.
//!
//! Params live in a `BTreeMap` so iteration, serialization and hashing are
//! deterministic.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{lookup, IndicatorDefinition};
use crate::domain::{IdSource, IndicatorId, SequentialIds};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown indicator type: {0}")]
    UnknownIndicatorType(String),
}

/// A configured indicator instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorConfig {
    pub id: IndicatorId,
    pub kind: String,
    pub params: BTreeMap<String, f64>,
    pub color: String,
    pub visible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<String>,
}

impl IndicatorConfig {
    /// Catalog entry for this config's kind, if the kind is known.
    pub fn definition(&self) -> Option<&'static IndicatorDefinition> {
        lookup(&self.kind)
    }

    /// Catalog defaults overlaid with this config's params.
    ///
    /// Params the catalog does not know are kept; the indicator constructor
    /// ignores them.
    pub fn effective_params(&self) -> BTreeMap<String, f64> {
        let mut params = self
            .definition()
            .map(IndicatorDefinition::default_param_map)
            .unwrap_or_default();
        params.extend(self.params.iter().map(|(k, v)| (k.clone(), *v)));
        params
    }

    /// Apply a partial edit in place. Fields the patch leaves unset are untouched.
    pub fn apply(&mut self, patch: ConfigPatch) {
        self.params.extend(patch.params);
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Partial edit of an `IndicatorConfig`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigPatch {
    pub params: BTreeMap<String, f64>,
    pub visible: Option<bool>,
    pub color: Option<String>,
}

impl ConfigPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn param(mut self, name: impl Into<String>, value: f64) -> Self {
        self.params.insert(name.into(), value);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Builds configs from catalog entries. Owns the id source, so two factories
/// never share a counter.
pub struct ConfigFactory {
    ids: Box<dyn IdSource>,
}

impl ConfigFactory {
    pub fn new(ids: impl IdSource + 'static) -> Self {
        Self { ids: Box::new(ids) }
    }

    /// Create a config with catalog defaults merged under `overrides`, the
    /// catalog's default color, visible, and no source tag.
    pub fn create(
        &self,
        kind: &str,
        overrides: Option<&BTreeMap<String, f64>>,
    ) -> Result<IndicatorConfig, ConfigError> {
        self.create_with(kind, overrides, None, None)
    }

    /// Like `create`, with an explicit color and source tag.
    pub fn create_with(
        &self,
        kind: &str,
        overrides: Option<&BTreeMap<String, f64>>,
        color: Option<&str>,
        source_tag: Option<&str>,
    ) -> Result<IndicatorConfig, ConfigError> {
        let def = lookup(kind).ok_or_else(|| ConfigError::UnknownIndicatorType(kind.to_string()))?;

        let mut params = def.default_param_map();
        if let Some(overrides) = overrides {
            params.extend(overrides.iter().map(|(k, v)| (k.clone(), *v)));
        }

        Ok(IndicatorConfig {
            id: self.ids.next_id(),
            kind: def.kind.as_str().to_string(),
            params,
            color: color.unwrap_or(def.default_color).to_string(),
            visible: true,
            source_tag: source_tag.map(str::to_string),
        })
    }
}

impl Default for ConfigFactory {
    fn default() -> Self {
        Self::new(SequentialIds::new())
    }
}

impl fmt::Debug for ConfigFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFactory").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SeededIds;
    use std::collections::HashSet;

    #[test]
    fn create_uses_catalog_defaults() {
        let factory = ConfigFactory::default();
        let cfg = factory.create("bollinger", None).unwrap();
        assert_eq!(cfg.kind, "bollinger");
        assert_eq!(cfg.params.get("period"), Some(&20.0));
        assert_eq!(cfg.params.get("std_dev"), Some(&2.0));
        assert_eq!(cfg.color, lookup("bollinger").unwrap().default_color);
        assert!(cfg.visible);
        assert_eq!(cfg.source_tag, None);
    }

    #[test]
    fn create_merges_overrides() {
        let factory = ConfigFactory::default();
        let overrides = BTreeMap::from([("period".to_string(), 50.0)]);
        let cfg = factory.create("sma", Some(&overrides)).unwrap();
        assert_eq!(cfg.params, overrides);

        let overrides = BTreeMap::from([("slow".to_string(), 30.0)]);
        let cfg = factory.create("macd", Some(&overrides)).unwrap();
        assert_eq!(cfg.params.get("fast"), Some(&12.0));
        assert_eq!(cfg.params.get("slow"), Some(&30.0));
        assert_eq!(cfg.params.get("signal"), Some(&9.0));
    }

    #[test]
    fn create_unknown_kind_fails() {
        let factory = ConfigFactory::default();
        assert_eq!(
            factory.create("ichimoku", None),
            Err(ConfigError::UnknownIndicatorType("ichimoku".to_string()))
        );
    }

    #[test]
    fn ids_are_unique() {
        let factory = ConfigFactory::default();
        let ids: HashSet<_> = (0..100)
            .map(|_| factory.create("ema", None).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn seeded_ids_are_reproducible() {
        let a = ConfigFactory::new(SeededIds::new(7));
        let b = ConfigFactory::new(SeededIds::new(7));
        for _ in 0..5 {
            assert_eq!(
                a.create("rsi", None).unwrap().id,
                b.create("rsi", None).unwrap().id
            );
        }
    }

    #[test]
    fn create_with_color_and_tag() {
        let factory = ConfigFactory::default();
        let cfg = factory
            .create_with("atr", None, Some("#000000"), Some("chat"))
            .unwrap();
        assert_eq!(cfg.color, "#000000");
        assert_eq!(cfg.source_tag.as_deref(), Some("chat"));
    }

    #[test]
    fn patch_updates_only_given_fields() {
        let factory = ConfigFactory::default();
        let mut cfg = factory.create("keltner", None).unwrap();
        let before = cfg.clone();

        cfg.apply(ConfigPatch::new().param("multiplier", 1.5).visible(false));
        assert_eq!(cfg.params.get("multiplier"), Some(&1.5));
        assert_eq!(cfg.params.get("period"), Some(&20.0));
        assert!(!cfg.visible);
        assert_eq!(cfg.color, before.color);
        assert_eq!(cfg.id, before.id);

        cfg.apply(ConfigPatch::new());
        assert_eq!(cfg.params.get("multiplier"), Some(&1.5));
    }

    #[test]
    fn effective_params_fill_missing_defaults() {
        let cfg = IndicatorConfig {
            id: IndicatorId::from("x"),
            kind: "stochastic".to_string(),
            params: BTreeMap::from([("k_period".to_string(), 5.0)]),
            color: "#fff".to_string(),
            visible: true,
            source_tag: None,
        };
        let params = cfg.effective_params();
        assert_eq!(params.get("k_period"), Some(&5.0));
        assert_eq!(params.get("d_period"), Some(&3.0));
    }

    #[test]
    fn config_json_is_camel_case() {
        let factory = ConfigFactory::new(SequentialIds::new());
        let cfg = factory.create_with("obv", None, None, Some("cli")).unwrap();
        let json = serde_json::to_string(&cfg).unwrap();
        assert!(json.contains("\"sourceTag\":\"cli\""));
        let back: IndicatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
