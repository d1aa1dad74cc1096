//! Shape of a `lenses.yaml` project configuration.
//!
//! Loading, defaulting and merging live with the CLI; this crate only pins
//! down the structure so every consumer deserializes the same thing.
//!
//! Example `lenses.yaml`:
//! ```yaml
//! lenses:
//!   - eslint
//!   - id: jest
//!     args: ["--runInBand"]
//! exclude:
//!   - "**/generated/**"
//! packages:
//!   packages/api:
//!     inherit: true
//!     lenses: [ruff, pytest]
//! ```

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root of a `lenses.yaml` file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct QualityLensConfig {
    /// Lenses to run at the repository root.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lenses: Vec<LensEntry>,
    /// Whether packages inherit the root lens list. None = consumer default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherit: Option<bool>,
    /// Glob patterns excluded from every lens.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
    /// Per-package overrides, keyed by package path.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub packages: BTreeMap<String, PackageLensConfig>,
}

impl QualityLensConfig {
    /// Ids of the enabled root lenses, in file order.
    pub fn lens_ids(&self) -> Vec<&str> {
        self.lenses
            .iter()
            .filter(|e| e.is_enabled())
            .map(|e| e.id())
            .collect()
    }
}

/// Overrides for one package in a monorepo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct PackageLensConfig {
    /// Replaces (or, with `inherit`, extends) the root lens list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lenses: Option<Vec<LensEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inherit: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub exclude: Vec<String>,
}

/// A lens in a config list: a bare id or a detailed entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum LensEntry {
    Id(String),
    Detailed(LensOptions),
}

impl LensEntry {
    pub fn id(&self) -> &str {
        match self {
            LensEntry::Id(id) => id,
            LensEntry::Detailed(options) => &options.id,
        }
    }

    /// Entries are enabled unless they say `enabled: false`.
    pub fn is_enabled(&self) -> bool {
        match self {
            LensEntry::Id(_) => true,
            LensEntry::Detailed(options) => options.enabled.unwrap_or(true),
        }
    }
}

/// Detailed lens entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LensOptions {
    pub id: String,
    /// Replaces the lens's default command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    /// Extra arguments appended to the command.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// JSON schema for `lenses.yaml`, for editor integration.
pub fn config_schema() -> schemars::Schema {
    schemars::schema_for!(QualityLensConfig)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
lenses:
  - eslint
  - id: jest
    args: ["--runInBand"]
  - id: knip
    enabled: false
inherit: true
exclude:
  - "**/generated/**"
packages:
  packages/api:
    lenses: [ruff, pytest]
  packages/web:
    exclude: ["dist/**"]
"#;

    #[test]
    fn test_parse_example() {
        let config: QualityLensConfig = serde_yaml::from_str(EXAMPLE).unwrap();
        assert_eq!(config.lenses.len(), 3);
        assert_eq!(config.lens_ids(), vec!["eslint", "jest"]);
        assert_eq!(config.inherit, Some(true));
        assert_eq!(config.exclude, vec!["**/generated/**"]);

        let jest = &config.lenses[1];
        assert_eq!(
            jest,
            &LensEntry::Detailed(LensOptions {
                id: "jest".to_string(),
                command: None,
                args: vec!["--runInBand".to_string()],
                enabled: None,
            })
        );

        let api = &config.packages["packages/api"];
        let api_ids: Vec<_> = api.lenses.as_ref().unwrap().iter().map(|e| e.id()).collect();
        assert_eq!(api_ids, vec!["ruff", "pytest"]);
        assert_eq!(api.inherit, None);

        let web = &config.packages["packages/web"];
        assert!(web.lenses.is_none());
        assert_eq!(web.exclude, vec!["dist/**"]);
    }

    #[test]
    fn test_empty_document_is_default() {
        let config: QualityLensConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, QualityLensConfig::default());
        assert!(config.lens_ids().is_empty());
    }

    #[test]
    fn test_serialize_omits_unset_fields() {
        let config = QualityLensConfig {
            lenses: vec![LensEntry::Id("ruff".to_string())],
            ..Default::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value, serde_json::json!({ "lenses": ["ruff"] }));
    }

    #[test]
    fn test_schema_describes_root_fields() {
        let schema = serde_json::to_value(config_schema()).unwrap();
        let properties = &schema["properties"];
        for field in ["lenses", "inherit", "exclude", "packages"] {
            assert!(properties.get(field).is_some(), "schema missing {field}");
        }
    }
}
