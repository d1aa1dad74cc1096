//! Color modes: how a file visualization is colored.
//!
//! A color mode id is either one of the built-ins (`fileTypes`, `git`,
//! `coverage`) or the id of a lens that outputs file metrics. Consumers
//! treat the id as an opaque key.

use crate::category::category_icon;
use crate::lookup::{get_lens, lenses_by_category};
use crate::model::{ColorScheme, LensCategory, LensMetadata};
use crate::registry::lenses;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Icon for lens-based modes whose category has none.
const DEFAULT_ICON: &str = "📊";

/// Color modes that exist regardless of which lenses ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BuiltInColorMode {
    FileTypes,
    Git,
    Coverage,
}

impl BuiltInColorMode {
    pub const ALL: [BuiltInColorMode; 3] = [
        BuiltInColorMode::FileTypes,
        BuiltInColorMode::Git,
        BuiltInColorMode::Coverage,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BuiltInColorMode::FileTypes => "fileTypes",
            BuiltInColorMode::Git => "git",
            BuiltInColorMode::Coverage => "coverage",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == id)
    }

    pub fn config(self) -> &'static ColorModeConfig {
        match self {
            BuiltInColorMode::FileTypes => &BUILT_IN_MODES[0],
            BuiltInColorMode::Git => &BUILT_IN_MODES[1],
            BuiltInColorMode::Coverage => &BUILT_IN_MODES[2],
        }
    }
}

/// Color scheme of a mode; built-ins color by category rather than by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorModeScheme {
    Issues,
    Coverage,
    Binary,
    Categorical,
}

impl From<ColorScheme> for ColorModeScheme {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Issues => ColorModeScheme::Issues,
            ColorScheme::Coverage => ColorModeScheme::Coverage,
            ColorScheme::Binary => ColorModeScheme::Binary,
        }
    }
}

/// Everything a panel needs to offer and render a color mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorModeConfig {
    pub id: &'static str,
    pub name: &'static str,
    pub description: Cow<'static, str>,
    pub icon: &'static str,
    pub color_scheme: ColorModeScheme,
    pub is_built_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<LensCategory>,
}

impl ColorModeConfig {
    fn from_lens(lens: &'static LensMetadata) -> Self {
        Self {
            id: lens.id,
            name: lens.name,
            description: lens.description_or_default(),
            icon: category_icon(lens.category).unwrap_or(DEFAULT_ICON),
            color_scheme: lens.color_scheme.into(),
            is_built_in: false,
            category: Some(lens.category),
        }
    }
}

static BUILT_IN_MODES: [ColorModeConfig; 3] = [
    ColorModeConfig {
        id: "fileTypes",
        name: "File Types",
        description: Cow::Borrowed("Color files by language"),
        icon: "📄",
        color_scheme: ColorModeScheme::Categorical,
        is_built_in: true,
        category: None,
    },
    ColorModeConfig {
        id: "git",
        name: "Git Status",
        description: Cow::Borrowed("Color files by uncommitted changes"),
        icon: "🔀",
        color_scheme: ColorModeScheme::Categorical,
        is_built_in: true,
        category: None,
    },
    ColorModeConfig {
        id: "coverage",
        name: "Coverage",
        description: Cow::Borrowed("Color files by test coverage"),
        icon: "🧪",
        color_scheme: ColorModeScheme::Categorical,
        is_built_in: true,
        category: None,
    },
];

/// The lens that should drive `category`'s color mode.
///
/// Returns the first entry of `lenses_ran` belonging to `category`. Order
/// is the caller's precedence, not registry order; later matches are
/// ignored (see [`crate::find_category_conflicts`] to surface them).
pub fn color_mode_for_category<'a>(
    category: LensCategory,
    lenses_ran: &[&'a str],
) -> Option<&'a str> {
    let members = lenses_by_category(category);
    lenses_ran
        .iter()
        .copied()
        .find(|id| members.iter().any(|l| l.id == *id))
}

/// Resolve a color mode id to its full configuration.
///
/// Built-ins are matched first. A lens id resolves only if that lens
/// outputs file metrics.
pub fn color_mode_config(mode: &str) -> Option<ColorModeConfig> {
    if let Some(built_in) = BuiltInColorMode::from_id(mode) {
        return Some(built_in.config().clone());
    }
    get_lens(mode)
        .filter(|l| l.outputs_file_metrics)
        .map(ColorModeConfig::from_lens)
}

/// Ids of every lens usable as a color mode, in registry order.
pub fn lens_color_modes() -> Vec<&'static str> {
    lenses()
        .iter()
        .filter(|l| l.outputs_file_metrics)
        .map(|l| l.id)
        .collect()
}

/// Color mode ids available after a run: built-ins, then every lens mode
/// whose lens appears in `lenses_ran`, in registry order.
pub fn available_color_mode_ids(lenses_ran: &[&str]) -> Vec<&'static str> {
    BuiltInColorMode::ALL
        .iter()
        .map(|m| m.as_str())
        .chain(
            lens_color_modes()
                .into_iter()
                .filter(|id| lenses_ran.contains(id)),
        )
        .collect()
}

/// Full configurations for [`available_color_mode_ids`].
pub fn available_color_modes(lenses_ran: &[&str]) -> Vec<ColorModeConfig> {
    available_color_mode_ids(lenses_ran)
        .into_iter()
        .filter_map(color_mode_config)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_mode_for_category_respects_caller_order() {
        assert_eq!(
            color_mode_for_category(
                LensCategory::Linting,
                &["biome-lint", "biome-format", "typescript"]
            ),
            Some("biome-lint")
        );
        assert_eq!(
            color_mode_for_category(LensCategory::Linting, &["typescript", "oxlint", "eslint"]),
            Some("oxlint")
        );
        assert_eq!(color_mode_for_category(LensCategory::Security, &[]), None);
        assert_eq!(
            color_mode_for_category(LensCategory::Security, &["eslint", "unknown"]),
            None
        );
    }

    #[test]
    fn test_built_in_configs() {
        let git = color_mode_config("git").unwrap();
        assert!(git.is_built_in);
        assert_eq!(git.color_scheme, ColorModeScheme::Categorical);
        assert_eq!(git.category, None);
        for mode in BuiltInColorMode::ALL {
            assert_eq!(mode.config().id, mode.as_str());
        }
    }

    #[test]
    fn test_lens_config_is_synthesized() {
        let jest = color_mode_config("jest").unwrap();
        assert_eq!(jest.name, "Jest");
        assert!(!jest.is_built_in);
        assert_eq!(jest.color_scheme, ColorModeScheme::Coverage);
        assert_eq!(jest.category, Some(LensCategory::Tests));
        assert_eq!(jest.icon, "🧪");

        // no description in the registry
        let pylint = color_mode_config("pylint").unwrap();
        assert_eq!(pylint.description, "Color by Pylint results");
    }

    #[test]
    fn test_lens_without_file_metrics_is_not_a_mode() {
        assert!(color_mode_config("npm-audit").is_none());
        assert!(color_mode_config("no-such-lens").is_none());
    }

    #[test]
    fn test_available_color_mode_ids() {
        assert_eq!(
            available_color_mode_ids(&[]),
            vec!["fileTypes", "git", "coverage"]
        );
        assert_eq!(
            available_color_mode_ids(&["ruff", "npm-audit", "unknown", "eslint", "ruff"]),
            vec!["fileTypes", "git", "coverage", "eslint", "ruff"]
        );
        // registry order, not run order
        assert_eq!(
            available_color_mode_ids(&["jest", "clippy"]),
            available_color_mode_ids(&["clippy", "jest"])
        );
    }

    #[test]
    fn test_available_color_modes() {
        let modes = available_color_modes(&["prettier"]);
        assert_eq!(modes.len(), 4);
        assert_eq!(modes[3].id, "prettier");
        assert_eq!(modes[3].color_scheme, ColorModeScheme::Binary);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(color_mode_config("fileTypes").unwrap()).unwrap();
        assert_eq!(value["isBuiltIn"], true);
        assert_eq!(value["colorScheme"], "categorical");
        assert!(value.get("category").is_none());
    }
}
