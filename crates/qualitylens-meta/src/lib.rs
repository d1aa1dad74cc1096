//! Shared metadata for code-quality lenses.
//!
//! A *lens* is one quality tool (linter, formatter, type checker, test
//! runner, ...). This crate holds the one definition of which lenses exist,
//! what they cover, and how their output is displayed, so the CLI, the lens
//! runners and the visualization panels agree.
//!
//! ```
//! use qualitylens_meta::{LensCategory, color_mode_for_category, get_lens};
//!
//! let eslint = get_lens("eslint").unwrap();
//! assert_eq!(eslint.category, LensCategory::Linting);
//!
//! // the caller's order decides which linter colors the view
//! let mode = color_mode_for_category(LensCategory::Linting, &["biome-lint", "eslint"]);
//! assert_eq!(mode, Some("biome-lint"));
//! ```
//!
//! All tables are immutable statics; every function is a pure lookup.

mod category;
mod color_mode;
mod commands;
mod consistency;
mod hexagon;
mod lookup;
mod model;
mod registry;
mod validation;

pub use category::{
    category_config, category_description, category_display_name, category_icon,
    detect_language_from_extension, is_inverted_scale, language_config, language_display_name,
    language_extensions, languages_for_category,
};
pub use color_mode::{
    BuiltInColorMode, ColorModeConfig, ColorModeScheme, available_color_mode_ids,
    available_color_modes, color_mode_config, color_mode_for_category, lens_color_modes,
};
pub use commands::{DefaultLensCommand, default_command, default_commands};
pub use consistency::{
    RegistryIssue, RegistryIssues, check_default_commands, check_registry,
    verify_builtin_registry,
};
pub use hexagon::{HexagonMetricKey, is_hexagon_metric_configured, is_lens_in_hexagon_metric};
pub use lookup::{
    alternatives_for, alternatives_in, are_alternatives, are_alternatives_in, category_for_lens,
    get_lens, is_valid_lens_id, lens_color_scheme, lens_display_name, lenses_by_category,
    lenses_by_category_and_language, lenses_by_language, lenses_with_aggregates,
    lenses_with_file_metrics,
};
pub use model::{
    CategoryConfig, ColorScheme, FallbackStrategy, FileMetricsRequirements, Language,
    LanguageConfig, LensCategory, LensMetadata, ParseError,
};
pub use registry::{category_configs, language_configs, lenses};
pub use validation::{
    CategoryConflict, LensOutput, LensOutputIssue, find_category_conflicts, validate_lens_outputs,
};
