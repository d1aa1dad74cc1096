//! Metadata model: lens, category and language records.
//!
//! All records hold `&'static` data so the built-in tables can be plain
//! `static` slices. Nothing here is mutable after construction.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Failure to parse an identifier into one of the closed enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown lens category: {0}")]
    UnknownCategory(String),

    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("unknown hexagon metric: {0}")]
    UnknownHexagonMetric(String),
}

/// Quality dimension a lens reports on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LensCategory {
    Linting,
    Formatting,
    Types,
    Tests,
    DeadCode,
    Documentation,
    Security,
    Complexity,
}

impl LensCategory {
    pub const ALL: [LensCategory; 8] = [
        LensCategory::Linting,
        LensCategory::Formatting,
        LensCategory::Types,
        LensCategory::Tests,
        LensCategory::DeadCode,
        LensCategory::Documentation,
        LensCategory::Security,
        LensCategory::Complexity,
    ];

    /// Kebab-case identifier, as used in serialized data.
    pub const fn as_str(self) -> &'static str {
        match self {
            LensCategory::Linting => "linting",
            LensCategory::Formatting => "formatting",
            LensCategory::Types => "types",
            LensCategory::Tests => "tests",
            LensCategory::DeadCode => "dead-code",
            LensCategory::Documentation => "documentation",
            LensCategory::Security => "security",
            LensCategory::Complexity => "complexity",
        }
    }
}

impl fmt::Display for LensCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LensCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LensCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_string()))
    }
}

/// Programming language a lens can analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    TypeScript,
    JavaScript,
    Python,
    Rust,
    Go,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::TypeScript,
        Language::JavaScript,
        Language::Python,
        Language::Rust,
        Language::Go,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Language::TypeScript => "typescript",
            Language::JavaScript => "javascript",
            Language::Python => "python",
            Language::Rust => "rust",
            Language::Go => "go",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|l| l.as_str() == s)
            .ok_or_else(|| ParseError::UnknownLanguage(s.to_string()))
    }
}

/// How a visualization should color files for a lens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Gradient by issue count / score.
    #[default]
    Issues,
    /// Gradient by coverage percentage.
    Coverage,
    /// Pass/fail per file.
    Binary,
}

/// What a consumer should do about files a lens did not report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackStrategy {
    /// Unreported files are treated as having no issues.
    AssumeClean,
    /// Enumerate source files separately and merge with the tool's output.
    ListSourceFiles,
    /// The tool already reports everything; no fallback needed.
    None,
}

/// Invocation needed to get complete per-file output from a lens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetricsRequirements {
    /// Exact command line producing per-file output.
    pub command: &'static str,
    pub fallback: FallbackStrategy,
    /// True when the tool lists every analyzed file, not only files with issues.
    pub reports_all_files: bool,
}

/// One supported quality tool.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LensMetadata {
    /// Unique key across the registry.
    pub id: &'static str,
    pub name: &'static str,
    pub category: LensCategory,
    pub languages: &'static [Language],
    /// Interchangeable lenses within the same category.
    #[serde(skip_serializing_if = "is_empty_slice")]
    pub alternative_to: &'static [&'static str],
    pub outputs_file_metrics: bool,
    pub outputs_aggregate: bool,
    pub color_scheme: ColorScheme,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_metrics_requirements: Option<FileMetricsRequirements>,
}

impl LensMetadata {
    pub fn supports(&self, language: Language) -> bool {
        self.languages.contains(&language)
    }

    /// Whether this lens names `other` in its `alternative_to` list.
    pub fn lists_alternative(&self, other: &str) -> bool {
        self.alternative_to.contains(&other)
    }

    /// Description, or a sentence derived from the display name.
    pub fn description_or_default(&self) -> Cow<'static, str> {
        match self.description {
            Some(d) => Cow::Borrowed(d),
            None => Cow::Owned(format!("Color by {} results", self.name)),
        }
    }
}

pub(crate) fn is_empty_slice<T>(slice: &&[T]) -> bool {
    slice.is_empty()
}

/// Display configuration for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryConfig {
    pub id: LensCategory,
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
    /// Lower raw values are better (e.g. dead-code counts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inverted_scale: Option<bool>,
}

/// Display configuration for a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfig {
    pub id: Language,
    pub name: &'static str,
    /// Lower-case, dot-prefixed.
    pub extensions: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<&'static str>,
}
