//! Shapes of lens run results as emitted by the CLI.
//!
//! Only the fields extraction reads are modeled; anything else in the JSON
//! is ignored.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Failure to read lens results.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("invalid lens results JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result of running one lens, possibly within one package of a monorepo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LensResultInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub package: Option<PackageRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens: Option<LensRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coverage: Option<CoverageReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_metrics: Option<Vec<FileMetricData>>,
}

impl LensResultInput {
    pub fn lens_id(&self) -> Option<&str> {
        self.lens.as_ref().and_then(|l| l.id.as_deref())
    }

    pub fn package_path(&self) -> Option<&str> {
        self.package.as_ref().and_then(|p| p.path.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRef {
    /// Package directory relative to the repository root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LensRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoverageReport {
    #[serde(default)]
    pub files: Vec<FileCoverage>,
}

/// Coverage percentages for one file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileCoverage {
    pub file: String,
    pub lines: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branches: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub functions: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statements: Option<f64>,
}

/// Per-file result of a lens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetricData {
    pub file: String,
    /// 0-100, higher is better.
    pub score: f64,
    pub issue_count: u32,
    pub error_count: u32,
    pub warning_count: u32,
    pub info_count: u32,
    pub hint_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixable_count: Option<u32>,
    /// Issue counts by rule category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<String, u32>>,
}

/// Parse the CLI's JSON array of lens results.
pub fn results_from_json(json: &str) -> Result<Vec<LensResultInput>, InputError> {
    Ok(serde_json::from_str(json)?)
}
