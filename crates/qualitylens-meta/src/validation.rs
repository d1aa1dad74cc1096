//! Checks over the set of lenses that ran.
//!
//! Unknown ids are skipped, not rejected: callers may run lenses this
//! registry does not know about yet.

use crate::lookup::get_lens;
use crate::model::LensCategory;
use serde::{Deserialize, Serialize};

/// Several lenses of the same category ran together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConflict {
    pub category: LensCategory,
    /// Encounter order.
    pub lenses: Vec<String>,
}

/// Kind of output a lens declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LensOutput {
    FileMetrics,
    Aggregate,
}

/// A lens that ran without producing an output it declares.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LensOutputIssue {
    pub lens_id: String,
    pub missing: Vec<LensOutput>,
}

/// Categories with two or more lenses in `lenses_ran`.
///
/// Conflicts are ordered by the first appearance of their category.
pub fn find_category_conflicts(lenses_ran: &[&str]) -> Vec<CategoryConflict> {
    let mut groups: Vec<CategoryConflict> = Vec::new();
    for &id in lenses_ran {
        let Some(lens) = get_lens(id) else {
            tracing::debug!(lens = id, "skipping unknown lens in conflict check");
            continue;
        };
        match groups.iter_mut().find(|g| g.category == lens.category) {
            Some(group) => group.lenses.push(id.to_string()),
            None => groups.push(CategoryConflict {
                category: lens.category,
                lenses: vec![id.to_string()],
            }),
        }
    }
    groups.retain(|g| g.lenses.len() >= 2);
    groups
}

/// Lenses whose declared outputs were not produced.
pub fn validate_lens_outputs(
    lenses_ran: &[&str],
    file_metrics_produced: &[&str],
    aggregates_produced: &[&str],
) -> Vec<LensOutputIssue> {
    let mut issues = Vec::new();
    for &id in lenses_ran {
        let Some(lens) = get_lens(id) else {
            tracing::debug!(lens = id, "skipping unknown lens in output validation");
            continue;
        };
        let mut missing = Vec::new();
        if lens.outputs_file_metrics && !file_metrics_produced.contains(&id) {
            missing.push(LensOutput::FileMetrics);
        }
        if lens.outputs_aggregate && !aggregates_produced.contains(&id) {
            missing.push(LensOutput::Aggregate);
        }
        if !missing.is_empty() {
            issues.push(LensOutputIssue {
                lens_id: id.to_string(),
                missing,
            });
        }
    }
    issues
}
