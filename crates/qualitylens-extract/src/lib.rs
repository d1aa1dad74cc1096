//! Extraction of per-file quality data from lens run results.
//!
//! The CLI emits one result per (package, lens) run. Panels want two flat
//! views instead: line coverage by file, and file metrics grouped by lens.
//!
//! ```
//! use qualitylens_extract::{extract_quality_data, results_from_json};
//!
//! let results = results_from_json(r#"[
//!     {"lens": {"id": "jest"}, "coverage": {"files": [{"file": "a.ts", "lines": 80}]}}
//! ]"#).unwrap();
//! let data = extract_quality_data(&results);
//! assert_eq!(data.file_coverage.unwrap()["a.ts"], 80.0);
//! assert!(data.file_metrics.is_none());
//! ```

mod extract;
mod input;

pub use extract::{ExtractedQualityData, extract_quality_data, extract_quality_data_with_paths};
pub use input::{
    CoverageReport, FileCoverage, FileMetricData, InputError, LensRef, LensResultInput,
    PackageRef, results_from_json,
};

use qualitylens_meta::{LensCategory, category_for_lens};

/// Canonical lens id for a possibly aliased or mis-cased one.
///
/// Generic task names map to the lens that historically ran them
/// (`lint` → `eslint`, `typecheck`/`tsc` → `typescript`, `format` →
/// `prettier`, `test` → `jest`). Anything else is only lower-cased.
pub fn normalize_lens_id(id: &str) -> String {
    let lower = id.to_lowercase();
    match lower.as_str() {
        "lint" => "eslint".to_string(),
        "typecheck" | "tsc" => "typescript".to_string(),
        "format" => "prettier".to_string(),
        "test" => "jest".to_string(),
        _ => lower,
    }
}

/// Whether a lens reports coverage, i.e. belongs to the tests category.
pub fn lens_produces_coverage(id: &str) -> bool {
    category_for_lens(&normalize_lens_id(id)) == Some(LensCategory::Tests)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lens_id_aliases() {
        assert_eq!(normalize_lens_id("LINT"), "eslint");
        assert_eq!(normalize_lens_id("typecheck"), "typescript");
        assert_eq!(normalize_lens_id("tsc"), "typescript");
        assert_eq!(normalize_lens_id("Format"), "prettier");
        assert_eq!(normalize_lens_id("test"), "jest");
    }

    #[test]
    fn test_normalize_lens_id_passthrough() {
        assert_eq!(normalize_lens_id("unknown-tool"), "unknown-tool");
        assert_eq!(normalize_lens_id("Biome-Lint"), "biome-lint");
        assert_eq!(normalize_lens_id("eslint"), "eslint");
    }

    #[test]
    fn test_lens_produces_coverage() {
        assert!(lens_produces_coverage("jest"));
        assert!(lens_produces_coverage("pytest"));
        assert!(lens_produces_coverage("TEST"));
        assert!(!lens_produces_coverage("eslint"));
        assert!(!lens_produces_coverage("unknown-tool"));
    }
}
