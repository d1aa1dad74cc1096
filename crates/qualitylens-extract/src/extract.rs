//! Folding lens results into per-file maps.

use crate::input::{FileMetricData, LensResultInput};
use crate::normalize_lens_id;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-file data ready for the visualization panels.
///
/// A field is `None` rather than empty when no result contributed to it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedQualityData {
    /// Line coverage by file path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_coverage: Option<BTreeMap<String, f64>>,
    /// File metrics by normalized lens id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_metrics: Option<BTreeMap<String, Vec<FileMetricData>>>,
}

/// Fold `results` into coverage and metrics maps, paths as reported.
///
/// Coverage for the same path from later results overwrites earlier ones.
/// Metrics for the same lens (e.g. one per monorepo package) are
/// concatenated in input order.
pub fn extract_quality_data(results: &[LensResultInput]) -> ExtractedQualityData {
    extract_quality_data_with_paths(results, false)
}

/// Like [`extract_quality_data`], optionally prefixing every file path with
/// the originating result's package path.
pub fn extract_quality_data_with_paths(
    results: &[LensResultInput],
    prefix_paths: bool,
) -> ExtractedQualityData {
    let mut file_coverage: BTreeMap<String, f64> = BTreeMap::new();
    let mut file_metrics: BTreeMap<String, Vec<FileMetricData>> = BTreeMap::new();

    for result in results {
        let package = if prefix_paths {
            result.package_path()
        } else {
            None
        };
        tracing::trace!(lens = ?result.lens_id(), package = ?package, "folding lens result");

        if let Some(coverage) = &result.coverage {
            for entry in &coverage.files {
                file_coverage.insert(with_package_prefix(&entry.file, package), entry.lines);
            }
        }

        let Some(metrics) = result.file_metrics.as_ref().filter(|m| !m.is_empty()) else {
            continue;
        };
        let Some(lens_id) = result.lens_id() else {
            tracing::debug!(
                count = metrics.len(),
                "dropping file metrics from a result without a lens id"
            );
            continue;
        };
        file_metrics
            .entry(normalize_lens_id(lens_id))
            .or_default()
            .extend(metrics.iter().map(|m| FileMetricData {
                file: with_package_prefix(&m.file, package),
                ..m.clone()
            }));
    }

    ExtractedQualityData {
        file_coverage: (!file_coverage.is_empty()).then_some(file_coverage),
        file_metrics: (!file_metrics.is_empty()).then_some(file_metrics),
    }
}

/// Prepend `package/` to `path` unless it is already there.
///
/// An empty or `.` package means the repository root and adds nothing.
fn with_package_prefix(path: &str, package: Option<&str>) -> String {
    let package = package
        .map(|p| p.trim_end_matches('/'))
        .filter(|p| !p.is_empty() && *p != ".");
    match package {
        Some(package) => {
            let prefix = format!("{package}/");
            if path.starts_with(&prefix) {
                path.to_string()
            } else {
                prefix + path
            }
        }
        None => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn results(value: serde_json::Value) -> Vec<LensResultInput> {
        serde_json::from_value(value).unwrap()
    }

    fn metric(file: &str) -> serde_json::Value {
        json!({
            "file": file,
            "score": 90,
            "issueCount": 1,
            "errorCount": 0,
            "warningCount": 1,
            "infoCount": 0,
            "hintCount": 0
        })
    }

    #[test]
    fn test_extracts_coverage_and_metrics() {
        let input = results(json!([
            { "lens": { "id": "jest" }, "coverage": { "files": [{ "file": "a.ts", "lines": 80 }] } },
            { "lens": { "id": "eslint" }, "fileMetrics": [metric("a.ts")] }
        ]));
        let data = extract_quality_data(&input);

        let coverage = data.file_coverage.unwrap();
        assert_eq!(coverage.len(), 1);
        assert_eq!(coverage["a.ts"], 80.0);

        let metrics = data.file_metrics.unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics["eslint"].len(), 1);
        assert_eq!(metrics["eslint"][0].file, "a.ts");
        assert_eq!(metrics["eslint"][0].warning_count, 1);
    }

    #[test]
    fn test_empty_maps_are_absent() {
        let data = extract_quality_data(&[]);
        assert_eq!(data, ExtractedQualityData::default());

        let input = results(json!([
            { "lens": { "id": "eslint" }, "fileMetrics": [] },
            { "lens": { "id": "jest" }, "coverage": { "files": [] } }
        ]));
        let data = extract_quality_data(&input);
        assert!(data.file_coverage.is_none());
        assert!(data.file_metrics.is_none());

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_coverage_last_writer_wins() {
        let input = results(json!([
            { "coverage": { "files": [{ "file": "a.ts", "lines": 10 }] } },
            { "coverage": { "files": [{ "file": "a.ts", "lines": 60 }] } }
        ]));
        let coverage = extract_quality_data(&input).file_coverage.unwrap();
        assert_eq!(coverage["a.ts"], 60.0);
    }

    #[test]
    fn test_metrics_concatenate_under_normalized_id() {
        let input = results(json!([
            { "package": { "path": "packages/a" }, "lens": { "id": "LINT" }, "fileMetrics": [metric("x.ts")] },
            { "package": { "path": "packages/b" }, "lens": { "id": "eslint" }, "fileMetrics": [metric("x.ts"), metric("y.ts")] }
        ]));
        let metrics = extract_quality_data(&input).file_metrics.unwrap();
        let files: Vec<_> = metrics["eslint"].iter().map(|m| m.file.as_str()).collect();
        // no dedup by path
        assert_eq!(files, vec!["x.ts", "x.ts", "y.ts"]);
    }

    #[test]
    fn test_metrics_without_lens_id_are_dropped() {
        let input = results(json!([{ "fileMetrics": [metric("a.ts")] }]));
        assert!(extract_quality_data(&input).file_metrics.is_none());
    }

    #[test]
    fn test_lens_block_without_id_keeps_coverage() {
        let input = results(json!([
            {
                "lens": { "name": "Jest" },
                "coverage": { "files": [{ "file": "a.ts", "lines": 10 }] },
                "fileMetrics": [metric("a.ts")]
            }
        ]));
        let data = extract_quality_data(&input);
        assert_eq!(data.file_coverage.unwrap()["a.ts"], 10.0);
        assert!(data.file_metrics.is_none());
    }

    #[test]
    fn test_prefix_paths() {
        let input = results(json!([
            {
                "package": { "path": "packages/web" },
                "lens": { "id": "jest" },
                "coverage": { "files": [
                    { "file": "src/a.ts", "lines": 75 },
                    { "file": "packages/web/src/b.ts", "lines": 50 }
                ] }
            },
            {
                "package": { "path": "packages/api/" },
                "lens": { "id": "eslint" },
                "fileMetrics": [metric("index.ts")]
            },
            {
                "lens": { "id": "ruff" },
                "fileMetrics": [metric("tool.py")]
            }
        ]));

        let data = extract_quality_data_with_paths(&input, true);
        let coverage = data.file_coverage.unwrap();
        assert_eq!(coverage["packages/web/src/a.ts"], 75.0);
        assert_eq!(coverage["packages/web/src/b.ts"], 50.0);

        let metrics = data.file_metrics.unwrap();
        assert_eq!(metrics["eslint"][0].file, "packages/api/index.ts");
        assert_eq!(metrics["ruff"][0].file, "tool.py");

        // unprefixed extraction leaves paths alone
        let plain = extract_quality_data_with_paths(&input, false);
        assert!(plain.file_coverage.unwrap().contains_key("src/a.ts"));
    }

    #[test]
    fn test_with_package_prefix() {
        assert_eq!(with_package_prefix("a.ts", Some("pkg")), "pkg/a.ts");
        assert_eq!(with_package_prefix("pkg/a.ts", Some("pkg")), "pkg/a.ts");
        // prefix match is on the whole directory name
        assert_eq!(with_package_prefix("pkg2/a.ts", Some("pkg")), "pkg/pkg2/a.ts");
        assert_eq!(with_package_prefix("a.ts", Some(".")), "a.ts");
        assert_eq!(with_package_prefix("a.ts", Some("")), "a.ts");
        assert_eq!(with_package_prefix("a.ts", None), "a.ts");
    }
}
