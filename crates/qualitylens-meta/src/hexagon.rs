//! Mapping between hexagon summary metrics and lens categories.
//!
//! The hexagon display names its six axes in camelCase; categories are
//! kebab-case. Security and complexity have no axis.

use crate::lookup::category_for_lens;
use crate::model::{LensCategory, ParseError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HexagonMetricKey {
    Linting,
    Formatting,
    Types,
    Tests,
    DeadCode,
    Documentation,
}

impl HexagonMetricKey {
    pub const ALL: [HexagonMetricKey; 6] = [
        HexagonMetricKey::Linting,
        HexagonMetricKey::Formatting,
        HexagonMetricKey::Types,
        HexagonMetricKey::Tests,
        HexagonMetricKey::DeadCode,
        HexagonMetricKey::Documentation,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            HexagonMetricKey::Linting => "linting",
            HexagonMetricKey::Formatting => "formatting",
            HexagonMetricKey::Types => "types",
            HexagonMetricKey::Tests => "tests",
            HexagonMetricKey::DeadCode => "deadCode",
            HexagonMetricKey::Documentation => "documentation",
        }
    }

    pub const fn category(self) -> LensCategory {
        match self {
            HexagonMetricKey::Linting => LensCategory::Linting,
            HexagonMetricKey::Formatting => LensCategory::Formatting,
            HexagonMetricKey::Types => LensCategory::Types,
            HexagonMetricKey::Tests => LensCategory::Tests,
            HexagonMetricKey::DeadCode => LensCategory::DeadCode,
            HexagonMetricKey::Documentation => LensCategory::Documentation,
        }
    }

    /// Axis for a category, if it has one.
    pub const fn from_category(category: LensCategory) -> Option<Self> {
        match category {
            LensCategory::Linting => Some(HexagonMetricKey::Linting),
            LensCategory::Formatting => Some(HexagonMetricKey::Formatting),
            LensCategory::Types => Some(HexagonMetricKey::Types),
            LensCategory::Tests => Some(HexagonMetricKey::Tests),
            LensCategory::DeadCode => Some(HexagonMetricKey::DeadCode),
            LensCategory::Documentation => Some(HexagonMetricKey::Documentation),
            LensCategory::Security | LensCategory::Complexity => None,
        }
    }
}

impl fmt::Display for HexagonMetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HexagonMetricKey {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HexagonMetricKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ParseError::UnknownHexagonMetric(s.to_string()))
    }
}

/// Whether lens `id` feeds the given hexagon axis.
pub fn is_lens_in_hexagon_metric(id: &str, metric: HexagonMetricKey) -> bool {
    category_for_lens(id) == Some(metric.category())
}

/// Whether any lens for `metric` was configured to run.
///
/// `None` means the run predates lens tracking and is treated as fully
/// configured. `Some(&[])` means nothing ran.
pub fn is_hexagon_metric_configured(metric: HexagonMetricKey, lenses_ran: Option<&[&str]>) -> bool {
    match lenses_ran {
        None => true,
        Some(ran) => ran.iter().any(|id| is_lens_in_hexagon_metric(id, metric)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_and_reverse_mapping_agree() {
        for key in HexagonMetricKey::ALL {
            assert_eq!(HexagonMetricKey::from_category(key.category()), Some(key));
        }
        assert_eq!(HexagonMetricKey::from_category(LensCategory::Security), None);
        assert_eq!(HexagonMetricKey::from_category(LensCategory::Complexity), None);
    }

    #[test]
    fn test_dead_code_naming() {
        assert_eq!(HexagonMetricKey::DeadCode.as_str(), "deadCode");
        assert_eq!(HexagonMetricKey::DeadCode.category().as_str(), "dead-code");
        assert_eq!("deadCode".parse::<HexagonMetricKey>(), Ok(HexagonMetricKey::DeadCode));
        assert!("dead-code".parse::<HexagonMetricKey>().is_err());
    }

    #[test]
    fn test_is_lens_in_hexagon_metric() {
        assert!(is_lens_in_hexagon_metric("knip", HexagonMetricKey::DeadCode));
        assert!(!is_lens_in_hexagon_metric("knip", HexagonMetricKey::Linting));
        assert!(!is_lens_in_hexagon_metric("unknown", HexagonMetricKey::Linting));
    }

    #[test]
    fn test_is_hexagon_metric_configured() {
        let metric = HexagonMetricKey::Linting;
        assert!(is_hexagon_metric_configured(metric, None));
        assert!(!is_hexagon_metric_configured(metric, Some(&[])));
        assert!(is_hexagon_metric_configured(metric, Some(&["eslint"])));
        assert!(!is_hexagon_metric_configured(metric, Some(&["jest"])));
    }
}
