//! Registry self-consistency checks.
//!
//! The tables are hand-authored, so nothing stops a typo in an
//! `alternative_to` entry or a lens filed under the wrong category. These
//! checks are pure functions over slices; [`crate::lenses()`] runs them once
//! on the built-in tables and logs the result.

use crate::commands::{DefaultLensCommand, default_commands};
use crate::model::{CategoryConfig, Language, LanguageConfig, LensCategory, LensMetadata};
use crate::registry::{CATEGORY_CONFIGS, LANGUAGE_CONFIGS, LENSES};
use std::collections::HashSet;

/// A single inconsistency in registry data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryIssue {
    #[error("lens id `{0}` appears more than once")]
    DuplicateLensId(&'static str),

    #[error("lens `{0}` lists no languages")]
    NoLanguages(&'static str),

    #[error("lens `{lens}` lists unknown alternative `{alternative}`")]
    UnknownAlternative {
        lens: &'static str,
        alternative: &'static str,
    },

    #[error("lens `{0}` lists itself as an alternative")]
    SelfAlternative(&'static str),

    #[error("lens `{lens}` ({category}) lists `{alternative}` ({alternative_category}) as an alternative")]
    CrossCategoryAlternative {
        lens: &'static str,
        category: LensCategory,
        alternative: &'static str,
        alternative_category: LensCategory,
    },

    #[error("lens `{0}` has file-metrics requirements but does not output file metrics")]
    RequirementsWithoutFileMetrics(&'static str),

    #[error("no category config for `{0}`")]
    MissingCategoryConfig(LensCategory),

    #[error("no language config for `{0}`")]
    MissingLanguageConfig(Language),

    #[error("language `{0}` has no file extensions")]
    NoExtensions(Language),

    #[error("language `{language}` has malformed extension `{extension}`")]
    MalformedExtension {
        language: Language,
        extension: &'static str,
    },

    #[error("default command for `{language}` names unknown lens `{lens}`")]
    DefaultCommandUnknownLens {
        language: Language,
        lens: &'static str,
    },

    #[error("default command for `{language}` names lens `{lens}`, which does not support it")]
    DefaultCommandUnsupportedLanguage {
        language: Language,
        lens: &'static str,
    },
}

/// Every issue found in a registry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("lens registry has {} issue(s)", .0.len())]
pub struct RegistryIssues(pub Vec<RegistryIssue>);

/// Check lens, category and language tables against each other.
pub fn check_registry(
    lenses: &[LensMetadata],
    categories: &[CategoryConfig],
    languages: &[LanguageConfig],
) -> Vec<RegistryIssue> {
    let mut issues = Vec::new();
    let mut seen = HashSet::new();

    for lens in lenses {
        if !seen.insert(lens.id) {
            issues.push(RegistryIssue::DuplicateLensId(lens.id));
        }
        if lens.languages.is_empty() {
            issues.push(RegistryIssue::NoLanguages(lens.id));
        }
        if lens.file_metrics_requirements.is_some() && !lens.outputs_file_metrics {
            issues.push(RegistryIssue::RequirementsWithoutFileMetrics(lens.id));
        }
        for &alternative in lens.alternative_to {
            if alternative == lens.id {
                issues.push(RegistryIssue::SelfAlternative(lens.id));
                continue;
            }
            match lenses.iter().find(|l| l.id == alternative) {
                None => issues.push(RegistryIssue::UnknownAlternative {
                    lens: lens.id,
                    alternative,
                }),
                Some(other) if other.category != lens.category => {
                    issues.push(RegistryIssue::CrossCategoryAlternative {
                        lens: lens.id,
                        category: lens.category,
                        alternative,
                        alternative_category: other.category,
                    })
                }
                Some(_) => {}
            }
        }
    }

    for category in LensCategory::ALL {
        if !categories.iter().any(|c| c.id == category) {
            issues.push(RegistryIssue::MissingCategoryConfig(category));
        }
    }

    for language in Language::ALL {
        if !languages.iter().any(|l| l.id == language) {
            issues.push(RegistryIssue::MissingLanguageConfig(language));
        }
    }

    for config in languages {
        if config.extensions.is_empty() {
            issues.push(RegistryIssue::NoExtensions(config.id));
        }
        for &extension in config.extensions {
            let well_formed = extension.len() > 1
                && extension.starts_with('.')
                && !extension.chars().any(|c| c.is_ascii_uppercase());
            if !well_formed {
                issues.push(RegistryIssue::MalformedExtension {
                    language: config.id,
                    extension,
                });
            }
        }
    }

    issues
}

/// Check one language's default commands against the lens table.
pub fn check_default_commands(
    lenses: &[LensMetadata],
    language: Language,
    commands: &[DefaultLensCommand],
) -> Vec<RegistryIssue> {
    commands
        .iter()
        .filter_map(|cmd| match lenses.iter().find(|l| l.id == cmd.lens_id) {
            None => Some(RegistryIssue::DefaultCommandUnknownLens {
                language,
                lens: cmd.lens_id,
            }),
            Some(lens) if !lens.supports(language) => {
                Some(RegistryIssue::DefaultCommandUnsupportedLanguage {
                    language,
                    lens: cmd.lens_id,
                })
            }
            Some(_) => None,
        })
        .collect()
}

/// All issues in the built-in tables.
///
/// Reads the statics directly; [`crate::lenses()`] calls this while
/// initializing.
pub(crate) fn check_builtin() -> Vec<RegistryIssue> {
    let mut issues = check_registry(LENSES, CATEGORY_CONFIGS, LANGUAGE_CONFIGS);
    for language in Language::ALL {
        issues.extend(check_default_commands(
            LENSES,
            language,
            default_commands(language),
        ));
    }
    issues
}

/// Verify the built-in tables, for startup assertions and tests.
pub fn verify_builtin_registry() -> Result<(), RegistryIssues> {
    let issues = check_builtin();
    if issues.is_empty() {
        Ok(())
    } else {
        Err(RegistryIssues(issues))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorScheme;

    const fn stub(
        id: &'static str,
        category: LensCategory,
        alternative_to: &'static [&'static str],
    ) -> LensMetadata {
        LensMetadata {
            id,
            name: id,
            category,
            languages: &[Language::Python],
            alternative_to,
            outputs_file_metrics: true,
            outputs_aggregate: true,
            color_scheme: ColorScheme::Issues,
            description: None,
            command: None,
            file_metrics_requirements: None,
        }
    }

    #[test]
    fn test_builtin_registry_is_consistent() {
        if let Err(e) = verify_builtin_registry() {
            panic!("{e}: {:?}", e.0);
        }
    }

    #[test]
    fn test_detects_alternative_problems() {
        let lenses = [
            stub("a", LensCategory::Linting, &["b", "missing", "a"]),
            stub("b", LensCategory::Formatting, &[]),
            stub("a", LensCategory::Linting, &[]),
        ];
        let issues = check_registry(&lenses, CATEGORY_CONFIGS, LANGUAGE_CONFIGS);
        assert!(issues.contains(&RegistryIssue::CrossCategoryAlternative {
            lens: "a",
            category: LensCategory::Linting,
            alternative: "b",
            alternative_category: LensCategory::Formatting,
        }));
        assert!(issues.contains(&RegistryIssue::UnknownAlternative {
            lens: "a",
            alternative: "missing",
        }));
        assert!(issues.contains(&RegistryIssue::SelfAlternative("a")));
        assert!(issues.contains(&RegistryIssue::DuplicateLensId("a")));
    }

    #[test]
    fn test_detects_missing_configs_and_bad_extensions() {
        let languages = [LanguageConfig {
            id: Language::Python,
            name: "Python",
            extensions: &["py", ".PY"],
            icon: None,
        }];
        let issues = check_registry(&[], &CATEGORY_CONFIGS[..2], &languages);
        assert!(issues.contains(&RegistryIssue::MissingCategoryConfig(LensCategory::Types)));
        assert!(issues.contains(&RegistryIssue::MissingLanguageConfig(Language::Rust)));
        assert!(issues.contains(&RegistryIssue::MalformedExtension {
            language: Language::Python,
            extension: "py",
        }));
        assert!(issues.contains(&RegistryIssue::MalformedExtension {
            language: Language::Python,
            extension: ".PY",
        }));
    }

    #[test]
    fn test_detects_bad_default_commands() {
        let lenses = [stub("ruff", LensCategory::Linting, &[])];
        let commands = [
            DefaultLensCommand {
                lens_id: "ruff",
                command: "ruff check .",
                args: &[],
                description: "",
            },
            DefaultLensCommand {
                lens_id: "ghost",
                command: "ghost",
                args: &[],
                description: "",
            },
        ];
        let issues = check_default_commands(&lenses, Language::Go, &commands);
        assert_eq!(
            issues,
            vec![
                RegistryIssue::DefaultCommandUnsupportedLanguage {
                    language: Language::Go,
                    lens: "ruff",
                },
                RegistryIssue::DefaultCommandUnknownLens {
                    language: Language::Go,
                    lens: "ghost",
                },
            ]
        );
    }

    #[test]
    fn test_issue_messages() {
        let issue = RegistryIssue::UnknownAlternative {
            lens: "a",
            alternative: "b",
        };
        assert_eq!(issue.to_string(), "lens `a` lists unknown alternative `b`");
        let all = RegistryIssues(vec![issue]);
        assert_eq!(all.to_string(), "lens registry has 1 issue(s)");
    }
}
