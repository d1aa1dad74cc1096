//! Built-in lens, category and language tables.
//!
//! The tables are immutable statics. The first call to [`lenses()`] runs the
//! consistency check once and logs anything it finds; lookups never fail
//! because of it.

use crate::model::{
    CategoryConfig, ColorScheme, FallbackStrategy, FileMetricsRequirements, Language,
    LanguageConfig, LensCategory, LensMetadata,
};
use std::sync::OnceLock;

static CHECKED: OnceLock<()> = OnceLock::new();

/// All built-in lenses, in registry order.
pub fn lenses() -> &'static [LensMetadata] {
    CHECKED.get_or_init(|| {
        for issue in crate::consistency::check_builtin() {
            tracing::warn!(%issue, "lens registry inconsistency");
        }
    });
    LENSES
}

/// Display configuration for every category.
pub fn category_configs() -> &'static [CategoryConfig] {
    CATEGORY_CONFIGS
}

/// Display configuration for every language.
pub fn language_configs() -> &'static [LanguageConfig] {
    LANGUAGE_CONFIGS
}

const TS: &[Language] = &[Language::TypeScript];
const JS_TS: &[Language] = &[Language::TypeScript, Language::JavaScript];
const PY: &[Language] = &[Language::Python];
const RUST: &[Language] = &[Language::Rust];
const GO: &[Language] = &[Language::Go];
const ALL_LANGUAGES: &[Language] = &Language::ALL;

/// Defaults shared by most lenses: per-file and aggregate output, issue coloring.
const fn lens(
    id: &'static str,
    name: &'static str,
    category: LensCategory,
    languages: &'static [Language],
) -> LensMetadata {
    LensMetadata {
        id,
        name,
        category,
        languages,
        alternative_to: &[],
        outputs_file_metrics: true,
        outputs_aggregate: true,
        color_scheme: ColorScheme::Issues,
        description: None,
        command: None,
        file_metrics_requirements: None,
    }
}

const fn requires(
    command: &'static str,
    fallback: FallbackStrategy,
    reports_all_files: bool,
) -> Option<FileMetricsRequirements> {
    Some(FileMetricsRequirements {
        command,
        fallback,
        reports_all_files,
    })
}

pub(crate) static LENSES: &[LensMetadata] = &[
    // Linting
    LensMetadata {
        description: Some("Pluggable linter for JavaScript and TypeScript"),
        command: Some("eslint ."),
        file_metrics_requirements: requires("eslint . --format json", FallbackStrategy::None, true),
        ..lens("eslint", "ESLint", LensCategory::Linting, JS_TS)
    },
    LensMetadata {
        alternative_to: &["eslint"],
        description: Some("Fast linter from the Biome toolchain"),
        command: Some("biome lint ."),
        file_metrics_requirements: requires(
            "biome lint --reporter=json .",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("biome-lint", "Biome Lint", LensCategory::Linting, JS_TS)
    },
    LensMetadata {
        alternative_to: &["eslint"],
        description: Some("Oxc linter"),
        command: Some("oxlint"),
        file_metrics_requirements: requires(
            "oxlint --format json",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("oxlint", "Oxlint", LensCategory::Linting, JS_TS)
    },
    LensMetadata {
        description: Some("Python linter written in Rust"),
        command: Some("ruff check ."),
        file_metrics_requirements: requires(
            "ruff check --output-format json .",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("ruff", "Ruff", LensCategory::Linting, PY)
    },
    LensMetadata {
        alternative_to: &["ruff"],
        command: Some("pylint ."),
        file_metrics_requirements: requires(
            "pylint --output-format=json .",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("pylint", "Pylint", LensCategory::Linting, PY)
    },
    LensMetadata {
        description: Some("Rust lints via cargo clippy"),
        command: Some("cargo clippy"),
        file_metrics_requirements: requires(
            "cargo clippy --message-format=json",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("clippy", "Clippy", LensCategory::Linting, RUST)
    },
    LensMetadata {
        command: Some("golangci-lint run"),
        file_metrics_requirements: requires(
            "golangci-lint run --out-format json",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("golangci-lint", "golangci-lint", LensCategory::Linting, GO)
    },
    // Formatting
    LensMetadata {
        color_scheme: ColorScheme::Binary,
        description: Some("Opinionated code formatter"),
        command: Some("prettier --check ."),
        file_metrics_requirements: requires(
            "prettier --list-different .",
            FallbackStrategy::ListSourceFiles,
            false,
        ),
        ..lens("prettier", "Prettier", LensCategory::Formatting, JS_TS)
    },
    LensMetadata {
        alternative_to: &["prettier"],
        color_scheme: ColorScheme::Binary,
        command: Some("biome format ."),
        file_metrics_requirements: requires(
            "biome format --reporter=json .",
            FallbackStrategy::ListSourceFiles,
            false,
        ),
        ..lens("biome-format", "Biome Format", LensCategory::Formatting, JS_TS)
    },
    LensMetadata {
        color_scheme: ColorScheme::Binary,
        command: Some("ruff format --check ."),
        file_metrics_requirements: requires(
            "ruff format --check .",
            FallbackStrategy::ListSourceFiles,
            false,
        ),
        ..lens("ruff-format", "Ruff Format", LensCategory::Formatting, PY)
    },
    LensMetadata {
        alternative_to: &["ruff-format"],
        color_scheme: ColorScheme::Binary,
        command: Some("black --check ."),
        file_metrics_requirements: requires(
            "black --check .",
            FallbackStrategy::ListSourceFiles,
            false,
        ),
        ..lens("black", "Black", LensCategory::Formatting, PY)
    },
    LensMetadata {
        color_scheme: ColorScheme::Binary,
        command: Some("cargo fmt --check"),
        file_metrics_requirements: requires(
            "cargo fmt --check -- --files-with-diff",
            FallbackStrategy::ListSourceFiles,
            false,
        ),
        ..lens("rustfmt", "rustfmt", LensCategory::Formatting, RUST)
    },
    LensMetadata {
        color_scheme: ColorScheme::Binary,
        command: Some("gofmt -l ."),
        file_metrics_requirements: requires("gofmt -l .", FallbackStrategy::ListSourceFiles, false),
        ..lens("gofmt", "gofmt", LensCategory::Formatting, GO)
    },
    // Types
    LensMetadata {
        description: Some("TypeScript compiler in type-check mode"),
        command: Some("tsc --noEmit"),
        file_metrics_requirements: requires(
            "tsc --noEmit --pretty false",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("typescript", "TypeScript", LensCategory::Types, TS)
    },
    LensMetadata {
        command: Some("mypy ."),
        file_metrics_requirements: requires(
            "mypy --output json .",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("mypy", "mypy", LensCategory::Types, PY)
    },
    LensMetadata {
        alternative_to: &["mypy"],
        command: Some("pyright"),
        file_metrics_requirements: requires(
            "pyright --outputjson",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("pyright", "Pyright", LensCategory::Types, PY)
    },
    // Tests
    LensMetadata {
        color_scheme: ColorScheme::Coverage,
        description: Some("JavaScript test runner with built-in coverage"),
        command: Some("jest --coverage"),
        file_metrics_requirements: requires(
            "jest --coverage --coverageReporters=json-summary",
            FallbackStrategy::ListSourceFiles,
            false,
        ),
        ..lens("jest", "Jest", LensCategory::Tests, JS_TS)
    },
    LensMetadata {
        alternative_to: &["jest"],
        color_scheme: ColorScheme::Coverage,
        command: Some("vitest run --coverage"),
        file_metrics_requirements: requires(
            "vitest run --coverage --coverage.reporter=json-summary",
            FallbackStrategy::ListSourceFiles,
            false,
        ),
        ..lens("vitest", "Vitest", LensCategory::Tests, JS_TS)
    },
    LensMetadata {
        color_scheme: ColorScheme::Coverage,
        command: Some("pytest --cov"),
        file_metrics_requirements: requires(
            "pytest --cov --cov-report=json",
            FallbackStrategy::ListSourceFiles,
            false,
        ),
        ..lens("pytest", "pytest", LensCategory::Tests, PY)
    },
    LensMetadata {
        outputs_file_metrics: false,
        color_scheme: ColorScheme::Coverage,
        description: Some("Rust test harness (pass/fail totals only)"),
        command: Some("cargo test"),
        ..lens("cargo-test", "cargo test", LensCategory::Tests, RUST)
    },
    LensMetadata {
        color_scheme: ColorScheme::Coverage,
        command: Some("go test ./..."),
        file_metrics_requirements: requires(
            "go test -coverprofile=coverage.out ./...",
            FallbackStrategy::ListSourceFiles,
            false,
        ),
        ..lens("go-test", "go test", LensCategory::Tests, GO)
    },
    // Dead code
    LensMetadata {
        description: Some("Finds unused files, exports and dependencies"),
        command: Some("knip"),
        file_metrics_requirements: requires(
            "knip --reporter json",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("knip", "Knip", LensCategory::DeadCode, JS_TS)
    },
    LensMetadata {
        alternative_to: &["knip"],
        command: Some("ts-prune"),
        file_metrics_requirements: requires("ts-prune", FallbackStrategy::AssumeClean, false),
        ..lens("ts-prune", "ts-prune", LensCategory::DeadCode, TS)
    },
    LensMetadata {
        command: Some("vulture ."),
        file_metrics_requirements: requires("vulture .", FallbackStrategy::AssumeClean, false),
        ..lens("vulture", "Vulture", LensCategory::DeadCode, PY)
    },
    // Documentation
    LensMetadata {
        command: Some("typedoc --emit none"),
        file_metrics_requirements: requires(
            "typedoc --emit none --validation.notDocumented",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("typedoc", "TypeDoc", LensCategory::Documentation, TS)
    },
    LensMetadata {
        color_scheme: ColorScheme::Coverage,
        description: Some("Docstring coverage for Python"),
        command: Some("interrogate ."),
        file_metrics_requirements: requires("interrogate -vv .", FallbackStrategy::None, true),
        ..lens("interrogate", "interrogate", LensCategory::Documentation, PY)
    },
    // Security
    LensMetadata {
        description: Some("Pattern-based static analysis for security issues"),
        command: Some("semgrep scan"),
        file_metrics_requirements: requires(
            "semgrep scan --json",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("semgrep", "Semgrep", LensCategory::Security, ALL_LANGUAGES)
    },
    LensMetadata {
        command: Some("bandit -r ."),
        file_metrics_requirements: requires(
            "bandit -r . -f json",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("bandit", "Bandit", LensCategory::Security, PY)
    },
    LensMetadata {
        outputs_file_metrics: false,
        description: Some("Known vulnerabilities in npm dependencies"),
        command: Some("npm audit --json"),
        ..lens("npm-audit", "npm audit", LensCategory::Security, JS_TS)
    },
    LensMetadata {
        outputs_file_metrics: false,
        command: Some("cargo audit --json"),
        ..lens("cargo-audit", "cargo audit", LensCategory::Security, RUST)
    },
    LensMetadata {
        command: Some("gosec ./..."),
        file_metrics_requirements: requires(
            "gosec -fmt=json ./...",
            FallbackStrategy::AssumeClean,
            false,
        ),
        ..lens("gosec", "gosec", LensCategory::Security, GO)
    },
    // Complexity
    LensMetadata {
        description: Some("Cyclomatic complexity analyzer for many languages"),
        command: Some("lizard ."),
        file_metrics_requirements: requires("lizard --csv .", FallbackStrategy::None, true),
        ..lens("lizard", "Lizard", LensCategory::Complexity, ALL_LANGUAGES)
    },
    LensMetadata {
        alternative_to: &["lizard"],
        command: Some("radon cc ."),
        file_metrics_requirements: requires("radon cc --json .", FallbackStrategy::None, true),
        ..lens("radon", "Radon", LensCategory::Complexity, PY)
    },
];

pub(crate) static CATEGORY_CONFIGS: &[CategoryConfig] = &[
    CategoryConfig {
        id: LensCategory::Linting,
        name: "Linting",
        description: "Style and correctness issues reported by linters",
        icon: Some("🔍"),
        inverted_scale: None,
    },
    CategoryConfig {
        id: LensCategory::Formatting,
        name: "Formatting",
        description: "Files that differ from the configured formatter's output",
        icon: Some("✨"),
        inverted_scale: None,
    },
    CategoryConfig {
        id: LensCategory::Types,
        name: "Type Safety",
        description: "Errors reported by type checkers",
        icon: Some("🏷️"),
        inverted_scale: None,
    },
    CategoryConfig {
        id: LensCategory::Tests,
        name: "Test Coverage",
        description: "Line coverage collected from test runs",
        icon: Some("🧪"),
        inverted_scale: None,
    },
    CategoryConfig {
        id: LensCategory::DeadCode,
        name: "Dead Code",
        description: "Unused files, exports and dependencies",
        icon: Some("🧹"),
        inverted_scale: Some(true),
    },
    CategoryConfig {
        id: LensCategory::Documentation,
        name: "Documentation",
        description: "Missing or incomplete documentation",
        icon: Some("📚"),
        inverted_scale: None,
    },
    CategoryConfig {
        id: LensCategory::Security,
        name: "Security",
        description: "Vulnerable dependencies and insecure code patterns",
        icon: Some("🔒"),
        inverted_scale: None,
    },
    CategoryConfig {
        id: LensCategory::Complexity,
        name: "Complexity",
        description: "Cyclomatic and cognitive complexity",
        icon: Some("🧠"),
        inverted_scale: Some(true),
    },
];

pub(crate) static LANGUAGE_CONFIGS: &[LanguageConfig] = &[
    LanguageConfig {
        id: Language::TypeScript,
        name: "TypeScript",
        extensions: &[".ts", ".tsx", ".mts", ".cts"],
        icon: Some("🔷"),
    },
    LanguageConfig {
        id: Language::JavaScript,
        name: "JavaScript",
        extensions: &[".js", ".jsx", ".mjs", ".cjs"],
        icon: Some("🟨"),
    },
    LanguageConfig {
        id: Language::Python,
        name: "Python",
        extensions: &[".py", ".pyi"],
        icon: Some("🐍"),
    },
    LanguageConfig {
        id: Language::Rust,
        name: "Rust",
        extensions: &[".rs"],
        icon: Some("🦀"),
    },
    LanguageConfig {
        id: Language::Go,
        name: "Go",
        extensions: &[".go"],
        icon: Some("🐹"),
    },
];
