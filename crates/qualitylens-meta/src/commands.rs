//! Recommended invocations per language.
//!
//! These are what a CLI suggests when scaffolding a `lenses.yaml` for a
//! project; they are not used to run anything here.

use crate::model::Language;
use serde::Serialize;

/// Recommended shell invocation of a lens for one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultLensCommand {
    pub lens_id: &'static str,
    pub command: &'static str,
    /// Extra CLI flags appended to `command`.
    #[serde(skip_serializing_if = "crate::model::is_empty_slice")]
    pub args: &'static [&'static str],
    pub description: &'static str,
}

impl DefaultLensCommand {
    /// `command` followed by `args`, space separated.
    pub fn full_command(&self) -> String {
        let mut full = self.command.to_string();
        for arg in self.args {
            full.push(' ');
            full.push_str(arg);
        }
        full
    }
}

const fn cmd(
    lens_id: &'static str,
    command: &'static str,
    args: &'static [&'static str],
    description: &'static str,
) -> DefaultLensCommand {
    DefaultLensCommand {
        lens_id,
        command,
        args,
        description,
    }
}

#[rustfmt::skip]
static TYPESCRIPT: &[DefaultLensCommand] = &[
    cmd("eslint", "npx eslint .", &["--format", "json"], "Lint with ESLint"),
    cmd("prettier", "npx prettier --check .", &[], "Check formatting with Prettier"),
    cmd("typescript", "npx tsc --noEmit", &["--pretty", "false"], "Type-check with tsc"),
    cmd("jest", "npx jest --coverage", &["--coverageReporters=json-summary"], "Run tests with coverage"),
    cmd("knip", "npx knip", &["--reporter", "json"], "Find unused files and exports"),
    cmd("typedoc", "npx typedoc --emit none", &["--validation.notDocumented"], "Report undocumented exports"),
    cmd("npm-audit", "npm audit", &["--json"], "Audit npm dependencies"),
];

#[rustfmt::skip]
static JAVASCRIPT: &[DefaultLensCommand] = &[
    cmd("eslint", "npx eslint .", &["--format", "json"], "Lint with ESLint"),
    cmd("prettier", "npx prettier --check .", &[], "Check formatting with Prettier"),
    cmd("jest", "npx jest --coverage", &["--coverageReporters=json-summary"], "Run tests with coverage"),
    cmd("knip", "npx knip", &["--reporter", "json"], "Find unused files and exports"),
    cmd("npm-audit", "npm audit", &["--json"], "Audit npm dependencies"),
];

#[rustfmt::skip]
static PYTHON: &[DefaultLensCommand] = &[
    cmd("ruff", "ruff check .", &["--output-format", "json"], "Lint with Ruff"),
    cmd("ruff-format", "ruff format --check .", &[], "Check formatting with Ruff"),
    cmd("mypy", "mypy .", &["--output", "json"], "Type-check with mypy"),
    cmd("pytest", "pytest --cov", &["--cov-report=json"], "Run tests with coverage"),
    cmd("vulture", "vulture .", &[], "Find unused code"),
    cmd("interrogate", "interrogate .", &["-vv"], "Measure docstring coverage"),
    cmd("bandit", "bandit -r .", &["-f", "json"], "Scan for common security issues"),
    cmd("radon", "radon cc .", &["--json"], "Measure cyclomatic complexity"),
];

#[rustfmt::skip]
static RUST: &[DefaultLensCommand] = &[
    cmd("clippy", "cargo clippy", &["--message-format=json"], "Lint with Clippy"),
    cmd("rustfmt", "cargo fmt --check", &[], "Check formatting with rustfmt"),
    cmd("cargo-test", "cargo test", &[], "Run the test suite"),
    cmd("cargo-audit", "cargo audit", &["--json"], "Audit crate dependencies"),
];

#[rustfmt::skip]
static GO: &[DefaultLensCommand] = &[
    cmd("golangci-lint", "golangci-lint run", &["--out-format", "json"], "Lint with golangci-lint"),
    cmd("gofmt", "gofmt -l .", &[], "List files needing gofmt"),
    cmd("go-test", "go test ./...", &["-coverprofile=coverage.out"], "Run tests with coverage"),
    cmd("gosec", "gosec ./...", &["-fmt=json"], "Scan for security issues"),
];

/// Recommended lens commands for a language, in suggestion order.
pub fn default_commands(language: Language) -> &'static [DefaultLensCommand] {
    match language {
        Language::TypeScript => TYPESCRIPT,
        Language::JavaScript => JAVASCRIPT,
        Language::Python => PYTHON,
        Language::Rust => RUST,
        Language::Go => GO,
    }
}

/// Recommended command for one lens in one language.
pub fn default_command(language: Language, lens_id: &str) -> Option<&'static DefaultLensCommand> {
    default_commands(language)
        .iter()
        .find(|c| c.lens_id == lens_id)
}
