//! Category and language projections.

use crate::model::{CategoryConfig, Language, LanguageConfig, LensCategory};
use crate::registry::{category_configs, language_configs, lenses};

pub fn category_config(category: LensCategory) -> Option<&'static CategoryConfig> {
    category_configs().iter().find(|c| c.id == category)
}

/// Display name, falling back to the kebab-case id.
pub fn category_display_name(category: LensCategory) -> &'static str {
    category_config(category).map_or(category.as_str(), |c| c.name)
}

pub fn category_description(category: LensCategory) -> Option<&'static str> {
    category_config(category).map(|c| c.description)
}

pub fn category_icon(category: LensCategory) -> Option<&'static str> {
    category_config(category).and_then(|c| c.icon)
}

/// Whether lower raw values are better for this category. Defaults to false.
pub fn is_inverted_scale(category: LensCategory) -> bool {
    category_config(category)
        .and_then(|c| c.inverted_scale)
        .unwrap_or(false)
}

pub fn language_config(language: Language) -> Option<&'static LanguageConfig> {
    language_configs().iter().find(|l| l.id == language)
}

/// Display name, falling back to the lower-case id.
pub fn language_display_name(language: Language) -> &'static str {
    language_config(language).map_or(language.as_str(), |l| l.name)
}

pub fn language_extensions(language: Language) -> &'static [&'static str] {
    language_config(language)
        .map(|l| l.extensions)
        .unwrap_or_default()
}

/// Detect a language from a file extension.
///
/// Accepts `py`, `.py` or `.PY`; matches the whole extension only.
pub fn detect_language_from_extension(ext: &str) -> Option<Language> {
    let lower = ext.to_ascii_lowercase();
    let normalized = if lower.starts_with('.') {
        lower
    } else {
        format!(".{lower}")
    };
    language_configs()
        .iter()
        .find(|l| l.extensions.contains(&normalized.as_str()))
        .map(|l| l.id)
}

/// Every language covered by some lens in `category`, first-seen order.
pub fn languages_for_category(category: LensCategory) -> Vec<Language> {
    let mut languages = Vec::new();
    for lens in lenses().iter().filter(|l| l.category == category) {
        for &language in lens.languages {
            if !languages.contains(&language) {
                languages.push(language);
            }
        }
    }
    languages
}
