//! Lens lookups over the built-in registry.
//!
//! Everything preserves registry order unless stated otherwise.

use crate::model::{ColorScheme, Language, LensCategory, LensMetadata};
use crate::registry::lenses;

/// Look up a lens by exact id.
pub fn get_lens(id: &str) -> Option<&'static LensMetadata> {
    lenses().iter().find(|l| l.id == id)
}

pub fn lenses_by_category(category: LensCategory) -> Vec<&'static LensMetadata> {
    lenses().iter().filter(|l| l.category == category).collect()
}

pub fn lenses_by_language(language: Language) -> Vec<&'static LensMetadata> {
    lenses().iter().filter(|l| l.supports(language)).collect()
}

pub fn lenses_by_category_and_language(
    category: LensCategory,
    language: Language,
) -> Vec<&'static LensMetadata> {
    lenses()
        .iter()
        .filter(|l| l.category == category && l.supports(language))
        .collect()
}

/// Category of a lens, or `None` for an unknown id.
pub fn category_for_lens(id: &str) -> Option<LensCategory> {
    get_lens(id).map(|l| l.category)
}

/// Lenses interchangeable with `id`.
///
/// Lenses that name `id` as an alternative come first (registry order),
/// followed by the lenses `id` itself names. Each lens appears once.
pub fn alternatives_for(id: &str) -> Vec<&'static LensMetadata> {
    alternatives_in(lenses(), id)
}

/// [`alternatives_for`] over an arbitrary table.
pub fn alternatives_in<'a>(table: &'a [LensMetadata], id: &str) -> Vec<&'a LensMetadata> {
    let mut result: Vec<&LensMetadata> = table.iter().filter(|l| l.lists_alternative(id)).collect();

    if let Some(lens) = table.iter().find(|l| l.id == id) {
        let named = lens
            .alternative_to
            .iter()
            .filter_map(|a| table.iter().find(|l| l.id == *a));
        for alt in named {
            if !result.iter().any(|r| r.id == alt.id) {
                result.push(alt);
            }
        }
    }

    result
}

/// Whether two lenses are declared alternatives of each other.
///
/// Symmetric. Both ids must be known and share a category; a declaration
/// across categories does not count.
pub fn are_alternatives(id1: &str, id2: &str) -> bool {
    are_alternatives_in(lenses(), id1, id2)
}

/// [`are_alternatives`] over an arbitrary table.
pub fn are_alternatives_in(table: &[LensMetadata], id1: &str, id2: &str) -> bool {
    let find = |id: &str| table.iter().find(|l| l.id == id);
    let (Some(a), Some(b)) = (find(id1), find(id2)) else {
        return false;
    };
    a.category == b.category && (a.lists_alternative(b.id) || b.lists_alternative(a.id))
}

pub fn lenses_with_file_metrics() -> Vec<&'static LensMetadata> {
    lenses().iter().filter(|l| l.outputs_file_metrics).collect()
}

pub fn lenses_with_aggregates() -> Vec<&'static LensMetadata> {
    lenses().iter().filter(|l| l.outputs_aggregate).collect()
}

/// Display name of a lens, falling back to the id itself.
pub fn lens_display_name(id: &str) -> &str {
    get_lens(id).map_or(id, |l| l.name)
}

/// Color scheme of a lens, falling back to [`ColorScheme::Issues`].
pub fn lens_color_scheme(id: &str) -> ColorScheme {
    get_lens(id).map(|l| l.color_scheme).unwrap_or_default()
}

/// Whether `id` names a known lens.
pub fn is_valid_lens_id(id: &str) -> bool {
    get_lens(id).is_some()
}
