//! Grouping & ordering policy
//!
//! Classifies every primitive into a named group, sorts each group with its
//! own comparator, and fixes the group emission order: known color families
//! first, then any discovered color families (alphabetical among
//! themselves), then the non-color categories. Names that match no group
//! are collected into a dropped list rather than silently vanishing.

pub mod ranks;
pub mod semantic;

use crate::tokens::table::ProcessedResult;
use serde::Serialize;
use std::collections::HashMap;

/// Color families with a fixed emission order.
pub(crate) const KNOWN_COLOR_GROUPS: &[&str] = &[
    "color-default",
    "color-gray",
    "color-primary",
    "color-secondary",
    "color-tertiary",
    "color-highlight",
    "color-accent",
];

/// Non-color categories, first prefix match wins. List order matters:
/// `font-family` must precede `font-size`, `spacing` must precede `size`.
pub(crate) const OTHER_GROUPS: &[&str] = &[
    "container",
    "header",
    "font-family",
    "border",
    "radii",
    "spacing",
    "size",
    "font-size",
    "surface",
    "text",
    "icon",
    "outline",
];

/// A named bucket of declarations destined for one contiguous region of
/// the output.
#[derive(Debug, Clone, Serialize)]
pub struct TokenGroup {
    pub name: String,
    pub entries: Vec<(String, String)>,
}

/// The fully ordered stylesheet structure, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedStylesheet {
    pub primitive_groups: Vec<TokenGroup>,
    /// Always the four semantic categories, in order; may hold empties.
    pub light_mode: Vec<TokenGroup>,
    pub dark_mode: Vec<TokenGroup>,
    /// Names that matched no group, in processing order.
    pub dropped: Vec<String>,
}

/// Group for a primitive name, or `None` when nothing matches.
///
/// A `color-` name always maps to its family group, discovered on the fly
/// when the family is not in the known list.
fn classify(name: &str) -> Option<String> {
    if let Some(rest) = name.strip_prefix("color-") {
        let family = rest.split('-').next().unwrap_or(rest);
        if family.is_empty() {
            return None;
        }
        return Some(format!("color-{}", family));
    }
    OTHER_GROUPS
        .iter()
        .find(|group| name.starts_with(*group))
        .map(|group| group.to_string())
}

/// Build the grouped structure from the processed tables.
pub fn group_tokens(result: &ProcessedResult) -> GroupedStylesheet {
    let mut buckets: HashMap<String, Vec<(String, String)>> = HashMap::new();
    let mut discovered: Vec<String> = Vec::new();
    let mut dropped: Vec<String> = Vec::new();

    for (name, value) in result.primitives.iter() {
        match classify(name) {
            Some(group) => {
                if group.starts_with("color-")
                    && !KNOWN_COLOR_GROUPS.contains(&group.as_str())
                    && !discovered.contains(&group)
                {
                    discovered.push(group.clone());
                }
                buckets
                    .entry(group)
                    .or_default()
                    .push((name.to_string(), value.to_string()));
            }
            None => dropped.push(name.to_string()),
        }
    }
    discovered.sort();

    let order = KNOWN_COLOR_GROUPS
        .iter()
        .map(|group| group.to_string())
        .chain(discovered)
        .chain(OTHER_GROUPS.iter().map(|group| group.to_string()));

    let mut primitive_groups = Vec::new();
    for name in order {
        if let Some(mut entries) = buckets.remove(&name) {
            entries.sort_by(|a, b| ranks::compare_within(&name, &a.0, &b.0));
            primitive_groups.push(TokenGroup { name, entries });
        }
    }

    let (light_mode, mode_dropped) = semantic::group_mode_tokens(&result.light_mode);
    dropped.extend(mode_dropped);
    let (dark_mode, mode_dropped) = semantic::group_mode_tokens(&result.dark_mode);
    dropped.extend(mode_dropped);

    GroupedStylesheet {
        primitive_groups,
        light_mode,
        dark_mode,
        dropped,
    }
}
