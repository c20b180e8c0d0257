//! Light/dark semantic token ordering
//!
//! Mode variables group into four fixed categories, emitted in `surface,
//! text, icon, outline` order. Inside a category a known-suffix rank list
//! fixes the order; unknown suffixes follow all known ones, alphabetical by
//! base name with the `default, hover, active` state order inside a base.

use crate::tokens::grouping::TokenGroup;
use crate::tokens::table::VariableTable;
use std::cmp::Ordering;

pub(crate) const MODE_CATEGORIES: &[&str] = &["surface", "text", "icon", "outline"];

const SURFACE_RANK: &[&str] = &[
    "background",
    "background-0",
    "primary-default",
    "primary-hover",
    "primary-active",
    "secondary-default",
    "secondary-hover",
    "secondary-active",
    "tertiary-default",
    "tertiary-hover",
    "tertiary-active",
    "disabled",
];

const TEXT_RANK: &[&str] = &[
    "primary",
    "secondary",
    "tertiary",
    "placeholder",
    "disabled",
    "inverse",
    "link-default",
    "link-hover",
    "link-active",
];

const ICON_RANK: &[&str] = &["primary", "secondary", "tertiary", "disabled", "inverse"];

const OUTLINE_RANK: &[&str] = &["default", "hover", "active", "focus", "disabled"];

fn rank_table(category: &str) -> &'static [&'static str] {
    match category {
        "surface" => SURFACE_RANK,
        "text" => TEXT_RANK,
        "icon" => ICON_RANK,
        _ => OUTLINE_RANK,
    }
}

/// Interaction states recognized on unknown suffixes; a missing state reads
/// as `default`.
const STATE_ORDER: &[&str] = &["-default", "-hover", "-active"];

fn split_state(suffix: &str) -> (&str, usize) {
    for (at, state) in STATE_ORDER.iter().enumerate() {
        if let Some(base) = suffix.strip_suffix(state) {
            return (base, at);
        }
    }
    (suffix, 0)
}

fn category_suffix<'a>(category: &str, name: &'a str) -> &'a str {
    name.strip_prefix(category)
        .map(|rest| rest.strip_prefix('-').unwrap_or(rest))
        .unwrap_or(name)
}

fn compare_in_category(category: &str, a: &str, b: &str) -> Ordering {
    let table = rank_table(category);
    let a_suffix = category_suffix(category, a);
    let b_suffix = category_suffix(category, b);
    let rank = |suffix: &str| table.iter().position(|entry| *entry == suffix);
    match (rank(a_suffix), rank(b_suffix)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => {
            let (a_base, a_state) = split_state(a_suffix);
            let (b_base, b_state) = split_state(b_suffix);
            a_base.cmp(b_base).then(a_state.cmp(&b_state))
        }
    }
}

/// Bucket a mode table into the four categories, sorted. Names matching no
/// category are returned as dropped.
pub(crate) fn group_mode_tokens(table: &VariableTable) -> (Vec<TokenGroup>, Vec<String>) {
    let mut groups = Vec::with_capacity(MODE_CATEGORIES.len());
    for category in MODE_CATEGORIES {
        let mut entries: Vec<(String, String)> = table
            .iter()
            .filter(|(name, _)| name.starts_with(category))
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();
        entries.sort_by(|a, b| compare_in_category(category, &a.0, &b.0));
        groups.push(TokenGroup {
            name: category.to_string(),
            entries,
        });
    }

    let dropped = table
        .iter()
        .filter(|(name, _)| !MODE_CATEGORIES.iter().any(|c| name.starts_with(c)))
        .map(|(name, _)| name.to_string())
        .collect();

    (groups, dropped)
}
