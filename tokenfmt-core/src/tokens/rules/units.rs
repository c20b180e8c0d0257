//! Unit normalization helpers for the rewrite rules.

use crate::tokens::table::VariableTable;
use once_cell::sync::Lazy;
use regex::Regex;

/// Literal `0rem` collapses to the unitless `0`.
pub fn normalize_zero_rem(value: &str) -> String {
    if value == "0rem" {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Literal `0px` collapses to the unitless `0`.
pub fn normalize_zero_px(value: &str) -> String {
    if value == "0px" {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// A reference to a raw typography token, e.g. `var(--typography-font-sans)`.
static TYPOGRAPHY_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^var\(--(typography-font-[^)]+)\)$").unwrap());

/// Resolve a `var(--typography-font-…)` value to the referenced literal.
///
/// Resolution is a single hop: the referenced raw value is substituted
/// as-is, without following further references. Anything else is returned
/// unchanged.
pub fn resolve_font_family_reference(value: &str, raw: &VariableTable) -> String {
    if let Some(caps) = TYPOGRAPHY_REFERENCE.captures(value.trim()) {
        if let Some(resolved) = raw.get(caps[1].trim()) {
            return resolved.to_string();
        }
    }
    value.to_string()
}
