//! Name simplification
//!
//! The upstream export duplicates the family prefix on several token
//! families (`surface-surface-background`) and namespaces font stacks under
//! `typography-font-`. A single ordered rewrite table resolves both.

use once_cell::sync::Lazy;
use regex::Regex;

/// Prefix rewrites, tried in declaration order. First match wins.
const PREFIX_REWRITES: &[(&str, &str)] = &[
    ("border-border-", "border-"),
    ("size-size-", "size-"),
    ("surface-surface-", "surface-"),
    ("text-text-", "text-"),
    ("icon-icon-", "icon-"),
    ("outline-outline-", "outline-"),
    ("typography-font-", "font-family-"),
];

/// Strip a duplicated self-referential prefix and remap the typography
/// namespace. Idempotent for the names the export produces.
pub fn simplify_name(name: &str) -> String {
    for (from, to) in PREFIX_REWRITES {
        if let Some(rest) = name.strip_prefix(from) {
            return format!("{}{}", to, rest);
        }
    }
    name.to_string()
}

/// A `var(--name)` reference inside a declaration value.
static VAR_REFERENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"var\(--([^)]+)\)").unwrap());

/// Rewrite every `var(--X)` reference in `value`, simplifying `X`.
pub fn simplify_var_references(value: &str) -> String {
    VAR_REFERENCE
        .replace_all(value, |caps: &regex::Captures<'_>| {
            format!("var(--{})", simplify_name(caps[1].trim()))
        })
        .into_owned()
}
