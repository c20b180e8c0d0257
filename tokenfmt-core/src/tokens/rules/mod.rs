//! Rule engine
//!
//! Transforms the raw variable table into the three-part
//! [`ProcessedResult`]. Rules apply in a fixed order; once a variable has
//! been consumed by a rule it is not reprocessed by a later one:
//!
//! 1. mode separation (`-light-mode` / `-dark-mode` suffixes)
//! 2. category exclusion (intermediate/config namespaces)
//! 3. `-rem`-suffixed resolution
//! 4. non-rem fallback
//! 5. fluid typography synthesis

pub mod typography;
pub mod units;

use crate::tokens::naming::{simplify_name, simplify_var_references};
use crate::tokens::table::{ProcessedResult, VariableTable};
use std::collections::HashSet;
use std::fmt;

/// Name prefixes that are intermediate configuration, never emitted.
const EXCLUDED_PREFIXES: &[&str] = &["font-size-mid-", "font-weight-", "type-", "viewport-"];

/// Errors raised while applying the rewrite rules.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleError {
    /// A required global viewport bound is not declared.
    MissingViewportBound(String),
    /// A viewport bound is declared but does not parse as a number.
    InvalidViewportBound { name: String, value: String },
}

impl fmt::Display for RuleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleError::MissingViewportBound(name) => {
                write!(f, "required variable --{} is missing", name)
            }
            RuleError::InvalidViewportBound { name, value } => {
                write!(f, "variable --{} is not numeric: {}", name, value)
            }
        }
    }
}

impl std::error::Error for RuleError {}

/// Apply the full rule sequence to the raw table.
///
/// Fails only when the typography stage cannot read its viewport
/// configuration; everything else is routed, rewritten or dropped.
pub fn apply_rules(raw: &VariableTable) -> Result<ProcessedResult, RuleError> {
    let mut result = ProcessedResult::default();
    let mut consumed: HashSet<&str> = HashSet::new();

    // 1. Mode separation. Values keep their references, but every var(--X)
    // is rewritten with the simplified X.
    for (name, value) in raw.iter() {
        if let Some(base) = name.strip_suffix("-light-mode") {
            result
                .light_mode
                .insert(simplify_name(base), simplify_var_references(value));
            consumed.insert(name);
        } else if let Some(base) = name.strip_suffix("-dark-mode") {
            result
                .dark_mode
                .insert(simplify_name(base), simplify_var_references(value));
            consumed.insert(name);
        }
    }

    // 2. Category exclusion.
    for (name, _) in raw.iter() {
        if consumed.contains(name) {
            continue;
        }
        if EXCLUDED_PREFIXES.iter().any(|p| name.starts_with(p)) {
            consumed.insert(name);
        }
    }

    // 3. `-rem`-suffixed resolution.
    for (name, value) in raw.iter() {
        if consumed.contains(name) {
            continue;
        }
        let Some(base) = name.strip_suffix("-rem") else {
            continue;
        };
        if base.starts_with("font-size-") {
            // Left to the typography synthesizer.
        } else if base == "radii-full" || base == "spacing-px" || base.starts_with("typography-font-") {
            // The rem companion is spurious: radii-full/spacing-px stay in
            // px, font stacks are identifiers. Emit the original value.
            if let Some(original) = raw.get(base) {
                result.primitives.insert(simplify_name(base), original);
            }
        } else {
            result
                .primitives
                .insert(simplify_name(base), units::normalize_zero_rem(value));
        }
        consumed.insert(name);
        consumed.insert(base);
    }

    // 4. Non-rem fallback.
    for (name, value) in raw.iter() {
        if consumed.contains(name) {
            continue;
        }
        if raw.contains(&format!("{}-rem", name)) {
            continue;
        }
        let simplified = simplify_name(name);
        let value = if simplified.starts_with("font-family-") {
            units::resolve_font_family_reference(value, raw)
        } else {
            units::normalize_zero_px(value)
        };
        result.primitives.insert(simplified, value);
    }

    // 5. Fluid typography synthesis.
    typography::synthesize_steps(raw, &mut result.primitives)?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, &str)]) -> VariableTable {
        let mut table = VariableTable::new();
        // Every fixture carries the viewport bounds the typography stage requires.
        table.insert("viewport-min-width", "\"320\"");
        table.insert("viewport-max-width", "\"1280\"");
        for (name, value) in entries {
            table.insert(*name, *value);
        }
        table
    }

    #[test]
    fn mode_variables_are_split_and_simplified() {
        let result = apply_rules(&raw(&[
            ("surface-surface-background-light-mode", "var(--color-default-50)"),
            ("surface-surface-background-dark-mode", "var(--color-default-950)"),
        ]))
        .unwrap();

        assert_eq!(
            result.light_mode.get("surface-background"),
            Some("var(--color-default-50)")
        );
        assert_eq!(
            result.dark_mode.get("surface-background"),
            Some("var(--color-default-950)")
        );
        assert!(result.primitives.get("surface-background").is_none());
    }

    #[test]
    fn excluded_categories_vanish() {
        let result = apply_rules(&raw(&[
            ("font-weight-bold", "700"),
            ("type-scale", "1.2"),
            ("font-size-mid-step-0", "18"),
        ]))
        .unwrap();

        assert!(result.primitives.is_empty());
        assert!(result.light_mode.is_empty());
        assert!(result.dark_mode.is_empty());
    }

    #[test]
    fn viewport_config_is_excluded_from_output() {
        let result = apply_rules(&raw(&[])).unwrap();
        assert!(result.primitives.get("viewport-min-width").is_none());
    }

    #[test]
    fn rem_sibling_replaces_px_value() {
        let result = apply_rules(&raw(&[
            ("spacing-4", "16px"),
            ("spacing-4-rem", "1rem"),
        ]))
        .unwrap();

        assert_eq!(result.primitives.get("spacing-4"), Some("1rem"));
        assert!(result.primitives.get("spacing-4-rem").is_none());
    }

    #[test]
    fn spacing_px_and_radii_full_keep_px() {
        let result = apply_rules(&raw(&[
            ("spacing-px", "1px"),
            ("spacing-px-rem", "0.0625rem"),
            ("radii-full", "9999px"),
            ("radii-full-rem", "624.9375rem"),
        ]))
        .unwrap();

        assert_eq!(result.primitives.get("spacing-px"), Some("1px"));
        assert_eq!(result.primitives.get("radii-full"), Some("9999px"));
    }

    #[test]
    fn zero_rem_normalizes_to_zero() {
        let result = apply_rules(&raw(&[
            ("spacing-0", "0px"),
            ("spacing-0-rem", "0rem"),
        ]))
        .unwrap();

        assert_eq!(result.primitives.get("spacing-0"), Some("0"));
    }

    #[test]
    fn zero_px_normalizes_to_zero_without_rem_sibling() {
        let result = apply_rules(&raw(&[("border-none", "0px")])).unwrap();
        assert_eq!(result.primitives.get("border-none"), Some("0"));
    }

    #[test]
    fn typography_font_keeps_identifier_value() {
        let result = apply_rules(&raw(&[
            ("typography-font-sans", "\"Inter\", sans-serif"),
            ("typography-font-sans-rem", "1rem"),
        ]))
        .unwrap();

        assert_eq!(
            result.primitives.get("font-family-sans"),
            Some("\"Inter\", sans-serif")
        );
    }

    #[test]
    fn font_family_reference_resolves_one_hop() {
        let result = apply_rules(&raw(&[
            ("typography-font-mono", "\"JetBrains Mono\", monospace"),
            ("font-family-code", "var(--typography-font-mono)"),
        ]))
        .unwrap();

        assert_eq!(
            result.primitives.get("font-family-code"),
            Some("\"JetBrains Mono\", monospace")
        );
    }

    #[test]
    fn font_size_rem_pairs_become_steps_not_raw_entries() {
        let result = apply_rules(&raw(&[
            ("font-size-min-step-0-rem", "1.125rem"),
            ("font-size-max-step-0-rem", "1.25rem"),
        ]))
        .unwrap();

        assert!(result.primitives.get("font-size-min-step-0").is_none());
        assert!(result.primitives.contains("font-size-step-0"));
    }

    #[test]
    fn missing_viewport_bound_is_fatal() {
        let mut table = VariableTable::new();
        table.insert("viewport-min-width", "\"320\"");
        table.insert("color-default-50", "#fafafa");

        let err = apply_rules(&table).unwrap_err();
        assert_eq!(
            err,
            RuleError::MissingViewportBound("viewport-max-width".to_string())
        );
    }

    #[test]
    fn non_numeric_viewport_bound_is_fatal() {
        let mut table = VariableTable::new();
        table.insert("viewport-min-width", "\"narrow\"");
        table.insert("viewport-max-width", "\"1280\"");

        let err = apply_rules(&table).unwrap_err();
        assert!(matches!(err, RuleError::InvalidViewportBound { .. }));
    }
}
