//! Within-group comparators
//!
//! Fixed orderings live in static rank constants so they can be extended
//! and tested independently of the sort routines. Every comparator falls
//! through to the default rule (trailing scale number, then lexicographic)
//! for names it does not rank.

use std::cmp::Ordering;

/// Radii sizes, smallest to the pill shape.
const RADII_RANK: &[&str] = &["xs", "sm", "md", "lg", "xl", "2xl", "3xl", "4xl", "full"];

/// Border widths.
const BORDER_RANK: &[&str] = &["xs", "sm", "md", "lg", "xl"];

fn rank_of(table: &[&str], key: &str) -> Option<usize> {
    table.iter().position(|entry| *entry == key)
}

/// Trailing `-<digits>` scale number, e.g. `color-default-50` → 50.
fn trailing_scale(name: &str) -> Option<u64> {
    let (_, suffix) = name.rsplit_once('-')?;
    if suffix.is_empty() || !suffix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    suffix.parse().ok()
}

/// Trailing numeric with the underscore-as-decimal convention used by
/// spacing and size scales, e.g. `spacing-1_5` → 1.5.
fn trailing_fraction(name: &str) -> Option<f64> {
    let (_, suffix) = name.rsplit_once('-')?;
    if suffix.is_empty() {
        return None;
    }
    suffix.replace('_', ".").parse().ok()
}

/// Default rule: ascending trailing scale number when both names carry
/// one, otherwise lexicographic.
fn compare_default(a: &str, b: &str) -> Ordering {
    match (trailing_scale(a), trailing_scale(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

fn compare_ranked(table: &[&str], prefix: &str, a: &str, b: &str) -> Ordering {
    let rank = |name: &str| {
        name.strip_prefix(prefix)
            .and_then(|suffix| rank_of(table, suffix))
    };
    match (rank(a), rank(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => compare_default(a, b),
    }
}

/// `spacing-px` leads its group; everything else sorts by the trailing
/// numeric, underscores reading as decimal points.
fn compare_spacing(a: &str, b: &str) -> Ordering {
    match (a == "spacing-px", b == "spacing-px") {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => match (trailing_fraction(a), trailing_fraction(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => compare_default(a, b),
        },
    }
}

/// Step number from `…step-<N>`, sorted descending.
fn compare_font_size(a: &str, b: &str) -> Ordering {
    let step = |name: &str| {
        name.rsplit_once("step-")
            .and_then(|(_, n)| n.parse::<i64>().ok())
    };
    match (step(a), step(b)) {
        (Some(x), Some(y)) => y.cmp(&x),
        _ => compare_default(a, b),
    }
}

/// Comparator for the named group.
pub(crate) fn compare_within(group: &str, a: &str, b: &str) -> Ordering {
    match group {
        "radii" => compare_ranked(RADII_RANK, "radii-", a, b),
        "border" => compare_ranked(BORDER_RANK, "border-", a, b),
        "font-size" => compare_font_size(a, b),
        "spacing" | "size" => compare_spacing(a, b),
        _ => compare_default(a, b),
    }
}
