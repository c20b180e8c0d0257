//! Fluid typography synthesis
//!
//! Builds `font-size-step-N` primitives from the min/max step pairs the
//! export declares, interpolating between the bounds across the configured
//! viewport range with a `clamp()` expression.
//!
//! Pairing is by step number across the whole document: a
//! `font-size-min-step-N-rem` entry joins the `font-size-max-step-N-rem`
//! entry with the same N wherever it appears. Steps are deduplicated by
//! their numeric (min, max) pair, sorted ascending by min, and re-indexed
//! around the step the export numbered 0: earlier pairs count down to -1,
//! the zero pair stays 0, later pairs keep their original numbers.

use crate::tokens::rules::RuleError;
use crate::tokens::table::VariableTable;
use once_cell::sync::Lazy;
use regex::Regex;

const PX_PER_REM: f64 = 16.0;

/// Lower bound of a fluid step: `font-size-min-step-<N>-rem`.
static MIN_STEP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^font-size-min-step-(\d+)-rem$").unwrap());

/// A rem-valued declaration body, e.g. `1.125rem`.
static REM_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]*\.?[0-9]+)rem$").unwrap());

/// One fluid step candidate before re-indexing.
///
/// The literals keep the exact source spelling so clamp endpoints are
/// emitted without reformatting.
#[derive(Debug, Clone)]
struct FontSizeStep {
    original_step: i64,
    min: f64,
    min_literal: String,
    max: Option<f64>,
    max_literal: Option<String>,
}

fn viewport_bound(raw: &VariableTable, name: &str) -> Result<f64, RuleError> {
    let value = raw
        .get(name)
        .ok_or_else(|| RuleError::MissingViewportBound(name.to_string()))?;
    value
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .parse::<f64>()
        .map_err(|_| RuleError::InvalidViewportBound {
            name: name.to_string(),
            value: value.to_string(),
        })
}

fn parse_rem(value: &str) -> Option<(f64, String)> {
    let caps = REM_VALUE.captures(value.trim())?;
    let literal = caps[1].to_string();
    literal.parse::<f64>().ok().map(|number| (number, literal))
}

/// Collect step pairs from the table, in first-appearance order of their
/// min entries. Entries whose value is not `<number>rem` are ignored.
fn collect_steps(raw: &VariableTable) -> Vec<FontSizeStep> {
    let mut steps: Vec<FontSizeStep> = Vec::new();
    for (name, value) in raw.iter() {
        let Some(caps) = MIN_STEP.captures(name) else {
            continue;
        };
        let Ok(original_step) = caps[1].parse::<i64>() else {
            continue;
        };
        let Some((min, min_literal)) = parse_rem(value) else {
            continue;
        };
        let max_entry = raw
            .get(&format!("font-size-max-step-{}-rem", original_step))
            .and_then(parse_rem);
        let (max, max_literal) = match max_entry {
            Some((number, literal)) => (Some(number), Some(literal)),
            None => (None, None),
        };
        if steps.iter().any(|s| s.min == min && s.max == max) {
            continue;
        }
        steps.push(FontSizeStep {
            original_step,
            min,
            min_literal,
            max,
            max_literal,
        });
    }
    steps.sort_by(|a, b| a.min.partial_cmp(&b.min).unwrap_or(std::cmp::Ordering::Equal));
    steps
}

/// Synthesize `font-size-step-N` entries into `primitives`.
///
/// The viewport bounds are required whenever the transform runs; their
/// absence aborts the whole run rather than producing a stylesheet with no
/// fluid sizes.
pub fn synthesize_steps(
    raw: &VariableTable,
    primitives: &mut VariableTable,
) -> Result<(), RuleError> {
    let min_width = viewport_bound(raw, "viewport-min-width")?;
    let max_width = viewport_bound(raw, "viewport-max-width")?;

    let steps = collect_steps(raw);
    let zero_at = steps.iter().position(|s| s.original_step == 0);
    for (at, step) in steps.iter().enumerate() {
        let number = match zero_at {
            Some(zero) if at < zero => at as i64 - zero as i64,
            Some(zero) if at == zero => 0,
            _ => step.original_step,
        };
        let value = match (step.max, &step.max_literal) {
            (Some(max), Some(max_literal)) => fluid_clamp(
                step.min,
                &step.min_literal,
                max,
                max_literal,
                min_width,
                max_width,
            ),
            _ => format!("{}rem", step.min_literal),
        };
        primitives.insert(format!("font-size-step-{}", number), value);
    }
    Ok(())
}

/// Interpolated size: Y + S·vw between the two rem endpoints, coefficients
/// rounded to exactly 4 decimal places, endpoints kept as source literals.
fn fluid_clamp(
    min: f64,
    min_literal: &str,
    max: f64,
    max_literal: &str,
    min_width_px: f64,
    max_width_px: f64,
) -> String {
    let min_w = min_width_px / PX_PER_REM;
    let max_w = max_width_px / PX_PER_REM;
    let slope = (max - min) / (max_w - min_w);
    let intercept = -min_w * slope + min;
    format!(
        "clamp({}rem, {:.4}rem + {:.4}vw, {}rem)",
        min_literal,
        intercept,
        slope * 100.0,
        max_literal
    )
}
