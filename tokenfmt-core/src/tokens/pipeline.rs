//! Convenience entry points over the standard transforms.

use crate::tokens::transforms::stages::{
    ApplyTokenRules, ExtractDeclarations, GroupTokens, RenderStylesheet,
};
use crate::tokens::transforms::{Runnable, TransformError};
use serde::Serialize;

/// Result of one full restructuring run.
#[derive(Debug, Clone, Serialize)]
pub struct RestructureOutput {
    /// The restructured stylesheet text.
    pub css: String,
    /// Number of declarations emitted into the stylesheet.
    pub variables: usize,
    /// Names that matched no group and were omitted from the output.
    pub dropped: Vec<String>,
}

/// Run the full pipeline on `css`.
///
/// Unlike the [`RESTRUCTURE`](crate::tokens::transforms::standard::RESTRUCTURE)
/// static, this keeps the dropped-variable list and the emitted count
/// alongside the rendered text so callers can surface warnings.
pub fn restructure(css: &str) -> Result<RestructureOutput, TransformError> {
    let raw = ExtractDeclarations::new().run(css)?;
    let processed = ApplyTokenRules::new().run(raw)?;
    let grouped = GroupTokens::new().run(processed)?;

    let dropped = grouped.dropped.clone();
    let variables = grouped
        .primitive_groups
        .iter()
        .chain(grouped.light_mode.iter())
        .chain(grouped.dark_mode.iter())
        .map(|group| group.entries.len())
        .sum();
    let css = RenderStylesheet::new().run(grouped)?;

    Ok(RestructureOutput {
        css,
        variables,
        dropped,
    })
}
