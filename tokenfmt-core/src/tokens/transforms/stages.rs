//! Pipeline stages
//!
//! One stage struct per pipeline component. Each implements [`Runnable`] so
//! stages compose into the pre-built transforms in
//! [`standard`](super::standard).

use crate::tokens::extracting::extract_declarations;
use crate::tokens::grouping::{group_tokens, GroupedStylesheet};
use crate::tokens::rendering::render_stylesheet;
use crate::tokens::rules::apply_rules;
use crate::tokens::table::{ProcessedResult, VariableTable};
use crate::tokens::transforms::{Runnable, TransformError};

/// Declaration extraction stage
///
/// # Input
/// - `String` - raw CSS text
///
/// # Output
/// - [`VariableTable`] - ordered name→value table, last declaration wins
pub struct ExtractDeclarations;

impl ExtractDeclarations {
    pub fn new() -> Self {
        ExtractDeclarations
    }
}

impl Default for ExtractDeclarations {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, VariableTable> for ExtractDeclarations {
    fn run(&self, input: String) -> Result<VariableTable, TransformError> {
        Ok(extract_declarations(&input))
    }
}

// Also implement for &str for convenience
impl Runnable<&str, VariableTable> for ExtractDeclarations {
    fn run(&self, input: &str) -> Result<VariableTable, TransformError> {
        Ok(extract_declarations(input))
    }
}

/// Rule engine stage
///
/// Applies mode separation, category exclusion, rem resolution, the
/// non-rem fallback and typography synthesis.
///
/// # Input
/// - [`VariableTable`] - the raw table
///
/// # Output
/// - [`ProcessedResult`] - primitives plus the two mode tables
pub struct ApplyTokenRules;

impl ApplyTokenRules {
    pub fn new() -> Self {
        ApplyTokenRules
    }
}

impl Default for ApplyTokenRules {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<VariableTable, ProcessedResult> for ApplyTokenRules {
    fn run(&self, input: VariableTable) -> Result<ProcessedResult, TransformError> {
        apply_rules(&input).map_err(|e| TransformError::StageFailed {
            stage: "rules".to_string(),
            message: e.to_string(),
        })
    }
}

/// Grouping stage
///
/// # Input
/// - [`ProcessedResult`]
///
/// # Output
/// - [`GroupedStylesheet`] - ordered groups plus the dropped-name list
pub struct GroupTokens;

impl GroupTokens {
    pub fn new() -> Self {
        GroupTokens
    }
}

impl Default for GroupTokens {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<ProcessedResult, GroupedStylesheet> for GroupTokens {
    fn run(&self, input: ProcessedResult) -> Result<GroupedStylesheet, TransformError> {
        Ok(group_tokens(&input))
    }
}

/// Rendering stage
///
/// # Input
/// - [`GroupedStylesheet`]
///
/// # Output
/// - `String` - the final stylesheet text
pub struct RenderStylesheet;

impl RenderStylesheet {
    pub fn new() -> Self {
        RenderStylesheet
    }
}

impl Default for RenderStylesheet {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<GroupedStylesheet, String> for RenderStylesheet {
    fn run(&self, input: GroupedStylesheet) -> Result<String, TransformError> {
        Ok(render_stylesheet(&input))
    }
}
