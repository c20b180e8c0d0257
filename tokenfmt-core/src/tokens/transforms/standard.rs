//! Standard transform definitions
//!
//! Pre-built pipelines for common use cases, defined as static references
//! using `once_cell::sync::Lazy`.

use crate::tokens::table::{ProcessedResult, VariableTable};
use crate::tokens::transforms::stages::{
    ApplyTokenRules, ExtractDeclarations, GroupTokens, RenderStylesheet,
};
use crate::tokens::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for the extraction transform
pub type ExtractionTransform = Transform<String, VariableTable>;

/// Type alias for the full restructuring transform
pub type RestructureTransform = Transform<String, String>;

/// Extraction transform: String → VariableTable
///
/// Scans raw CSS text for `--name: value;` declarations.
///
/// ```rust
/// use tokenfmt_core::tokens::transforms::standard::EXTRACTION;
///
/// let table = EXTRACTION.run("--spacing-4: 1rem;".to_string()).unwrap();
/// assert_eq!(table.len(), 1);
/// ```
pub static EXTRACTION: Lazy<ExtractionTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(ExtractDeclarations::new()));

/// Processing transform: String → ProcessedResult
///
/// Extraction followed by the full rule sequence; fails when the viewport
/// configuration is missing or malformed.
pub static PROCESSING: Lazy<Transform<String, ProcessedResult>> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(ExtractDeclarations::new())
        .then(ApplyTokenRules::new())
});

/// Full restructuring transform: String → String
///
/// The whole pipeline:
/// 1. declaration extraction
/// 2. rewrite rules (modes, exclusions, units, typography)
/// 3. grouping and ordering
/// 4. stylesheet rendering
///
/// Callers that need the dropped-variable list should use
/// [`restructure`](crate::tokens::pipeline::restructure) instead.
pub static RESTRUCTURE: Lazy<RestructureTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then(ExtractDeclarations::new())
        .then(ApplyTokenRules::new())
        .then(GroupTokens::new())
        .then(RenderStylesheet::new())
});
