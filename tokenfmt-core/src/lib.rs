//! # tokenfmt-core
//!
//! Restructures the flat CSS custom-property export of a design-token tool
//! into a grouped, themed stylesheet: renamed variables, unit-converted
//! values, light/dark theme variables split between a base block and a
//! `prefers-color-scheme` media block, and every declaration grouped and
//! ordered by a fixed taxonomy.
//!
//! The pipeline is a chain of four stages, composed with the
//! [`Transform`](tokens::transforms::Transform) combinator:
//!
//! 1. extraction: raw CSS text to an ordered name→value table
//! 2. rules: naming, unit, mode-splitting and typography-synthesis rules
//! 3. grouping: classification and ordering policy
//! 4. rendering: the final stylesheet text
//!
//! Most callers want [`tokens::pipeline::restructure`], which runs the whole
//! chain and keeps the dropped-variable list alongside the rendered text.

pub mod tokens;
