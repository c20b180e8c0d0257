//! Declaration extraction
//!
//! Scans raw CSS text for flat custom-property declarations of the form
//! `--name: value;` and collects them into a [`VariableTable`]. This is not
//! a CSS parser: nested rules, comments and at-rules are not modeled, and
//! any text the pattern cannot match is skipped without error.

use crate::tokens::table::VariableTable;
use once_cell::sync::Lazy;
use regex::Regex;

/// One custom-property declaration: name greedy up to the next `:`, value
/// greedy up to the next `;`.
static DECLARATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"--([^:]+):([^;]+);").unwrap());

/// Extract every declaration in `css`, trimming names and values.
///
/// Later occurrences of a name overwrite earlier ones.
pub fn extract_declarations(css: &str) -> VariableTable {
    let mut table = VariableTable::new();
    for capture in DECLARATION.captures_iter(css) {
        table.insert(capture[1].trim(), capture[2].trim());
    }
    table
}
