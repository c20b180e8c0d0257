//! Stylesheet rendering
//!
//! Serializes the grouped structure into the final text: an `@layer
//! globals` block holding a `:root` with the primitives and light-mode
//! tokens, then a `prefers-color-scheme: dark` media block with the
//! dark-mode tokens. Groups are separated by single blank lines.

use crate::tokens::grouping::{GroupedStylesheet, TokenGroup};

fn declaration_lines(group: &TokenGroup, indent: &str) -> String {
    let mut out = String::new();
    for (name, value) in &group.entries {
        out.push_str(indent);
        out.push_str("--");
        out.push_str(name);
        out.push_str(": ");
        out.push_str(value);
        out.push_str(";\n");
    }
    out
}

/// Non-empty category blocks joined with a blank line between them.
fn mode_blocks(groups: &[TokenGroup], indent: &str) -> String {
    groups
        .iter()
        .filter(|group| !group.entries.is_empty())
        .map(|group| declaration_lines(group, indent))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the final stylesheet text.
pub fn render_stylesheet(sheet: &GroupedStylesheet) -> String {
    let mut out = String::from("@layer globals {\n  :root {\n");

    for group in &sheet.primitive_groups {
        if group.entries.is_empty() {
            continue;
        }
        out.push_str(&declaration_lines(group, "    "));
        out.push('\n');
    }

    if sheet.light_mode.iter().any(|group| !group.entries.is_empty()) {
        out.push_str(&mode_blocks(&sheet.light_mode, "    "));
    }
    out.push_str("  }\n");

    if sheet.dark_mode.iter().any(|group| !group.entries.is_empty()) {
        out.push_str("\n  @media (prefers-color-scheme: dark) {\n    :root {\n");
        out.push_str(&mode_blocks(&sheet.dark_mode, "      "));
        out.push_str("\n    }\n  }\n");
    }

    out.push_str("}\n");
    out
}
