//! Flattening of design tokens into stylesheet variables.

use std::collections::BTreeMap;

use crate::models::theme::DesignTokens;

/// Flatten a palette into a `<category>-<name>-<step>` -> value mapping.
///
/// Deterministic and total: every defined token produces exactly one
/// entry, values verbatim, and the `BTreeMap` fixes the ordering. A
/// complete palette yields 81 entries (40 ramp colors, 4 semantic
/// colors, 8 spacing, 7 radius, 5 shadow, 2 families, 10 sizes, 5
/// weights).
pub fn serialize_design_tokens(tokens: &DesignTokens) -> BTreeMap<String, String> {
    let mut entries = BTreeMap::new();

    for (name, ramp) in tokens.colors.ramps() {
        for (step, value) in ramp {
            entries.insert(format!("color-{}-{}", name, step.label()), value.clone());
        }
    }

    for (color, value) in &tokens.colors.semantic {
        entries.insert(format!("color-{}", color.label()), value.clone());
    }

    for (step, value) in &tokens.spacing {
        entries.insert(format!("spacing-{}", step.label()), value.clone());
    }

    for (step, value) in &tokens.radius {
        entries.insert(format!("radius-{}", step.label()), value.clone());
    }

    for (step, value) in &tokens.shadows {
        entries.insert(format!("shadow-{}", step.label()), value.clone());
    }

    for (family, value) in &tokens.typography.families {
        entries.insert(format!("font-family-{}", family.label()), value.clone());
    }

    for (size, value) in &tokens.typography.sizes {
        entries.insert(format!("font-size-{}", size.label()), value.clone());
    }

    for (weight, value) in &tokens.typography.weights {
        entries.insert(format!("font-weight-{}", weight.label()), value.clone());
    }

    entries
}

/// Render a palette as a `:root` custom-property block.
pub fn theme_stylesheet(tokens: &DesignTokens) -> String {
    let entries = serialize_design_tokens(tokens);

    let mut css = String::with_capacity(entries.len() * 48);
    css.push_str(":root {\n");
    for (key, value) in &entries {
        css.push_str("  --");
        css.push_str(key);
        css.push_str(": ");
        css.push_str(value);
        css.push_str(";\n");
    }
    css.push_str("}\n");
    css
}
