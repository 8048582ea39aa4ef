//! Serializes pipeline output into the text sections an external
//! text/image-conditioned model can be prompted with. Nothing in the
//! pipeline depends on this module.

use crate::analyzers::DesignTokenSet;
use crate::analyzers::styles::{self, NormalizedRecord};
use crate::components::Component;
use crate::snapshot::StyleRecord;

/// Builds the full prompt summary: color, typography, layout and spacing
/// systems, the component inventory and the per-section style blocks.
pub fn build(
    tokens: &DesignTokenSet,
    components: &[Component],
    records: &[StyleRecord],
) -> String {
    let sections = [
        color_section(tokens),
        typography_section(tokens),
        layout_section(tokens),
        spacing_section(tokens),
        component_section(components),
        section_styling(records),
    ];

    sections
        .into_iter()
        .filter(|section| !section.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn color_section(tokens: &DesignTokenSet) -> String {
    let colors = &tokens.colors;
    if colors.is_empty() {
        return String::new();
    }

    let mut lines = vec!["COLOR SYSTEM:".to_string()];
    for (bucket, values) in [
        ("primary", &colors.primary),
        ("text", &colors.text),
        ("background", &colors.background),
        ("accent", &colors.accent),
    ] {
        if !values.is_empty() {
            lines.push(format!("- {}: {}", bucket, values.join(", ")));
        }
    }
    lines.join("\n")
}

fn typography_section(tokens: &DesignTokenSet) -> String {
    let typography = &tokens.typography;
    if typography.font_families.is_empty()
        && typography.font_sizes.is_empty()
        && typography.font_weights.is_empty()
    {
        return String::new();
    }

    format!(
        "TYPOGRAPHY SYSTEM:
- Font families: {}
- Font sizes: {}
- Font weights: {}",
        typography.font_families.join(", "),
        typography.font_sizes.join(", "),
        typography.font_weights.join(", ")
    )
}

fn layout_section(tokens: &DesignTokenSet) -> String {
    if tokens.layout_methods.is_empty() {
        return String::new();
    }

    let uses: Vec<String> = tokens
        .layout_methods
        .iter()
        .map(|(method, count)| format!("{}: {} uses", method, count))
        .collect();

    format!("LAYOUT SYSTEM:\n{}", uses.join(", "))
}

fn spacing_section(tokens: &DesignTokenSet) -> String {
    let spacing = &tokens.spacing;
    if spacing.common_margins.is_empty() && spacing.common_paddings.is_empty() {
        return String::new();
    }

    format!(
        "SPACING SYSTEM:
- Common margins: {}
- Common paddings: {}",
        spacing.common_margins.join(", "),
        spacing.common_paddings.join(", ")
    )
}

fn component_section(components: &[Component]) -> String {
    if components.is_empty() {
        return String::new();
    }

    let mut lines = vec!["COMPONENTS:".to_string()];
    for component in components {
        let mut descriptor = format!(
            "- {:?} (priority {})",
            component.component_type, component.priority
        );
        if let Some(background) = component.style("background-color") {
            descriptor.push_str(&format!(", background {}", background));
        }
        if let Some(color) = component.style("color") {
            descriptor.push_str(&format!(", text {}", color));
        }
        lines.push(descriptor);
    }
    lines.join("\n")
}

/// Per-section style blocks: every record's grouped declarations, plus one
/// block per pseudo-element whose raw CSS text parses to anything.
fn section_styling(records: &[StyleRecord]) -> String {
    let mut normalized = styles::normalize_records(records);

    for record in records {
        for (pseudo, css_text) in &record.pseudo_elements {
            normalized.push(styles::normalize_text(
                &format!("{} {}", record.label, pseudo),
                &format!("{}::{}", record.selector, pseudo),
                css_text,
            ));
        }
    }

    let blocks = style_blocks(&normalized);
    if blocks.is_empty() {
        return String::new();
    }

    format!("SECTION STYLING:\n{blocks}")
}

/// Renders normalized records as per-selector CSS blocks with their
/// declarations in the fixed category order; records with no surviving
/// declarations are skipped.
pub fn style_blocks(records: &[NormalizedRecord]) -> String {
    let mut blocks = Vec::new();

    for record in records {
        if record.groups.is_empty() {
            continue;
        }

        let mut lines = vec![format!("{} {{", record.selector)];
        for (property, value) in record.groups.ordered() {
            lines.push(format!("  {}: {};", property, value));
        }
        lines.push("}".to_string());
        blocks.push(lines.join("\n"));
    }

    blocks.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::{self, styles};
    use crate::snapshot::StyleRecord;

    #[test]
    fn test_empty_tokens_produce_no_sections() {
        assert_eq!(build(&DesignTokenSet::default(), &[], &[]), "");
    }

    #[test]
    fn test_sections_from_records() {
        let records = vec![
            StyleRecord::new(
                "body",
                "body",
                [
                    ("color", "rgb(20, 20, 20)"),
                    ("fontFamily", "Georgia, serif"),
                    ("display", "flex"),
                    ("marginTop", "16px"),
                ],
            ),
        ];
        let tokens = analyzers::analyze(&records);
        let prompt = build(&tokens, &[], &records);

        assert!(prompt.contains("COLOR SYSTEM:"));
        assert!(prompt.contains("- text: rgb(20, 20, 20)"));
        assert!(prompt.contains("Georgia, serif"));
        assert!(prompt.contains("flex: 1 uses"));
        assert!(prompt.contains("- Common margins: 16px"));
        // The record's grouped declarations come through as a styling block
        assert!(prompt.contains("SECTION STYLING:"));
        assert!(prompt.contains("body {"));
        assert!(prompt.contains("  color: rgb(20, 20, 20);"));
        assert!(prompt.contains("  font-family: Georgia, serif;"));
    }

    #[test]
    fn test_pseudo_element_text_gets_its_own_block() {
        let mut record = StyleRecord::new("hero", ".hero", [("color", "rgb(0, 0, 0)")]);
        record.pseudo_elements.insert(
            "before".to_string(),
            "content: \"\";\ndisplay: block;\nfloat: none;".to_string(),
        );
        let prompt = build(&DesignTokenSet::default(), &[], &[record]);

        assert!(prompt.contains(".hero {"));
        assert!(prompt.contains(".hero::before {"));
        assert!(prompt.contains("  display: block;"));
        // Ignored values are dropped from pseudo-element text too
        assert!(!prompt.contains("float"));
    }

    #[test]
    fn test_style_blocks_follow_category_order() {
        let record = StyleRecord::new(
            "hero",
            ".hero",
            [
                ("margin", "8px"),
                ("color", "rgb(0, 0, 0)"),
                ("backgroundColor", "rgb(255, 255, 255)"),
            ],
        );
        let normalized = styles::normalize_records(&[record]);
        let blocks = style_blocks(&normalized);

        let background = blocks.find("background-color").unwrap();
        let color = blocks.find("  color").unwrap();
        let margin = blocks.find("margin").unwrap();
        assert!(background < color && color < margin);
        assert!(blocks.starts_with(".hero {"));
    }
}
