use crate::snapshot::StyleRecord;

/// Values that carry no styling signal and are skipped during parsing
const IGNORED_VALUES: [&str; 5] = ["none", "auto", "normal", "initial", "inherit"];

/// Properties that belong to the text category (exact membership)
const TEXT_PROPERTIES: [&str; 10] = [
    "color",
    "font-family",
    "font-size",
    "font-weight",
    "font-style",
    "line-height",
    "text-align",
    "text-decoration",
    "text-transform",
    "letter-spacing",
];

/// Properties that belong to the layout category (exact membership)
const LAYOUT_PROPERTIES: [&str; 18] = [
    "display",
    "position",
    "top",
    "right",
    "bottom",
    "left",
    "float",
    "flex-direction",
    "flex-wrap",
    "justify-content",
    "align-items",
    "gap",
    "width",
    "height",
    "max-width",
    "min-height",
    "overflow",
    "z-index",
];

/// Fixed property categories used to group style declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleCategory {
    Background,
    Text,
    Layout,
    Spacing,
    Border,
    Other,
}

fn is_background(property: &str) -> bool {
    property.contains("background")
}

fn is_text(property: &str) -> bool {
    TEXT_PROPERTIES.contains(&property)
}

fn is_layout(property: &str) -> bool {
    LAYOUT_PROPERTIES.contains(&property)
}

fn is_spacing(property: &str) -> bool {
    property.contains("padding") || property.contains("margin")
}

fn is_border(property: &str) -> bool {
    property.contains("border") || property == "box-shadow"
}

/// Ordered rule table assigning a property to its category; the first
/// matching predicate wins, so the classification order is auditable.
pub const CATEGORY_RULES: &[(fn(&str) -> bool, StyleCategory)] = &[
    (is_background, StyleCategory::Background),
    (is_text, StyleCategory::Text),
    (is_layout, StyleCategory::Layout),
    (is_spacing, StyleCategory::Spacing),
    (is_border, StyleCategory::Border),
];

/// Assigns a canonical property name to one of the fixed categories.
/// Deterministic and order-independent: the same name always lands in the
/// same category regardless of surrounding declarations.
pub fn categorize(property: &str) -> StyleCategory {
    let name = canonical_property_name(property);
    for (matches, category) in CATEGORY_RULES {
        if matches(&name) {
            return *category;
        }
    }
    StyleCategory::Other
}

/// Converts a property name to lowercase kebab-case so camelCase names
/// from computed-style dumps (`backgroundColor`), authored CSS names
/// (`background-color`) and shouting variants (`COLOR`) compare equal.
/// A dash is inserted only at a lower-to-upper boundary, so runs of
/// uppercase collapse to plain lowercase.
pub fn canonical_property_name(property: &str) -> String {
    let mut name = String::with_capacity(property.len() + 4);
    let mut prev_is_lower = false;
    for c in property.trim().chars() {
        if c.is_ascii_uppercase() {
            if prev_is_lower {
                name.push('-');
            }
            name.push(c.to_ascii_lowercase());
            prev_is_lower = false;
        } else {
            name.push(c);
            prev_is_lower = c.is_ascii_lowercase() || c.is_ascii_digit();
        }
    }
    name
}

fn is_ignored_value(value: &str) -> bool {
    IGNORED_VALUES.contains(&value.trim().to_lowercase().as_str())
}

/// Declarations grouped by category, preserving within-group order
#[derive(Debug, Clone, Default)]
pub struct PropertyGroups {
    pub background: Vec<(String, String)>,
    pub text: Vec<(String, String)>,
    pub layout: Vec<(String, String)>,
    pub spacing: Vec<(String, String)>,
    pub border: Vec<(String, String)>,
    pub other: Vec<(String, String)>,
}

impl PropertyGroups {
    /// Add a declaration to its category group
    pub fn push(&mut self, category: StyleCategory, property: String, value: String) {
        let group = match category {
            StyleCategory::Background => &mut self.background,
            StyleCategory::Text => &mut self.text,
            StyleCategory::Layout => &mut self.layout,
            StyleCategory::Spacing => &mut self.spacing,
            StyleCategory::Border => &mut self.border,
            StyleCategory::Other => &mut self.other,
        };
        group.push((property, value));
    }

    /// Declarations in the fixed emit order:
    /// background, text, layout, spacing, border, other
    pub fn ordered(&self) -> Vec<&(String, String)> {
        self.background
            .iter()
            .chain(self.text.iter())
            .chain(self.layout.iter())
            .chain(self.spacing.iter())
            .chain(self.border.iter())
            .chain(self.other.iter())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered().is_empty()
    }
}

/// A style record with its declarations parsed and regrouped
#[derive(Debug, Clone)]
pub struct NormalizedRecord {
    pub label: String,
    pub selector: String,
    pub groups: PropertyGroups,
}

/// Parses line-oriented `property: value;` text into declarations.
/// Malformed lines and ignored values are skipped, never an error.
pub fn parse_declarations(text: &str) -> Vec<(String, String)> {
    let mut declarations = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("/*") {
            continue;
        }

        let Some((property, value)) = line.split_once(':') else {
            continue;
        };

        let property = canonical_property_name(property);
        let value = value.trim().trim_end_matches(';').trim();
        if property.is_empty() || value.is_empty() || is_ignored_value(value) {
            continue;
        }

        declarations.push((property, value.to_string()));
    }

    declarations
}

/// Normalizes a structured style record into grouped declarations
pub fn normalize_record(record: &StyleRecord) -> NormalizedRecord {
    let mut groups = PropertyGroups::default();

    for (property, value) in &record.properties {
        let name = canonical_property_name(property);
        let value = value.trim();
        if name.is_empty() || value.is_empty() || is_ignored_value(value) {
            continue;
        }
        groups.push(categorize(&name), name, value.to_string());
    }

    NormalizedRecord {
        label: record.label.clone(),
        selector: record.selector.clone(),
        groups,
    }
}

/// Normalizes raw style text into grouped declarations under one label
pub fn normalize_text(label: &str, selector: &str, text: &str) -> NormalizedRecord {
    let mut groups = PropertyGroups::default();

    for (property, value) in parse_declarations(text) {
        groups.push(categorize(&property), property, value);
    }

    NormalizedRecord {
        label: label.to_string(),
        selector: selector.to_string(),
        groups,
    }
}

/// Normalizes every record in a snapshot, preserving record order
pub fn normalize_records(records: &[StyleRecord]) -> Vec<NormalizedRecord> {
    records.iter().map(normalize_record).collect()
}

/// Flattens records into the line-oriented `property: value;` text the
/// summarizers scan. Record boundaries become comment lines.
pub fn flatten_records(records: &[StyleRecord]) -> String {
    let mut lines = Vec::new();

    for record in records {
        lines.push(format!("/* {} ({}) */", record.label, record.selector));
        for (property, value) in &record.properties {
            lines.push(format!("{}: {};", canonical_property_name(property), value));
        }
    }

    lines.join("\n")
}
