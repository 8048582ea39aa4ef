use crate::analyzers::styles::canonical_property_name;
use crate::snapshot::{Snapshot, StyleRecord, Zone, ZoneChild};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fixed priority of the navigation component
const NAVIGATION_PRIORITY: u32 = 10;

/// Fixed priority of the header component
const HEADER_PRIORITY: u32 = 9;

/// Fixed priority of the main-content component
const MAIN_CONTENT_PRIORITY: u32 = 8;

/// Fixed priority of the footer component
const FOOTER_PRIORITY: u32 = 5;

/// Record labels whose styles feed the header component
const HEADER_LABELS: [&str; 2] = ["header", "main heading"];

/// Record labels whose styles feed the main-content component
const MAIN_CONTENT_LABELS: [&str; 2] = ["main content", "paragraph"];

/// Semantic classification of a page region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentType {
    Navigation,
    Header,
    MainContent,
    Footer,
}

/// A semantically classified, priority-ordered page region carrying its
/// own merged style map and content payload. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub component_type: ComponentType,

    /// Merged style declarations, canonical kebab-case property names
    pub styles: BTreeMap<String, String>,

    /// Free-text content for this region
    #[serde(default)]
    pub content: String,

    /// Heading texts (main content only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headings: Vec<String>,

    /// Paragraph texts (main content only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paragraphs: Vec<String>,

    /// Direct-child signature of the matched zone element (navigation only)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub zone_signature: Vec<ZoneChild>,

    /// Rendering priority; higher renders earlier
    pub priority: u32,
}

impl Component {
    fn new(component_type: ComponentType, priority: u32) -> Self {
        Self {
            component_type,
            styles: BTreeMap::new(),
            content: String::new(),
            headings: Vec::new(),
            paragraphs: Vec::new(),
            zone_signature: Vec::new(),
            priority,
        }
    }

    /// Merged style value under its canonical property name
    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles
            .get(&canonical_property_name(property))
            .map(String::as_str)
    }
}

/// Extracts the component list from a snapshot and its zone map.
///
/// The four extraction steps always run in document order (navigation,
/// header, content, footer); a missing zone or text source yields an
/// omitted component, never an error. At most one component per type is
/// produced.
pub fn extract(snapshot: &Snapshot, zones: &BTreeMap<Zone, Vec<ZoneChild>>) -> Vec<Component> {
    let mut components = Vec::new();

    if let Some(component) = navigation_component(snapshot, zones) {
        components.push(component);
    }
    if let Some(component) = header_component(snapshot, zones) {
        components.push(component);
    }
    if let Some(component) = main_content_component(snapshot) {
        components.push(component);
    }
    if let Some(component) = footer_component(snapshot, zones) {
        components.push(component);
    }

    ::log::debug!("Extracted {} components", components.len());

    components
}

/// Navigation, only when a nav zone was detected upstream
fn navigation_component(
    snapshot: &Snapshot,
    zones: &BTreeMap<Zone, Vec<ZoneChild>>,
) -> Option<Component> {
    let signature = zones.get(&Zone::Nav)?;

    let mut component = Component::new(ComponentType::Navigation, NAVIGATION_PRIORITY);
    component.styles = merge_selector_styles(&snapshot.style_records, "nav");
    component.zone_signature = signature.clone();
    Some(component)
}

/// Header, only when a header zone was detected
fn header_component(
    snapshot: &Snapshot,
    zones: &BTreeMap<Zone, Vec<ZoneChild>>,
) -> Option<Component> {
    zones.get(&Zone::Header)?;

    let mut component = Component::new(ComponentType::Header, HEADER_PRIORITY);
    component.styles = merge_labeled_styles(&snapshot.style_records, &HEADER_LABELS);
    component.content = snapshot.visible_text.header.clone();
    Some(component)
}

/// Main content, whenever any main text exists
fn main_content_component(snapshot: &Snapshot) -> Option<Component> {
    let text = &snapshot.visible_text;
    if text.main.is_empty() {
        return None;
    }

    let mut component = Component::new(ComponentType::MainContent, MAIN_CONTENT_PRIORITY);
    component.styles = merge_labeled_styles(&snapshot.style_records, &MAIN_CONTENT_LABELS);
    component.content = text.main.clone();
    component.headings = text.headings.clone();
    component.paragraphs = text.paragraphs.clone();
    Some(component)
}

/// Footer, only when a footer zone was detected
fn footer_component(
    snapshot: &Snapshot,
    zones: &BTreeMap<Zone, Vec<ZoneChild>>,
) -> Option<Component> {
    zones.get(&Zone::Footer)?;

    let mut component = Component::new(ComponentType::Footer, FOOTER_PRIORITY);
    component.styles = merge_selector_styles(&snapshot.style_records, "footer");
    component.content = snapshot.visible_text.footer.clone();
    Some(component)
}

/// Merges every record whose selector contains the needle
/// (case-insensitive). Later records override earlier ones per property.
fn merge_selector_styles(records: &[StyleRecord], needle: &str) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();

    for record in records {
        if record.selector.to_lowercase().contains(needle) {
            merge_properties(&mut merged, record);
        }
    }

    merged
}

/// Merges every record whose label matches one of the given labels
/// (case-insensitive).
fn merge_labeled_styles(records: &[StyleRecord], labels: &[&str]) -> BTreeMap<String, String> {
    let mut merged = BTreeMap::new();

    for record in records {
        let label = record.label.to_lowercase();
        if labels.contains(&label.as_str()) {
            merge_properties(&mut merged, record);
        }
    }

    merged
}

fn merge_properties(merged: &mut BTreeMap<String, String>, record: &StyleRecord) {
    for (property, value) in &record.properties {
        merged.insert(canonical_property_name(property), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::zones;
    use crate::snapshot::VisibleText;

    fn snapshot_with_zones(html: &str) -> (Snapshot, BTreeMap<Zone, Vec<ZoneChild>>) {
        let snapshot = Snapshot::from_html(html);
        let zones = zones::extract(&snapshot.html);
        (snapshot, zones)
    }

    #[test]
    fn test_all_zones_produce_all_components() {
        let html = "<html><body>\
            <header><h1>Title</h1></header>\
            <nav><a href=\"/\">Home</a></nav>\
            <main><p>Body</p></main>\
            <footer><p>Bye</p></footer>\
            </body></html>";
        let (mut snapshot, zones) = snapshot_with_zones(html);
        snapshot.visible_text = VisibleText {
            header: "Title".to_string(),
            main: "Body".to_string(),
            footer: "Bye".to_string(),
            ..VisibleText::default()
        };

        let components = extract(&snapshot, &zones);
        let types: Vec<ComponentType> = components.iter().map(|c| c.component_type).collect();
        assert_eq!(
            types,
            vec![
                ComponentType::Navigation,
                ComponentType::Header,
                ComponentType::MainContent,
                ComponentType::Footer,
            ]
        );

        let priorities: Vec<u32> = components.iter().map(|c| c.priority).collect();
        assert_eq!(priorities, vec![10, 9, 8, 5]);
    }

    #[test]
    fn test_missing_zones_are_omitted_not_errors() {
        let (mut snapshot, zones) = snapshot_with_zones("<html><body><main>x</main></body></html>");
        snapshot.visible_text.main = "Welcome\n\nHello world".to_string();

        let components = extract(&snapshot, &zones);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].component_type, ComponentType::MainContent);
    }

    #[test]
    fn test_no_main_text_no_main_component() {
        let (snapshot, zones) =
            snapshot_with_zones("<html><body><header>h</header><main></main></body></html>");

        let components = extract(&snapshot, &zones);
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].component_type, ComponentType::Header);
    }

    #[test]
    fn test_selector_merge_is_case_insensitive_and_overrides() {
        let html = "<html><body><nav></nav></body></html>";
        let (mut snapshot, zones) = snapshot_with_zones(html);
        snapshot.style_records = vec![
            StyleRecord::new("navigation", ".NavBar", [("backgroundColor", "rgb(1, 2, 3)")]),
            StyleRecord::new(
                "navigation links",
                "nav a",
                [("background-color", "rgb(9, 9, 9)"), ("color", "rgb(0, 0, 0)")],
            ),
            StyleRecord::new("unrelated", ".card", [("color", "rgb(5, 5, 5)")]),
        ];

        let components = extract(&snapshot, &zones);
        let nav = &components[0];
        assert_eq!(nav.component_type, ComponentType::Navigation);
        // Later record wins, camelCase key was canonicalized
        assert_eq!(nav.style("backgroundColor"), Some("rgb(9, 9, 9)"));
        assert_eq!(nav.style("color"), Some("rgb(0, 0, 0)"));
    }

    #[test]
    fn test_labeled_merge_for_header() {
        let html = "<html><body><header>h</header></body></html>";
        let (mut snapshot, zones) = snapshot_with_zones(html);
        snapshot.visible_text.header = "Hello".to_string();
        snapshot.style_records = vec![
            StyleRecord::new("Header", "header", [("backgroundColor", "rgb(0, 0, 0)")]),
            StyleRecord::new("Main Heading", "h1", [("color", "rgb(255, 255, 255)")]),
            StyleRecord::new("paragraph", "p", [("color", "rgb(50, 50, 50)")]),
        ];

        let components = extract(&snapshot, &zones);
        let header = &components[0];
        assert_eq!(header.component_type, ComponentType::Header);
        assert_eq!(header.style("background-color"), Some("rgb(0, 0, 0)"));
        assert_eq!(header.style("color"), Some("rgb(255, 255, 255)"));
        assert_eq!(header.content, "Hello");
    }

    #[test]
    fn test_navigation_carries_zone_signature() {
        let html = "<html><body><nav><ul class=\"menu top\"></ul><a href=\"/\">x</a></nav></body></html>";
        let (snapshot, zones) = snapshot_with_zones(html);

        let components = extract(&snapshot, &zones);
        let nav = &components[0];
        assert_eq!(nav.zone_signature.len(), 2);
        assert_eq!(nav.zone_signature[0].tag, "ul");
        assert_eq!(nav.zone_signature[0].class_signature, "menu.top");
        assert_eq!(nav.zone_signature[1].tag, "a");
        assert_eq!(nav.zone_signature[1].class_signature, "");
    }
}
