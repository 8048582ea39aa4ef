use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named structural regions a page is divided into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Header,
    Nav,
    Main,
    Footer,
    Sidebar,
}

impl Zone {
    /// Tag the zone is located by; `None` for `Sidebar`, which is found by
    /// a class heuristic rather than a tag.
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Zone::Header => Some("header"),
            Zone::Nav => Some("nav"),
            Zone::Main => Some("main"),
            Zone::Footer => Some("footer"),
            Zone::Sidebar => None,
        }
    }
}

/// Descriptor of one direct child of a zone element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneChild {
    /// Tag name of the child element
    pub tag: String,

    /// Dot-joined class list as authored (empty string if the element has no classes)
    pub class_signature: String,
}

/// Per-selector bag of computed CSS property values captured from the
/// rendered page. One record per matched selector/index; when a selector
/// matches multiple elements the label carries a ` (n)` suffix so labels
/// stay unique within a snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleRecord {
    /// Human-readable label for the matched element (e.g. "main heading")
    pub label: String,

    /// CSS selector that produced this record
    pub selector: String,

    /// Raw CSS property values keyed by property name
    #[serde(default)]
    pub properties: BTreeMap<String, String>,

    /// Custom properties (`--*`) defined on the element
    #[serde(default)]
    pub css_variables: BTreeMap<String, String>,

    /// Pseudo-element styles keyed by pseudo-element name
    #[serde(default)]
    pub pseudo_elements: BTreeMap<String, String>,
}

impl StyleRecord {
    /// Create a record from a label, a selector and property pairs
    pub fn new<I, K, V>(label: &str, selector: &str, properties: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            label: label.to_string(),
            selector: selector.to_string(),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            css_variables: BTreeMap::new(),
            pseudo_elements: BTreeMap::new(),
        }
    }
}

/// Visible text extracted per region, pre-truncated by the renderer
/// (header ≤400 chars, main ≤1200, footer ≤300).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisibleText {
    /// Text found in the header region
    #[serde(default)]
    pub header: String,

    /// Text found in the main content region
    #[serde(default)]
    pub main: String,

    /// Text found in the footer region
    #[serde(default)]
    pub footer: String,

    /// Document title
    #[serde(default)]
    pub title: String,

    /// Heading texts in document order
    #[serde(default)]
    pub headings: Vec<String>,

    /// Paragraph texts in document order
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

/// One immutable capture of a rendered page: DOM serialization, per-selector
/// style records, visible text and the layout-zone map. Created once per
/// clone request and never mutated while the pipeline runs over it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Post-cleanup DOM serialization (non-visual tags removed, only
    /// class/id/href/src/alt/title/style attributes retained)
    pub html: String,

    /// Ordered style records keyed by the renderer's fixed selector list
    #[serde(default)]
    pub style_records: Vec<StyleRecord>,

    /// Visible text per region
    #[serde(default)]
    pub visible_text: VisibleText,

    /// Zone map: present zones only, each with its direct-child signature
    #[serde(default)]
    pub layout_zones: BTreeMap<Zone, Vec<ZoneChild>>,

    /// Media-query breakpoints (px) detected in the page's stylesheets
    #[serde(default)]
    pub breakpoints: Vec<u32>,

    /// Full-page screenshot (PNG); opaque to the pipeline
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub screenshot: Vec<u8>,
}

impl Snapshot {
    /// Create a snapshot from a raw HTML document, leaving the remaining
    /// fields at their defaults. Useful for offline runs and tests.
    pub fn from_html(html: &str) -> Self {
        Self {
            html: html.to_string(),
            ..Self::default()
        }
    }
}
