use crate::snapshot::{Zone, ZoneChild};
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;

/// Class names that mark an element as a sidebar
const SIDEBAR_CLASS_PATTERN: &str = "sidebar|aside|complementary";

/// Maps the five fixed zones to the ordered signature of their direct
/// children. Zones with no matching element are omitted from the map.
pub fn extract(html: &str) -> BTreeMap<Zone, Vec<ZoneChild>> {
    let doc = Html::parse_document(html);
    let mut zones = BTreeMap::new();

    for zone in [
        Zone::Header,
        Zone::Nav,
        Zone::Main,
        Zone::Footer,
        Zone::Sidebar,
    ] {
        let Some(tag) = zone.tag() else { continue };
        let selector = Selector::parse(tag).expect("static selector");
        if let Some(element) = doc.select(&selector).next() {
            zones.insert(zone, child_signature(element));
        }
    }

    if let Some(element) = find_sidebar(&doc) {
        zones.insert(Zone::Sidebar, child_signature(element));
    }

    ::log::debug!("Detected zones: {:?}", zones.keys().collect::<Vec<_>>());

    zones
}

/// First element whose class attribute matches the sidebar pattern
fn find_sidebar(doc: &Html) -> Option<ElementRef<'_>> {
    let class_pattern = Regex::new(SIDEBAR_CLASS_PATTERN).expect("static pattern");
    let with_class = Selector::parse("[class]").expect("static selector");

    doc.select(&with_class).find(|element| {
        element
            .value()
            .attr("class")
            .is_some_and(|classes| class_pattern.is_match(classes))
    })
}

/// Ordered descriptors of an element's direct children (no recursion)
fn child_signature(element: ElementRef<'_>) -> Vec<ZoneChild> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .map(|child| ZoneChild {
            tag: child.value().name().to_string(),
            class_signature: child
                .value()
                .classes()
                .collect::<Vec<_>>()
                .join("."),
        })
        .collect()
}
