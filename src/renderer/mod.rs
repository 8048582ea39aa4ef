use crate::analyzers::zones;
use crate::config::PipelineConfig;
use crate::snapshot::{Snapshot, StyleRecord, VisibleText};
use crate::synth::html::truncate;
use fantoccini::{Client, ClientBuilder};
use scraper::{Html, Selector};
use serde_json::json;
use std::error::Error;
use tokio::time::timeout;
use url::Url;

/// Hard cap on one capture, navigation and script execution included
const CAPTURE_TIMEOUT_SECS: u64 = 45;

/// Fixed selector list the renderer collects style records for.
/// Each selector yields up to `max_records_per_selector` records.
const STYLE_SELECTORS: &[(&str, &str)] = &[
    ("body", "body"),
    ("header", "header"),
    ("navigation", "nav"),
    ("main content", "main"),
    ("footer", "footer"),
    ("sidebar", "aside"),
    ("section", "section"),
    ("article", "article"),
    ("main heading", "h1"),
    ("heading", "h2"),
    ("subheading", "h3"),
    ("minor heading", "h4"),
    ("paragraph", "p"),
    ("link", "a"),
    ("button", "button"),
    ("input", "input"),
    ("image", "img"),
    ("list", "ul"),
    ("list item", "li"),
    ("container", ".container"),
    ("wrapper", ".wrapper"),
    ("content", ".content"),
    ("navbar", ".navbar"),
    ("nav menu", ".nav"),
    ("menu", ".menu"),
    ("header block", ".header"),
    ("hero", ".hero"),
    ("banner", ".banner"),
    ("card", ".card"),
    ("btn", ".btn"),
    ("button class", ".button"),
    ("footer block", ".footer"),
    ("sidebar block", ".sidebar"),
    ("title block", ".title"),
    ("section block", ".section"),
];

/// Computed properties captured per matched element
const COMPUTED_PROPERTIES: &[&str] = &[
    "background-color",
    "background-image",
    "color",
    "font-family",
    "font-size",
    "font-weight",
    "line-height",
    "text-align",
    "text-transform",
    "letter-spacing",
    "display",
    "position",
    "float",
    "width",
    "max-width",
    "gap",
    "justify-content",
    "align-items",
    "margin-top",
    "margin-right",
    "margin-bottom",
    "margin-left",
    "padding-top",
    "padding-right",
    "padding-bottom",
    "padding-left",
    "border",
    "border-radius",
    "box-shadow",
    "z-index",
];

/// Serializes the live DOM with non-visual tags removed and only the
/// class/id/href/src/alt/title/style attributes retained.
const CLEANUP_SCRIPT: &str = r#"
const keep = ['class', 'id', 'href', 'src', 'alt', 'title', 'style'];
const root = document.documentElement.cloneNode(true);
for (const node of Array.from(root.querySelectorAll('script, noscript, iframe'))) {
    node.remove();
}
for (const element of Array.from(root.querySelectorAll('*'))) {
    for (const attribute of Array.from(element.attributes)) {
        if (!keep.includes(attribute.name)) {
            element.removeAttribute(attribute.name);
        }
    }
}
return root.outerHTML;
"#;

/// Collects computed-style records for the fixed selector list. Labels for
/// second and later matches of one selector carry a ` (n)` suffix so every
/// label in the snapshot stays unique.
const STYLE_SCRIPT: &str = r#"
const selectors = arguments[0];
const maxMatches = arguments[1];
const propertyNames = arguments[2];
const records = [];
for (const entry of selectors) {
    let matches;
    try { matches = document.querySelectorAll(entry.selector); } catch (e) { continue; }
    let index = 0;
    for (const element of matches) {
        if (index >= maxMatches) break;
        const computed = window.getComputedStyle(element);
        const properties = {};
        for (const name of propertyNames) {
            const value = computed.getPropertyValue(name);
            if (value) properties[name] = value;
        }
        records.push({
            label: index === 0 ? entry.label : entry.label + ' (' + index + ')',
            selector: entry.selector,
            properties: properties,
            cssVariables: {},
            pseudoElements: {}
        });
        index += 1;
    }
}
return records;
"#;

/// Scans same-origin stylesheets for max-width media-query thresholds
const BREAKPOINT_SCRIPT: &str = r#"
const widths = new Set();
for (const sheet of Array.from(document.styleSheets)) {
    let rules;
    try { rules = sheet.cssRules; } catch (e) { continue; }
    if (!rules) continue;
    for (const rule of Array.from(rules)) {
        if (rule.media && rule.media.mediaText) {
            const match = rule.media.mediaText.match(/max-width:\s*(\d+)px/);
            if (match) widths.add(parseInt(match[1], 10));
        }
    }
}
return Array.from(widths).sort((a, b) => a - b);
"#;

/// Renders a URL and captures a complete Snapshot for the pipeline.
///
/// Connects to the configured WebDriver instance (trying the common
/// fallback URLs when that fails), navigates, waits for dynamic content to
/// settle, then collects the cleaned DOM, computed-style records, visible
/// text, layout zones, detected breakpoints and a screenshot.
pub async fn capture(url: &str, config: &PipelineConfig) -> Result<Snapshot, Box<dyn Error>> {
    let parsed = Url::parse(url)?;
    ::log::info!("Capturing snapshot of: {}", parsed);

    let client = connect(&config.webdriver_url)
        .await
        .ok_or("failed to connect to any WebDriver server")?;

    let result = timeout(
        tokio::time::Duration::from_secs(CAPTURE_TIMEOUT_SECS),
        capture_with_client(&client, url, config),
    )
    .await;

    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver client: {}", e);
    }

    match result {
        Ok(snapshot) => snapshot,
        Err(_) => {
            ::log::error!("Timeout capturing: {}", url);
            Err(format!("timed out capturing {}", url).into())
        }
    }
}

/// Connects to the WebDriver instance, falling back to common alternative
/// URLs when the configured one is unreachable.
async fn connect(webdriver_url: &str) -> Option<Client> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Some(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
        }
    }

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://localhost:4444", // Selenium default
        "http://127.0.0.1:4444", // Try with IP instead of localhost
    ];

    for url in fallback_urls.iter() {
        if *url == webdriver_url {
            continue;
        }

        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Some(client);
        }
    }

    ::log::error!("Failed to connect to any WebDriver servers");
    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    None
}

async fn capture_with_client(
    client: &Client,
    url: &str,
    config: &PipelineConfig,
) -> Result<Snapshot, Box<dyn Error>> {
    if let Err(e) = client
        .set_window_size(config.viewport_width, config.viewport_height)
        .await
    {
        ::log::warn!("Failed to size window, continuing with defaults: {}", e);
    }

    client.goto(url).await?;

    // Give dynamic content a chance to settle before reading styles
    tokio::time::sleep(tokio::time::Duration::from_millis(config.page_settle_ms)).await;

    let cleaned = client.execute(CLEANUP_SCRIPT, vec![]).await?;
    let html = cleaned
        .as_str()
        .ok_or("cleanup script returned a non-string document")?
        .to_string();
    ::log::debug!("Cleaned HTML length: {}", html.len());

    let style_records = collect_style_records(client, config).await?;
    ::log::info!("Collected {} style records", style_records.len());

    let breakpoints = collect_breakpoints(client).await;

    let screenshot = match client.screenshot().await {
        Ok(bytes) => bytes,
        Err(e) => {
            ::log::warn!("Screenshot failed, continuing without one: {}", e);
            Vec::new()
        }
    };

    let visible_text = extract_visible_text(&html, config);
    let layout_zones = zones::extract(&html);

    Ok(Snapshot {
        html,
        style_records,
        visible_text,
        layout_zones,
        breakpoints,
        screenshot,
    })
}

async fn collect_style_records(
    client: &Client,
    config: &PipelineConfig,
) -> Result<Vec<StyleRecord>, Box<dyn Error>> {
    let selectors = json!(
        STYLE_SELECTORS
            .iter()
            .map(|(label, selector)| json!({ "label": label, "selector": selector }))
            .collect::<Vec<_>>()
    );
    let max_matches = json!(config.max_records_per_selector);
    let properties = json!(COMPUTED_PROPERTIES);

    let raw = client
        .execute(STYLE_SCRIPT, vec![selectors, max_matches, properties])
        .await?;

    let records: Vec<StyleRecord> = serde_json::from_value(raw)?;
    Ok(records)
}

async fn collect_breakpoints(client: &Client) -> Vec<u32> {
    match client.execute(BREAKPOINT_SCRIPT, vec![]).await {
        Ok(value) => serde_json::from_value(value).unwrap_or_default(),
        Err(e) => {
            ::log::debug!("Breakpoint scan failed, continuing without: {}", e);
            Vec::new()
        }
    }
}

/// Extracts per-region visible text from the cleaned DOM, applying the
/// renderer-side character caps.
fn extract_visible_text(html: &str, config: &PipelineConfig) -> VisibleText {
    let doc = Html::parse_document(html);

    let header = first_element_text(&doc, "header");
    let main = {
        let text = first_element_text(&doc, "main");
        if text.is_empty() {
            first_element_text(&doc, "body")
        } else {
            text
        }
    };
    let footer = first_element_text(&doc, "footer");
    let title = first_element_text(&doc, "title");

    VisibleText {
        header: truncate(&header, config.header_text_limit),
        main: truncate(&main, config.main_text_limit),
        footer: truncate(&footer, config.footer_text_limit),
        title,
        headings: all_element_texts(&doc, "h1, h2, h3"),
        paragraphs: all_element_texts(&doc, "p"),
    }
}

/// Whitespace-normalized text of the first element matching the selector
fn first_element_text(doc: &Html, selector: &str) -> String {
    let selector = Selector::parse(selector).expect("static selector");
    doc.select(&selector)
        .next()
        .map(|element| {
            element
                .text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .unwrap_or_default()
}

/// Whitespace-normalized texts of every element matching the selector,
/// in document order, empty entries dropped
fn all_element_texts(doc: &Html, selector: &str) -> Vec<String> {
    let selector = Selector::parse(selector).expect("static selector");
    doc.select(&selector)
        .map(|element| {
            element
                .text()
                .collect::<Vec<_>>()
                .join(" ")
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|text| !text.is_empty())
        .collect()
}
