use crate::components::{Component, ComponentType};

/// Character cap on the header title line
const HEADER_TITLE_LIMIT: usize = 50;

/// Character cap on the header subtitle line
const HEADER_SUBTITLE_LIMIT: usize = 100;

/// Character cap on a free-text heading
const HEADING_LIMIT: usize = 100;

/// Character cap on a content paragraph
const PARAGRAPH_LIMIT: usize = 300;

/// Character cap on the footer text
const FOOTER_LIMIT: usize = 100;

/// Maximum number of content sections emitted
const MAX_SECTIONS: usize = 3;

/// Title used when the snapshot has none
const DEFAULT_TITLE: &str = "Cloned Website";

/// Paragraph substituted when a heading has no paired paragraph
const MISSING_PARAGRAPH: &str = "Content coming soon...";

/// Footer text substituted when the footer has no content
const DEFAULT_FOOTER: &str = "© 2024 All rights reserved.";

/// Sorts components by priority descending (stable, so ties keep
/// extraction order), emits one fragment per component and wraps the
/// result in the document shell with the synthesized CSS inlined.
pub fn synthesize(components: &[Component], title: &str, css: &str) -> String {
    let mut ordered: Vec<&Component> = components.iter().collect();
    ordered.sort_by(|a, b| b.priority.cmp(&a.priority));

    let fragments: Vec<String> = ordered
        .iter()
        .map(|component| component_fragment(component))
        .filter(|fragment| !fragment.is_empty())
        .collect();

    document_shell(title, css, &fragments.join("\n"))
}

/// Exact character-count truncation; strings at or under the limit pass
/// through unmodified.
pub fn truncate(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

fn non_empty_or<'a>(text: &'a str, fallback: &'a str) -> &'a str {
    if text.is_empty() { fallback } else { text }
}

fn component_fragment(component: &Component) -> String {
    match component.component_type {
        ComponentType::Navigation => navigation_fragment().to_string(),
        ComponentType::Header => header_fragment(component),
        ComponentType::MainContent => main_content_fragment(component),
        ComponentType::Footer => footer_fragment(component),
    }
}

/// Fixed placeholder markup; the extracted navigation content is carried
/// on the component but not interpolated here.
fn navigation_fragment() -> &'static str {
    "    <nav class=\"navbar\">
        <div class=\"container\">
            <div class=\"navbar-brand\">Brand</div>
            <ul class=\"navbar-nav\">
                <li><a href=\"#home\">Home</a></li>
                <li><a href=\"#about\">About</a></li>
                <li><a href=\"#services\">Services</a></li>
                <li><a href=\"#contact\">Contact</a></li>
            </ul>
        </div>
    </nav>"
}

fn header_fragment(component: &Component) -> String {
    let mut lines = component.content.split('\n');
    let first = lines.next().unwrap_or_default();
    let second = lines.next();

    let title = truncate(first, HEADER_TITLE_LIMIT);
    let title = non_empty_or(&title, "Welcome");

    let subtitle = truncate(second.unwrap_or("Discover amazing content"), HEADER_SUBTITLE_LIMIT);
    let subtitle = non_empty_or(&subtitle, "Discover amazing content and services");

    format!(
        "    <header class=\"hero\">
        <div class=\"container\">
            <h1>{title}</h1>
            <p>{subtitle}</p>
            <a href=\"#learn-more\" class=\"btn\">Learn More</a>
        </div>
    </header>"
    )
}

fn main_content_fragment(component: &Component) -> String {
    let mut sections: Vec<String> = Vec::new();

    if !component.headings.is_empty() && !component.paragraphs.is_empty() {
        // Paired heading/paragraph sections
        for (index, heading) in component.headings.iter().take(MAX_SECTIONS).enumerate() {
            let heading = if heading.trim().is_empty() {
                format!("Section {}", index + 1)
            } else {
                heading.clone()
            };
            let paragraph = component
                .paragraphs
                .get(index)
                .map(String::as_str)
                .unwrap_or(MISSING_PARAGRAPH);

            sections.push(format!(
                "            <div class=\"content-section\">
                <h2>{heading}</h2>
                <p>{}</p>
            </div>",
                truncate(paragraph, PARAGRAPH_LIMIT)
            ));
        }
    } else {
        // Free-text fallback: first blank-line-separated part becomes the
        // heading, the next two become paragraphs
        let content = non_empty_or(&component.content, "Welcome to our website");
        for (index, part) in content.split("\n\n").take(MAX_SECTIONS).enumerate() {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if index == 0 {
                sections.push(format!(
                    "            <div class=\"content-section\">
                <h2>{}</h2>
            </div>",
                    truncate(part, HEADING_LIMIT)
                ));
            } else {
                sections.push(format!(
                    "            <div class=\"content-section\">
                <p>{}</p>
            </div>",
                    truncate(part, PARAGRAPH_LIMIT)
                ));
            }
        }
    }

    if sections.is_empty() {
        sections.push(
            "            <div class=\"content-section\">
                <h2>Welcome</h2>
                <p>This is the main content area of the website.</p>
            </div>"
                .to_string(),
        );
    }

    format!(
        "    <main class=\"main-content\">
        <div class=\"container\">
{}
            <div class=\"content-section\">
                <a href=\"#contact\" class=\"btn\">Get Started</a>
            </div>
        </div>
    </main>",
        sections.join("\n")
    )
}

fn footer_fragment(component: &Component) -> String {
    let text = if component.content.is_empty() {
        DEFAULT_FOOTER.to_string()
    } else {
        truncate(&component.content, FOOTER_LIMIT)
    };

    format!(
        "    <footer class=\"footer\">
        <div class=\"container\">
            <p>{text}</p>
        </div>
    </footer>"
    )
}

fn document_shell(title: &str, css: &str, body: &str) -> String {
    let title = non_empty_or(title, DEFAULT_TITLE);

    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
    <meta charset=\"UTF-8\">
    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">
    <title>{title}</title>
    <style>
{css}
    </style>
</head>
<body>
{body}
</body>
</html>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn component(component_type: ComponentType, content: &str, priority: u32) -> Component {
        Component {
            component_type,
            styles: BTreeMap::new(),
            content: content.to_string(),
            headings: Vec::new(),
            paragraphs: Vec::new(),
            zone_signature: Vec::new(),
            priority,
        }
    }

    #[test]
    fn test_truncation_boundaries() {
        let exactly = "x".repeat(300);
        assert_eq!(truncate(&exactly, 300), exactly);

        let over = "x".repeat(301);
        assert_eq!(truncate(&over, 300).chars().count(), 300);

        // Counted in chars, not bytes
        let unicode = "é".repeat(51);
        assert_eq!(truncate(&unicode, 50).chars().count(), 50);
    }

    #[test]
    fn test_header_title_and_subtitle_limits() {
        let title = "t".repeat(60);
        let subtitle = "s".repeat(120);
        let header = component(
            ComponentType::Header,
            &format!("{title}\n{subtitle}"),
            9,
        );
        let fragment = header_fragment(&header);
        assert!(fragment.contains(&format!("<h1>{}</h1>", "t".repeat(50))));
        assert!(fragment.contains(&format!("<p>{}</p>", "s".repeat(100))));
    }

    #[test]
    fn test_header_defaults() {
        let header = component(ComponentType::Header, "", 9);
        let fragment = header_fragment(&header);
        assert!(fragment.contains("<h1>Welcome</h1>"));
        assert!(fragment.contains("<p>Discover amazing content</p>"));

        let single_line = component(ComponentType::Header, "Only title", 9);
        let fragment = header_fragment(&single_line);
        assert!(fragment.contains("<h1>Only title</h1>"));
        assert!(fragment.contains("<p>Discover amazing content</p>"));
    }

    #[test]
    fn test_main_content_paired_sections() {
        let mut main = component(ComponentType::MainContent, "ignored", 8);
        main.headings = vec![
            "First".to_string(),
            "Second".to_string(),
            "Third".to_string(),
            "Fourth".to_string(),
        ];
        main.paragraphs = vec!["one".to_string(), "two".to_string()];

        let fragment = main_content_fragment(&main);
        assert!(fragment.contains("<h2>First</h2>"));
        assert!(fragment.contains("<h2>Third</h2>"));
        // Fourth heading is beyond the section cap
        assert!(!fragment.contains("<h2>Fourth</h2>"));
        // Third heading has no paired paragraph
        assert!(fragment.contains("<p>Content coming soon...</p>"));
        assert!(fragment.contains("Get Started"));
    }

    #[test]
    fn test_main_content_free_text_split() {
        let main = component(
            ComponentType::MainContent,
            "Welcome\n\nHello world\n\nMore text\n\nDropped",
            8,
        );
        let fragment = main_content_fragment(&main);
        assert!(fragment.contains("<h2>Welcome</h2>"));
        assert!(fragment.contains("<p>Hello world</p>"));
        assert!(fragment.contains("<p>More text</p>"));
        assert!(!fragment.contains("Dropped"));
    }

    #[test]
    fn test_main_content_empty_gets_welcome_block() {
        let main = component(ComponentType::MainContent, "", 8);
        let fragment = main_content_fragment(&main);
        assert!(fragment.contains("<h2>Welcome to our website</h2>"));
        assert!(fragment.contains("Get Started"));
    }

    #[test]
    fn test_footer_truncation_and_default() {
        let footer = component(ComponentType::Footer, &"f".repeat(101), 5);
        let fragment = footer_fragment(&footer);
        assert!(fragment.contains(&format!("<p>{}</p>", "f".repeat(100))));

        let empty = component(ComponentType::Footer, "", 5);
        let fragment = footer_fragment(&empty);
        assert!(fragment.contains("© 2024 All rights reserved."));
    }

    #[test]
    fn test_priority_ordering_is_stable_descending() {
        // Shuffled input must come out navigation, header, main, footer
        let components = vec![
            component(ComponentType::Footer, "foot", 5),
            component(ComponentType::MainContent, "Main", 8),
            component(ComponentType::Navigation, "", 10),
            component(ComponentType::Header, "Head", 9),
        ];
        let html = synthesize(&components, "Test", "");

        let nav = html.find("<nav").unwrap();
        let header = html.find("<header").unwrap();
        let main = html.find("<main").unwrap();
        let footer = html.find("<footer").unwrap();
        assert!(nav < header && header < main && main < footer);
    }

    #[test]
    fn test_document_shell_title_default() {
        let html = synthesize(&[], "", "");
        assert!(html.contains("<title>Cloned Website</title>"));

        let html = synthesize(&[], "My Page", "");
        assert!(html.contains("<title>My Page</title>"));
    }
}
