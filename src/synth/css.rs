use crate::analyzers::{DesignTokenSet, layout};
use crate::components::{Component, ComponentType};

/// Color substituted when the primary bucket is empty
const DEFAULT_PRIMARY_COLOR: &str = "#007bff";

/// Color substituted when the text bucket is empty
const DEFAULT_TEXT_COLOR: &str = "#333333";

/// Color substituted when the background bucket is empty
const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Font substituted when no font family was summarized
const DEFAULT_FONT: &str = "Arial, sans-serif";

/// Emits the full deterministic stylesheet: reset, token variables, one
/// block per component, the layout block for the dominant method and the
/// fixed responsive block. Blocks are joined with blank lines and empty
/// blocks are filtered out.
pub fn synthesize(tokens: &DesignTokenSet, components: &[Component]) -> String {
    let mut blocks = vec![reset_block().to_string(), variable_block(tokens)];

    for component in components {
        let block = component_block(component);
        if !block.is_empty() {
            blocks.push(block);
        }
    }

    blocks.push(layout_block(tokens));
    blocks.push(responsive_block().to_string());

    blocks
        .into_iter()
        .filter(|block| !block.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Static reset rules, constant across all runs
fn reset_block() -> &'static str {
    "/* CSS Reset */
* {
    margin: 0;
    padding: 0;
    box-sizing: border-box;
}

body {
    line-height: 1.6;
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}

img {
    max-width: 100%;
    height: auto;
}

a {
    text-decoration: none;
    color: inherit;
}

button {
    border: none;
    background: none;
    cursor: pointer;
}"
}

/// `:root` custom properties populated from the design tokens
fn variable_block(tokens: &DesignTokenSet) -> String {
    let primary = first_or(&tokens.colors.primary, DEFAULT_PRIMARY_COLOR);
    let text = first_or(&tokens.colors.text, DEFAULT_TEXT_COLOR);
    let background = first_or(&tokens.colors.background, DEFAULT_BACKGROUND_COLOR);
    let font = first_or(&tokens.typography.font_families, DEFAULT_FONT);

    format!(
        "/* CSS Variables */
:root {{
    --color-primary: {primary};
    --color-secondary: #6c757d;
    --color-text: {text};
    --color-text-light: #666666;
    --color-background: {background};
    --color-background-light: #f8f9fa;
    --color-border: #e0e0e0;

    --font-primary: {font};
    --font-size-base: 16px;
    --font-size-sm: 14px;
    --font-size-lg: 18px;
    --font-size-xl: 24px;
    --font-size-xxl: 32px;

    --spacing-xs: 0.25rem;
    --spacing-sm: 0.5rem;
    --spacing-md: 1rem;
    --spacing-lg: 1.5rem;
    --spacing-xl: 2rem;
    --spacing-xxl: 3rem;

    --border-radius: 0.375rem;
    --box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
    --transition: all 0.3s ease;
}}"
    )
}

fn first_or<'a>(values: &'a [String], fallback: &'a str) -> &'a str {
    values.first().map(String::as_str).unwrap_or(fallback)
}

/// Dispatches a component to its type-specific template
fn component_block(component: &Component) -> String {
    match component.component_type {
        ComponentType::Navigation => navigation_block(component),
        ComponentType::Header => header_block(component),
        ComponentType::MainContent => main_content_block(),
        ComponentType::Footer => footer_block(component),
    }
}

fn navigation_block(component: &Component) -> String {
    let background = component
        .style("background-color")
        .unwrap_or("var(--color-background-light)");

    format!(
        "/* Navigation */
.navbar {{
    background-color: {background};
    padding: var(--spacing-md) 0;
    border-bottom: 1px solid var(--color-border);
    position: sticky;
    top: 0;
    z-index: 1000;
}}

.navbar .container {{
    display: flex;
    justify-content: space-between;
    align-items: center;
}}

.navbar-brand {{
    font-size: var(--font-size-xl);
    font-weight: bold;
    color: var(--color-primary);
}}

.navbar-nav {{
    display: flex;
    list-style: none;
    gap: var(--spacing-lg);
}}

.navbar-nav a {{
    color: var(--color-text);
    font-weight: 500;
    transition: var(--transition);
    padding: var(--spacing-sm) var(--spacing-md);
    border-radius: var(--border-radius);
}}

.navbar-nav a:hover {{
    color: var(--color-primary);
    background-color: rgba(0, 123, 255, 0.1);
}}"
    )
}

fn header_block(component: &Component) -> String {
    let background = component
        .style("background-color")
        .unwrap_or("var(--color-primary)");
    let color = component.style("color").unwrap_or("white");

    format!(
        "/* Header */
.hero {{
    background: {background};
    color: {color};
    padding: var(--spacing-xxl) 0;
    text-align: center;
}}

.hero h1 {{
    font-size: var(--font-size-xxl);
    font-weight: bold;
    margin-bottom: var(--spacing-md);
    line-height: 1.2;
}}

.hero p {{
    font-size: var(--font-size-lg);
    opacity: 0.9;
    max-width: 600px;
    margin: 0 auto var(--spacing-lg);
}}

.hero .btn {{
    display: inline-block;
    background: rgba(255, 255, 255, 0.2);
    color: white;
    padding: var(--spacing-md) var(--spacing-xl);
    border-radius: var(--border-radius);
    font-weight: 600;
    transition: var(--transition);
    border: 2px solid rgba(255, 255, 255, 0.3);
}}

.hero .btn:hover {{
    background: rgba(255, 255, 255, 0.3);
    transform: translateY(-2px);
}}"
    )
}

fn main_content_block() -> String {
    "/* Main Content */
.main-content {
    padding: var(--spacing-xxl) 0;
}

.content-section {
    margin-bottom: var(--spacing-xxl);
}

.content-section h2 {
    font-size: var(--font-size-xl);
    margin-bottom: var(--spacing-lg);
    color: var(--color-text);
}

.content-section p {
    font-size: var(--font-size-base);
    line-height: 1.7;
    margin-bottom: var(--spacing-md);
    color: var(--color-text-light);
}

.card {
    background: var(--color-background);
    border-radius: var(--border-radius);
    padding: var(--spacing-xl);
    box-shadow: var(--box-shadow);
    margin-bottom: var(--spacing-lg);
}

.btn {
    display: inline-block;
    background: var(--color-primary);
    color: white;
    padding: var(--spacing-md) var(--spacing-lg);
    border-radius: var(--border-radius);
    font-weight: 600;
    transition: var(--transition);
    text-align: center;
}

.btn:hover {
    background: var(--color-secondary);
    transform: translateY(-2px);
}"
    .to_string()
}

fn footer_block(component: &Component) -> String {
    let background = component
        .style("background-color")
        .unwrap_or("var(--color-background-light)");

    format!(
        "/* Footer */
.footer {{
    background: {background};
    padding: var(--spacing-xxl) 0;
    border-top: 1px solid var(--color-border);
    margin-top: var(--spacing-xxl);
}}

.footer p {{
    color: var(--color-text-light);
    text-align: center;
    font-size: var(--font-size-sm);
}}"
    )
}

/// Container rules plus the branch for the dominant layout method.
/// Exactly one of the grid/flex/block branches fires.
fn layout_block(tokens: &DesignTokenSet) -> String {
    let mut block = "/* Layout */
.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 var(--spacing-md);
}

.container-fluid {
    width: 100%;
    padding: 0 var(--spacing-md);
}

.section {
    padding: var(--spacing-xxl) 0;
}"
    .to_string();

    match layout::dominant_method(&tokens.layout_methods) {
        "grid" => block.push_str(
            "
.grid {
    display: grid;
    gap: var(--spacing-lg);
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
}",
        ),
        "flex" => block.push_str(
            "
.flex {
    display: flex;
    gap: var(--spacing-lg);
}

.flex-wrap {
    flex-wrap: wrap;
}

.flex-center {
    justify-content: center;
    align-items: center;
}",
        ),
        _ => {}
    }

    block
}

/// Fixed responsive rules. The 768px/480px thresholds are constants;
/// breakpoints detected in the snapshot are never substituted here.
fn responsive_block() -> &'static str {
    "/* Responsive Design */
@media (max-width: 768px) {
    .container {
        padding: 0 var(--spacing-sm);
    }

    .hero h1 {
        font-size: var(--font-size-xl);
    }

    .navbar .container {
        flex-direction: column;
        gap: var(--spacing-md);
    }

    .navbar-nav {
        flex-direction: column;
        width: 100%;
        text-align: center;
    }

    .grid {
        grid-template-columns: 1fr;
    }

    .flex {
        flex-direction: column;
    }
}

@media (max-width: 480px) {
    .hero {
        padding: var(--spacing-xl) 0;
    }

    .hero h1 {
        font-size: var(--font-size-lg);
    }

    .card {
        padding: var(--spacing-md);
    }
}"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::StyleRecord;

    fn tokens_from(records: &[StyleRecord]) -> DesignTokenSet {
        crate::analyzers::analyze(records)
    }

    #[test]
    fn test_variable_defaults_when_buckets_empty() {
        let css = synthesize(&DesignTokenSet::default(), &[]);
        assert!(css.contains("--color-primary: #007bff;"));
        assert!(css.contains("--color-text: #333333;"));
        assert!(css.contains("--color-background: #ffffff;"));
        assert!(css.contains("--font-primary: Arial, sans-serif;"));
    }

    #[test]
    fn test_variables_take_first_bucket_entry() {
        let records = vec![
            StyleRecord::new("body", "body", [("backgroundColor", "rgb(250, 250, 250)")]),
            StyleRecord::new("paragraph", "p", [("color", "rgb(20, 20, 20)")]),
        ];
        let css = synthesize(&tokens_from(&records), &[]);
        assert!(css.contains("--color-background: rgb(250, 250, 250);"));
        assert!(css.contains("--color-text: rgb(20, 20, 20);"));
    }

    #[test]
    fn test_layout_branch_grid() {
        let records = vec![StyleRecord::new("grid", ".grid", [("display", "grid")])];
        let css = synthesize(&tokens_from(&records), &[]);
        assert!(css.contains("grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));"));
        assert!(!css.contains(".flex-center"));
    }

    #[test]
    fn test_layout_branch_flex() {
        let records = vec![
            StyleRecord::new("nav", "nav", [("display", "flex")]),
            StyleRecord::new("hero", ".hero", [("display", "flex")]),
        ];
        let css = synthesize(&tokens_from(&records), &[]);
        assert!(css.contains(".flex-center"));
        assert!(!css.contains("repeat(auto-fit"));
    }

    #[test]
    fn test_layout_branch_block_default() {
        let css = synthesize(&DesignTokenSet::default(), &[]);
        assert!(!css.contains(".flex-center"));
        assert!(!css.contains("repeat(auto-fit"));
        assert!(css.contains(".container {"));
    }

    #[test]
    fn test_responsive_breakpoints_are_fixed() {
        let css = synthesize(&DesignTokenSet::default(), &[]);
        assert!(css.contains("@media (max-width: 768px)"));
        assert!(css.contains("@media (max-width: 480px)"));
    }

    #[test]
    fn test_blocks_joined_with_blank_lines() {
        let css = synthesize(&DesignTokenSet::default(), &[]);
        assert!(css.contains("}\n\n/* CSS Variables */"));
        assert!(!css.contains("\n\n\n"));
    }
}
