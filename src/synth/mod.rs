pub mod css;
pub mod html;

use crate::analyzers::DesignTokenSet;
use crate::components::Component;

/// Synthesizes the complete reconstructed document from the design tokens
/// and the extracted component list.
pub fn document(tokens: &DesignTokenSet, components: &[Component], title: &str) -> String {
    let stylesheet = css::synthesize(tokens, components);
    html::synthesize(components, title, &stylesheet)
}
