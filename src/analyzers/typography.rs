use crate::analyzers::FrequencyCounter;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How many values each typography field keeps
const TOP_FIELDS: usize = 3;

/// Font tokens ranked by frequency, at most three entries per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypographySummary {
    pub font_families: Vec<String>,
    pub font_sizes: Vec<String>,
    pub font_weights: Vec<String>,
}

/// Single linear scan over flattened style text, tallying font-family,
/// font-size and font-weight values. A line feeds at most one field.
pub fn summarize(style_text: &str) -> TypographySummary {
    let family_pattern = Regex::new(r"font-family:\s*([^;]+);").expect("static pattern");
    let size_pattern = Regex::new(r"font-size:\s*([^;]+);").expect("static pattern");
    let weight_pattern = Regex::new(r"font-weight:\s*([^;]+);").expect("static pattern");

    let mut families = FrequencyCounter::new();
    let mut sizes = FrequencyCounter::new();
    let mut weights = FrequencyCounter::new();

    for line in style_text.lines() {
        let line = line.trim();

        if line.contains("font-family") {
            if let Some(captures) = family_pattern.captures(line) {
                families.tally(captures[1].trim());
            }
        } else if line.contains("font-size") {
            if let Some(captures) = size_pattern.captures(line) {
                sizes.tally(captures[1].trim());
            }
        } else if line.contains("font-weight") {
            if let Some(captures) = weight_pattern.captures(line) {
                weights.tally(captures[1].trim());
            }
        }
    }

    TypographySummary {
        font_families: families.top(TOP_FIELDS),
        font_sizes: sizes.top(TOP_FIELDS),
        font_weights: weights.top(TOP_FIELDS),
    }
}
