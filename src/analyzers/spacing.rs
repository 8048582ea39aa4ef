use crate::analyzers::FrequencyCounter;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How many values each spacing field keeps
const TOP_FIELDS: usize = 5;

/// Spacing tokens ranked by frequency, at most five entries per field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpacingSummary {
    pub common_margins: Vec<String>,
    pub common_paddings: Vec<String>,
}

/// Single linear scan over flattened style text collecting pixel values
/// that follow margin and padding declarations. `auto` margins are not
/// spacing signals and are skipped.
pub fn summarize(style_text: &str) -> SpacingSummary {
    let pixels = Regex::new(r"\d+px").expect("static pattern");

    let mut margins = FrequencyCounter::new();
    let mut paddings = FrequencyCounter::new();

    for line in style_text.lines() {
        let line = line.trim();

        if line.contains("margin") && line.contains(':') && !line.contains("auto") {
            for value in pixels.find_iter(line) {
                margins.tally(value.as_str());
            }
        }

        if line.contains("padding") && line.contains(':') {
            for value in pixels.find_iter(line) {
                paddings.tally(value.as_str());
            }
        }
    }

    SpacingSummary {
        common_margins: margins.top(TOP_FIELDS),
        common_paddings: paddings.top(TOP_FIELDS),
    }
}
