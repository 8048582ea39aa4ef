use std::collections::BTreeMap;

/// Display values that count as layout methods. The order doubles as the
/// tie-break order when picking the dominant method.
const DISPLAY_METHODS: [&str; 4] = ["flex", "grid", "block", "inline-block"];

/// Position values that count as layout methods
const POSITION_METHODS: [&str; 4] = ["absolute", "relative", "fixed", "sticky"];

/// Tallies layout-method usage across flattened style text. Only methods
/// with a count above zero appear in the result.
pub fn summarize(style_text: &str) -> BTreeMap<String, u32> {
    let mut methods: BTreeMap<String, u32> = BTreeMap::new();

    for line in style_text.lines() {
        let line = line.trim();

        if line.contains("display:") {
            if let Some(value) = declaration_value(line) {
                if DISPLAY_METHODS.contains(&value) {
                    *methods.entry(value.to_string()).or_insert(0) += 1;
                }
            }
        }

        if line.contains("position:") {
            if let Some(value) = declaration_value(line) {
                if POSITION_METHODS.contains(&value) {
                    *methods.entry(value.to_string()).or_insert(0) += 1;
                }
            }
        }

        if line.contains("float:") {
            *methods.entry("float".to_string()).or_insert(0) += 1;
        }
    }

    methods
}

/// Picks the display method driving the synthesized layout rules.
/// Highest tally wins; ties resolve to the earlier entry in the fixed
/// method order. Pages with no tallied display method lay out as block.
pub fn dominant_method(methods: &BTreeMap<String, u32>) -> &'static str {
    let mut best = "block";
    let mut best_count = 0;

    for method in DISPLAY_METHODS {
        let count = methods.get(method).copied().unwrap_or(0);
        if count > best_count {
            best = method;
            best_count = count;
        }
    }

    best
}

/// Value of a single `property: value;` line
fn declaration_value(line: &str) -> Option<&str> {
    let (_, value) = line.split_once(':')?;
    Some(value.trim().trim_end_matches(';').trim())
}
