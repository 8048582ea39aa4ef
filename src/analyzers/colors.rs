use crate::analyzers::FrequencyCounter;
use crate::analyzers::styles::canonical_property_name;
use crate::snapshot::StyleRecord;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Only the most frequent colors are classified
const TOP_WINDOW: usize = 10;

/// Mean RGB channel value above which a color counts as a background
const BACKGROUND_THRESHOLD: f64 = 200.0;

/// Mean RGB channel value below which a color counts as text
const TEXT_THRESHOLD: f64 = 100.0;

/// Usage count above which a mid-luminance color counts as primary
const PRIMARY_USAGE: u32 = 3;

/// Colors bucketed by their likely role on the page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorBuckets {
    pub primary: Vec<String>,
    pub secondary: Vec<String>,
    pub text: Vec<String>,
    pub background: Vec<String>,
    pub accent: Vec<String>,
}

impl ColorBuckets {
    pub fn is_empty(&self) -> bool {
        self.primary.is_empty()
            && self.secondary.is_empty()
            && self.text.is_empty()
            && self.background.is_empty()
            && self.accent.is_empty()
    }
}

/// Deduplicates and ranks color values by usage frequency, then classifies
/// the top window by luminance into background/text/primary/accent buckets.
///
/// Values are deduplicated by exact string equality; no color-space
/// normalization is applied. Every value in the window lands in exactly one
/// bucket: non-`rgb` values skip the luminance checks and fall through to
/// the usage rule, so nothing is silently dropped.
pub fn classify(records: &[StyleRecord]) -> ColorBuckets {
    let mut counter = FrequencyCounter::new();

    for record in records {
        for (property, value) in &record.properties {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            if canonical_property_name(property).contains("color") {
                counter.tally(value);
            }
        }
    }

    let mut buckets = ColorBuckets::default();
    for (value, usage) in counter.ranked().into_iter().take(TOP_WINDOW) {
        match channel_average(&value) {
            Some(avg) if avg > BACKGROUND_THRESHOLD => buckets.background.push(value),
            Some(avg) if avg < TEXT_THRESHOLD => buckets.text.push(value),
            _ if usage > PRIMARY_USAGE => buckets.primary.push(value),
            _ => buckets.accent.push(value),
        }
    }

    ::log::debug!(
        "Classified colors: {} background, {} text, {} primary, {} accent",
        buckets.background.len(),
        buckets.text.len(),
        buckets.primary.len(),
        buckets.accent.len()
    );

    buckets
}

/// Mean of the first three numeric components of an `rgb(...)`/`rgba(...)`
/// value; `None` when the value is not an rgb form or has too few components.
fn channel_average(color: &str) -> Option<f64> {
    if !color.contains("rgb") {
        return None;
    }

    let digits = Regex::new(r"\d+").expect("static pattern");
    let components: Vec<f64> = digits
        .find_iter(color)
        .take(3)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect();

    if components.len() < 3 {
        return None;
    }

    Some(components.iter().sum::<f64>() / 3.0)
}
