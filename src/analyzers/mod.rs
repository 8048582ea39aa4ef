pub mod colors;
pub mod layout;
pub mod spacing;
pub mod styles;
pub mod typography;
pub mod zones;

#[cfg(test)]
mod tests;

use crate::snapshot::StyleRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Normalized, reusable style values aggregated from one snapshot's
/// style records. Built once per run and read-only afterward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignTokenSet {
    pub colors: colors::ColorBuckets,
    pub typography: typography::TypographySummary,
    pub spacing: spacing::SpacingSummary,
    pub layout_methods: BTreeMap<String, u32>,
}

/// Runs every aggregator over the snapshot's style records
pub fn analyze(records: &[StyleRecord]) -> DesignTokenSet {
    let style_text = styles::flatten_records(records);

    let tokens = DesignTokenSet {
        colors: colors::classify(records),
        typography: typography::summarize(&style_text),
        spacing: spacing::summarize(&style_text),
        layout_methods: layout::summarize(&style_text),
    };

    ::log::debug!(
        "Design tokens: {} fonts, {} layout methods",
        tokens.typography.font_families.len(),
        tokens.layout_methods.len()
    );

    tokens
}

/// Frequency counter that remembers first-seen order so that ties in the
/// rankings resolve stably.
pub(crate) struct FrequencyCounter {
    entries: Vec<(String, u32)>,
}

impl FrequencyCounter {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Count one occurrence of a value
    pub fn tally(&mut self, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(seen, _)| seen == value) {
            entry.1 += 1;
        } else {
            self.entries.push((value.to_string(), 1));
        }
    }

    /// Entries sorted by count descending; the sort is stable, so ties keep
    /// first-seen order.
    pub fn ranked(mut self) -> Vec<(String, u32)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries
    }

    /// The `n` most frequent values
    pub fn top(self, n: usize) -> Vec<String> {
        self.ranked()
            .into_iter()
            .take(n)
            .map(|(value, _)| value)
            .collect()
    }
}
