use std::borrow::Borrow;

use super::format::capitalize_first;
use super::model::{MetricKey, Record};
use super::stats::{category_counts, rounded_mean};

// ---------------------------------------------------------------------------
// Chart datasets
// ---------------------------------------------------------------------------

/// One bar / slice of a chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartEntry {
    pub label: String,
    pub value: u32,
}

impl ChartEntry {
    pub fn new(label: impl Into<String>, value: u32) -> Self {
        ChartEntry {
            label: label.into(),
            value,
        }
    }
}

/// Category occurrences, largest first. Equal counts keep first-seen order.
pub fn build_category_distribution<R: Borrow<Record>>(records: &[R]) -> Vec<ChartEntry> {
    let mut entries: Vec<ChartEntry> = category_counts(records)
        .into_iter()
        .map(|(category, count)| ChartEntry::new(capitalize_first(category), count as u32))
        .collect();
    // `sort_by` is stable.
    entries.sort_by(|a, b| b.value.cmp(&a.value));
    entries
}

/// Rounded mean of each metric, always six entries in canonical order.
/// An empty selection yields zeros.
pub fn build_metric_averages<R: Borrow<Record>>(records: &[R]) -> Vec<ChartEntry> {
    let mut totals = [0u64; 6];
    for record in records {
        for (key, value) in record.borrow().metrics.iter() {
            totals[key.index()] += u64::from(value);
        }
    }

    MetricKey::ALL
        .into_iter()
        .map(|key| {
            let mean = rounded_mean(totals[key.index()], records.len()).unwrap_or(0);
            ChartEntry::new(key.label(), mean as u32)
        })
        .collect()
}
