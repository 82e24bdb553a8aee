use std::borrow::Borrow;
use std::collections::HashMap;

use super::format::capitalize_first;
use super::model::Record;

// ---------------------------------------------------------------------------
// Summary statistics over any record subset
// ---------------------------------------------------------------------------

/// Headline figures for the current selection. Every field is defined for an
/// empty selection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Summary {
    pub count: usize,
    /// Kilograms, rounded half-up to one decimal.
    pub average_weight: f64,
    /// Empty when `count == 0`.
    pub most_common_category: String,
    pub average_base_experience: u32,
}

impl Summary {
    /// Display form of the most common category ("N/A" when there is none).
    pub fn most_common_category_label(&self) -> String {
        if self.most_common_category.is_empty() {
            "N/A".to_string()
        } else {
            capitalize_first(&self.most_common_category)
        }
    }
}

pub fn summarize<R: Borrow<Record>>(records: &[R]) -> Summary {
    Summary {
        count: records.len(),
        average_weight: average_weight(records),
        most_common_category: most_common_category(records),
        average_base_experience: average_base_experience(records),
    }
}

/// Mean weight in kilograms to one decimal.
///
/// Weights are stored in tenths of a kilogram, so rounding the mean of the
/// stored values to an integer is exactly rounding the kilogram mean to one
/// decimal.
pub fn average_weight<R: Borrow<Record>>(records: &[R]) -> f64 {
    let total: u64 = records.iter().map(|r| u64::from(r.borrow().weight_deci)).sum();
    match rounded_mean(total, records.len()) {
        Some(tenths) => tenths as f64 / 10.0,
        None => 0.0,
    }
}

/// Mean base experience, absent values counting as zero.
pub fn average_base_experience<R: Borrow<Record>>(records: &[R]) -> u32 {
    let total: u64 = records
        .iter()
        .map(|r| u64::from(r.borrow().base_experience.unwrap_or(0)))
        .sum();
    rounded_mean(total, records.len()).map_or(0, |m| m as u32)
}

/// The category with the strictly highest occurrence count; on a tie the
/// one seen first wins. Empty when there are no records.
pub fn most_common_category<R: Borrow<Record>>(records: &[R]) -> String {
    let mut leader: Option<(&str, usize)> = None;
    for (category, count) in category_counts(records) {
        match leader {
            Some((_, best)) if count <= best => {}
            _ => leader = Some((category, count)),
        }
    }
    leader.map(|(c, _)| c.to_string()).unwrap_or_default()
}

/// Occurrences of each category across every record's category list, in
/// first-seen order.
pub fn category_counts<R: Borrow<Record>>(records: &[R]) -> Vec<(&str, usize)> {
    let mut position: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for record in records {
        for category in &record.borrow().categories {
            match position.get(category.as_str()) {
                Some(&i) => counts[i].1 += 1,
                None => {
                    position.insert(category.as_str(), counts.len());
                    counts.push((category.as_str(), 1));
                }
            }
        }
    }
    counts
}

/// `total / count` rounded half-up, or `None` for an empty selection.
pub(crate) fn rounded_mean(total: u64, count: usize) -> Option<u64> {
    if count == 0 {
        return None;
    }
    let count = count as u64;
    Some((2 * total + count) / (2 * count))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::tests::record;

    fn weighted(id: u32, weight_deci: u32, base_experience: Option<u32>) -> Record {
        Record {
            weight_deci,
            base_experience,
            ..record(id, &format!("mon{id}"), &["normal"])
        }
    }

    #[test]
    fn empty_selection_has_defined_summary() {
        let none: [Record; 0] = [];
        let s = summarize(&none);
        assert_eq!(
            s,
            Summary {
                count: 0,
                average_weight: 0.0,
                most_common_category: String::new(),
                average_base_experience: 0,
            }
        );
        assert_eq!(s.most_common_category_label(), "N/A");
    }

    #[test]
    fn average_weight_is_kilograms_to_one_decimal() {
        let records = [weighted(1, 100, None), weighted(2, 250, None)];
        assert_eq!(average_weight(&records), 17.5);

        // 10 + 11 + 11 = 32 / 3 = 10.67 tenths -> 1.1 kg
        let records = [weighted(1, 10, None), weighted(2, 11, None), weighted(3, 11, None)];
        assert_eq!(average_weight(&records), 1.1);

        // 1 + 2 = 1.5 tenths rounds half-up -> 0.2 kg
        let records = [weighted(1, 1, None), weighted(2, 2, None)];
        assert_eq!(average_weight(&records), 0.2);
    }

    #[test]
    fn base_experience_treats_absent_as_zero() {
        let records = [weighted(1, 0, Some(64)), weighted(2, 0, None), weighted(3, 0, Some(142))];
        // 206 / 3 = 68.67
        assert_eq!(average_base_experience(&records), 69);

        let records = [weighted(1, 0, Some(1)), weighted(2, 0, Some(2))];
        assert_eq!(average_base_experience(&records), 2);
    }

    #[test]
    fn most_common_counts_every_category() {
        let records = [
            record(1, "a", &["fire"]),
            record(2, "b", &["water", "flying"]),
            record(3, "c", &["flying"]),
        ];
        assert_eq!(most_common_category(&records), "flying");
    }

    #[test]
    fn most_common_tie_goes_to_first_seen() {
        let records = [
            record(1, "a", &["water"]),
            record(2, "b", &["fire"]),
            record(3, "c", &["fire", "water"]),
        ];
        assert_eq!(most_common_category(&records), "water");
        let s = summarize(&records);
        assert_eq!(s.most_common_category_label(), "Water");
    }

    #[test]
    fn summarize_accepts_borrowed_views() {
        let records = [weighted(1, 100, Some(10)), weighted(2, 250, Some(20))];
        let view: Vec<&Record> = records.iter().collect();
        assert_eq!(summarize(&view), summarize(&records));
        assert_eq!(summarize(&view).count, 2);
    }

    #[test]
    fn category_counts_keep_first_seen_order() {
        let records = [
            record(1, "a", &["fire"]),
            record(2, "b", &["fire", "flying"]),
            record(3, "c", &["water"]),
        ];
        assert_eq!(
            category_counts(&records),
            vec![("fire", 2), ("flying", 1), ("water", 1)]
        );
    }

    proptest! {
        #[test]
        fn averages_stay_within_input_bounds(
            rows in prop::collection::vec((0u32..10_000, prop::option::of(0u32..700)), 1..20)
        ) {
            let records: Vec<Record> = rows
                .iter()
                .enumerate()
                .map(|(i, &(w, xp))| weighted(i as u32 + 1, w, xp))
                .collect();
            let s = summarize(&records);

            let min_w = rows.iter().map(|r| r.0).min().unwrap() as f64 / 10.0;
            let max_w = rows.iter().map(|r| r.0).max().unwrap() as f64 / 10.0;
            prop_assert!(s.average_weight >= min_w && s.average_weight <= max_w);

            let max_xp = rows.iter().map(|r| r.1.unwrap_or(0)).max().unwrap();
            prop_assert!(s.average_base_experience <= max_xp);
            prop_assert_eq!(s.most_common_category, "normal");
        }
    }
}
