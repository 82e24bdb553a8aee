use super::model::Record;

// ---------------------------------------------------------------------------
// Filter criteria: free-text name search plus one optional category
// ---------------------------------------------------------------------------

/// Current filter selection. An empty `selected_category` means "any category".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_term: String,
    pub selected_category: String,
}

impl FilterCriteria {
    pub fn new(search_term: impl Into<String>, selected_category: impl Into<String>) -> Self {
        FilterCriteria {
            search_term: search_term.into(),
            selected_category: selected_category.into(),
        }
    }

    /// True when neither the search term nor the category restricts anything.
    pub fn is_unrestricted(&self) -> bool {
        self.search_term.is_empty() && self.selected_category.is_empty()
    }
}

/// Decide whether `record` passes `criteria`.
///
/// * name: case-insensitive substring match (empty term matches everything)
/// * category: exact, case-sensitive match against any of the record's
///   categories (empty selection matches everything)
pub fn include(record: &Record, criteria: &FilterCriteria) -> bool {
    let matches_category = criteria.selected_category.is_empty()
        || record.has_category(&criteria.selected_category);

    matches_category && matches_search(&record.name, &criteria.search_term)
}

fn matches_search(name: &str, term: &str) -> bool {
    term.is_empty() || name.to_lowercase().contains(&term.to_lowercase())
}

/// Return indices of records that pass `criteria`, in input order.
pub fn filtered_indices(records: &[Record], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| include(r, criteria))
        .map(|(i, _)| i)
        .collect()
}

/// Borrowing view of the records that pass `criteria`, in input order.
pub fn filter_records<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    records.iter().filter(|r| include(r, criteria)).collect()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::data::model::tests::record;

    fn base_set() -> Vec<Record> {
        vec![
            record(1, "bulbasaur", &["grass", "poison"]),
            record(6, "charizard", &["fire", "flying"]),
            record(7, "squirtle", &["water"]),
            record(25, "pikachu", &["electric"]),
            record(26, "raichu", &["electric"]),
        ]
    }

    fn names(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn unrestricted_criteria_keep_everything_in_order() {
        let records = base_set();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_unrestricted());
        assert_eq!(filtered_indices(&records, &criteria), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let records = base_set();
        let hits = filter_records(&records, &FilterCriteria::new("PIKA", ""));
        assert_eq!(names(&hits), ["pikachu"]);

        let hits = filter_records(&records, &FilterCriteria::new("chu", ""));
        assert_eq!(names(&hits), ["pikachu", "raichu"]);
    }

    #[test]
    fn category_matches_any_slot_exactly() {
        let records = base_set();
        let hits = filter_records(&records, &FilterCriteria::new("", "flying"));
        assert_eq!(names(&hits), ["charizard"]);

        let hits = filter_records(&records, &FilterCriteria::new("", "poison"));
        assert_eq!(names(&hits), ["bulbasaur"]);

        // Stored names are compared verbatim.
        assert!(filter_records(&records, &FilterCriteria::new("", "Fire")).is_empty());
    }

    #[test]
    fn both_criteria_must_hold() {
        let records = base_set();
        let hits = filter_records(&records, &FilterCriteria::new("rai", "electric"));
        assert_eq!(names(&hits), ["raichu"]);
        assert!(filter_records(&records, &FilterCriteria::new("rai", "water")).is_empty());
    }

    #[test]
    fn unknown_category_yields_empty_subset() {
        let records = base_set();
        assert!(filtered_indices(&records, &FilterCriteria::new("", "dragon")).is_empty());
    }

    fn arb_records() -> impl Strategy<Value = Vec<Record>> {
        let category = prop_oneof![Just("fire"), Just("water"), Just("grass"), Just("flying")];
        prop::collection::vec(
            ("[a-z]{1,8}", prop::collection::vec(category, 1..3)),
            0..12,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .enumerate()
                .map(|(i, (name, cats))| record(i as u32 + 1, &name, &cats))
                .collect()
        })
    }

    fn arb_criteria() -> impl Strategy<Value = FilterCriteria> {
        (
            "[a-zA-Z]{0,3}",
            prop_oneof![Just(""), Just("fire"), Just("water"), Just("dragon")],
        )
            .prop_map(|(term, cat)| FilterCriteria::new(term, cat))
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent(records in arb_records(), criteria in arb_criteria()) {
            let once: Vec<Record> = filter_records(&records, &criteria).into_iter().cloned().collect();
            let twice: Vec<Record> = filter_records(&once, &criteria).into_iter().cloned().collect();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn empty_criteria_are_identity(records in arb_records()) {
            let all = filter_records(&records, &FilterCriteria::default());
            prop_assert_eq!(all.len(), records.len());
            prop_assert!(all.iter().zip(&records).all(|(a, b)| std::ptr::eq(*a, b)));
        }

        #[test]
        fn indices_are_strictly_increasing(records in arb_records(), criteria in arb_criteria()) {
            let idx = filtered_indices(&records, &criteria);
            prop_assert!(idx.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(idx.iter().all(|&i| include(&records[i], &criteria)));
        }
    }
}
