use std::path::Path;

use anyhow::{Context, Result};

use crate::color::CategoryColorMap;
use crate::data::charts::{build_category_distribution, build_metric_averages, ChartEntry};
use crate::data::filter::{filtered_indices, FilterCriteria};
use crate::data::loader;
use crate::data::model::{Catalogue, Record};
use crate::data::stats::{summarize, Summary};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which page of the dashboard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    List,
    Detail(u32),
}

/// The full UI state, independent of rendering.
///
/// Only the catalogue and the criteria are owned inputs; everything below
/// them is derived and rebuilt by [`AppState::refilter`].
pub struct AppState {
    /// Loaded catalogue (None until a file loads successfully).
    pub catalogue: Option<Catalogue>,

    /// Current search term and category selection.
    pub criteria: FilterCriteria,

    /// Indices of records passing the current criteria (cached).
    pub visible_indices: Vec<usize>,

    pub summary: Summary,
    pub category_distribution: Vec<ChartEntry>,
    pub metric_averages: Vec<ChartEntry>,

    /// Colours per category of the unfiltered index.
    pub category_colors: CategoryColorMap,

    pub view: View,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        let mut state = Self {
            catalogue: None,
            criteria: FilterCriteria::default(),
            visible_indices: Vec::new(),
            summary: Summary::default(),
            category_distribution: Vec::new(),
            metric_averages: Vec::new(),
            category_colors: CategoryColorMap::default(),
            view: View::List,
            status_message: None,
            loading: false,
        };
        state.refilter();
        state
    }
}

impl AppState {
    /// Ingest a newly loaded catalogue: new colours, cleared filters.
    pub fn set_catalogue(&mut self, catalogue: Catalogue) {
        log::info!(
            "Loaded {} records across {} categories",
            catalogue.len(),
            catalogue.categories.len()
        );
        self.category_colors = CategoryColorMap::new(&catalogue.categories);
        self.catalogue = Some(catalogue);
        self.criteria = FilterCriteria::default();
        self.view = View::List;
        self.status_message = None;
        self.loading = false;
        self.refilter();
    }

    /// Enter the terminal error state. No stale records stay visible.
    pub fn load_failed(&mut self, message: String) {
        self.catalogue = None;
        self.category_colors = CategoryColorMap::default();
        self.view = View::List;
        self.status_message = Some(message);
        self.loading = false;
        self.refilter();
    }

    /// Load a catalogue file into the state, reporting failure in the UI.
    pub fn load_path(&mut self, path: &Path, limit: usize) {
        self.loading = true;
        match read_catalogue(path, limit) {
            Ok(catalogue) => self.set_catalogue(catalogue),
            Err(e) => {
                log::error!("Failed to load catalogue: {e:#}");
                self.load_failed(format!("Error: {e:#}"));
            }
        }
    }

    /// Recompute the filtered view and every derived dataset.
    pub fn refilter(&mut self) {
        self.visible_indices = match &self.catalogue {
            Some(cat) => filtered_indices(&cat.records, &self.criteria),
            None => Vec::new(),
        };

        let visible = self.visible_records();
        let summary = summarize(&visible);
        let distribution = build_category_distribution(&visible);
        let averages = build_metric_averages(&visible);

        log::debug!(
            "criteria {:?} -> {} visible records",
            self.criteria,
            summary.count
        );

        self.summary = summary;
        self.category_distribution = distribution;
        self.metric_averages = averages;
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.criteria.search_term {
            self.criteria.search_term = term;
            self.refilter();
        }
    }

    /// Select a category; the empty string lifts the restriction.
    pub fn set_selected_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if category != self.criteria.selected_category {
            self.criteria.selected_category = category;
            self.refilter();
        }
    }

    pub fn clear_filters(&mut self) {
        if !self.criteria.is_unrestricted() {
            self.criteria = FilterCriteria::default();
            self.refilter();
        }
    }

    /// Records passing the current criteria, in catalogue order.
    pub fn visible_records(&self) -> Vec<&Record> {
        match &self.catalogue {
            Some(cat) => self
                .visible_indices
                .iter()
                .map(|&i| &cat.records[i])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Distinct categories of the whole catalogue, ascending.
    pub fn category_index(&self) -> Vec<&str> {
        self.catalogue
            .iter()
            .flat_map(|cat| cat.categories.iter().map(String::as_str))
            .collect()
    }

    /// Switch to the detail page. Returns false for an unknown id.
    pub fn open_detail(&mut self, id: u32) -> bool {
        let known = self
            .catalogue
            .as_ref()
            .is_some_and(|cat| cat.find_by_id(id).is_some());
        if known {
            self.view = View::Detail(id);
        }
        known
    }

    pub fn close_detail(&mut self) {
        self.view = View::List;
    }

    /// The record shown on the detail page, if that page is open.
    pub fn detail_record(&self) -> Option<&Record> {
        match self.view {
            View::Detail(id) => self.catalogue.as_ref()?.find_by_id(id),
            View::List => None,
        }
    }
}

fn read_catalogue(path: &Path, limit: usize) -> Result<Catalogue> {
    loader::load_file(path, limit)
        .with_context(|| format!("Failed to load catalogue from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;

    fn loaded() -> AppState {
        let mut state = AppState::default();
        state.set_catalogue(Catalogue::from_records(vec![
            record(1, "bulbasaur", &["grass", "poison"]),
            record(4, "charmander", &["fire"]),
            record(6, "charizard", &["fire", "flying"]),
            record(7, "squirtle", &["water"]),
        ]));
        state
    }

    #[test]
    fn empty_state_still_has_six_metric_bars() {
        let state = AppState::default();
        assert_eq!(state.summary.count, 0);
        assert_eq!(state.metric_averages.len(), 6);
        assert!(state.category_distribution.is_empty());
        assert!(state.category_index().is_empty());
    }

    #[test]
    fn loading_shows_everything() {
        let state = loaded();
        assert_eq!(state.visible_indices, vec![0, 1, 2, 3]);
        assert_eq!(state.summary.count, 4);
        assert_eq!(state.summary.most_common_category, "fire");
        assert_eq!(state.category_distribution[0], ChartEntry::new("Fire", 2));
    }

    #[test]
    fn filtering_rederives_but_keeps_index() {
        let mut state = loaded();
        state.set_selected_category("water");
        assert_eq!(state.summary.count, 1);
        assert_eq!(state.category_distribution, vec![ChartEntry::new("Water", 1)]);
        // "flying" only appears on a filtered-out record.
        assert!(state.category_index().contains(&"flying"));
        assert_eq!(
            state.category_index(),
            ["fire", "flying", "grass", "poison", "water"]
        );

        state.set_search_term("zzz");
        assert_eq!(state.summary.count, 0);
        assert_eq!(state.summary.most_common_category_label(), "N/A");
        assert!(state.metric_averages.iter().all(|e| e.value == 0));

        state.clear_filters();
        assert_eq!(state.summary.count, 4);
    }

    #[test]
    fn search_and_category_combine() {
        let mut state = loaded();
        state.set_search_term("CHAR");
        state.set_selected_category("flying");
        let names: Vec<&str> = state.visible_records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["charizard"]);
    }

    #[test]
    fn detail_view_round_trip() {
        let mut state = loaded();
        assert!(!state.open_detail(999));
        assert_eq!(state.view, View::List);

        assert!(state.open_detail(6));
        assert_eq!(state.detail_record().map(|r| r.name.as_str()), Some("charizard"));
        state.close_detail();
        assert!(state.detail_record().is_none());
    }

    #[test]
    fn failed_load_clears_previous_data() {
        let mut state = loaded();
        state.set_search_term("char");
        state.load_path(Path::new("/no/such/catalogue.json"), 30);

        assert!(state.catalogue.is_none());
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.summary.count, 0);
        let msg = state.status_message.as_deref().unwrap();
        assert!(msg.starts_with("Error: Failed to load catalogue"));
        assert!(!state.loading);
    }

    #[test]
    fn new_catalogue_resets_filters() {
        let mut state = loaded();
        state.set_selected_category("fire");
        state.open_detail(4);
        state.set_catalogue(Catalogue::from_records(vec![record(25, "pikachu", &["electric"])]));
        assert_eq!(state.criteria, FilterCriteria::default());
        assert_eq!(state.view, View::List);
        assert_eq!(state.summary.count, 1);
    }
}
