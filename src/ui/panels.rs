use eframe::egui::{self, Color32, RichText, Ui};

use creature_dash::data::format::capitalize_first;
use creature_dash::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – search and category filter
// ---------------------------------------------------------------------------

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    if state.catalogue.is_none() {
        ui.label("No catalogue loaded.");
        return;
    }

    // ---- Name search ----
    ui.strong("Search");
    let mut term = state.criteria.search_term.clone();
    let search = egui::TextEdit::singleline(&mut term).hint_text("Search by name…");
    if ui.add(search).changed() {
        state.set_search_term(term);
    }
    ui.add_space(8.0);

    // ---- Category selector ----
    ui.strong("Filter by category");
    let categories: Vec<String> = state
        .category_index()
        .into_iter()
        .map(str::to_string)
        .collect();
    let current = state.criteria.selected_category.clone();
    let selected_text = if current.is_empty() {
        "All categories".to_string()
    } else {
        capitalize_first(&current)
    };

    let mut choice: Option<String> = None;
    egui::ComboBox::from_id_salt("category_filter")
        .selected_text(selected_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(current.is_empty(), "All categories").clicked() {
                choice = Some(String::new());
            }
            for cat in &categories {
                let text = RichText::new(capitalize_first(cat))
                    .color(state.category_colors.color_for(cat));
                if ui.selectable_label(current == *cat, text).clicked() {
                    choice = Some(cat.clone());
                }
            }
        });
    if let Some(cat) = choice {
        state.set_selected_category(cat);
    }

    ui.add_space(8.0);
    if ui
        .add_enabled(!state.criteria.is_unrestricted(), egui::Button::new("Clear filters"))
        .clicked()
    {
        state.clear_filters();
    }
}

// ---------------------------------------------------------------------------
// Stat cards
// ---------------------------------------------------------------------------

/// Render the four summary figures for the current selection.
pub fn stat_cards(ui: &mut Ui, state: &AppState) {
    let s = &state.summary;
    let cards = [
        ("Collection Size", s.count.to_string()),
        ("Average Weight", format!("{:.1} kg", s.average_weight)),
        ("Most Common Category", s.most_common_category_label()),
        ("Avg Base Experience", s.average_base_experience.to_string()),
    ];

    ui.columns(cards.len(), |cols| {
        for (col, (title, value)) in cols.iter_mut().zip(cards) {
            egui::Frame::group(col.style()).show(col, |ui: &mut Ui| {
                ui.vertical_centered(|ui: &mut Ui| {
                    ui.label(title);
                    ui.heading(RichText::new(value).strong());
                });
            });
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState, record_limit: usize) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state, record_limit);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(cat) = &state.catalogue {
            ui.label(format!(
                "{} records loaded, {} visible",
                cat.len(),
                state.visible_indices.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState, record_limit: usize) {
    let file = rfd::FileDialog::new()
        .set_title("Open creature catalogue")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path, record_limit);
    }
}
