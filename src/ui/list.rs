use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use creature_dash::data::format::{capitalize_first, deci_units, padded_id};
use creature_dash::state::AppState;

const ROW_HEIGHT: f32 = 22.0;

/// Render the visible records as a table. Clicking a name opens its detail page.
pub fn record_table(ui: &mut Ui, state: &mut AppState) {
    let records = state.visible_records();

    ui.heading(if records.is_empty() {
        "No records found".to_string()
    } else {
        format!("Showing {} records", records.len())
    });

    if records.is_empty() {
        ui.label("No records match the current search and category.");
        return;
    }

    let colors = &state.category_colors;
    let mut clicked: Option<u32> = None;

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(130.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(80.0))
        .column(Column::remainder())
        .header(ROW_HEIGHT, |mut header| {
            for title in ["#", "Name", "Categories", "Height", "Weight", "Base Exp", "Abilities"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let r = records[row.index()];
                row.col(|ui| {
                    ui.label(padded_id(r.id));
                });
                row.col(|ui| {
                    if ui.link(capitalize_first(&r.name)).clicked() {
                        clicked = Some(r.id);
                    }
                });
                row.col(|ui| {
                    for cat in &r.categories {
                        ui.label(RichText::new(cat).color(colors.color_for(cat)));
                    }
                });
                row.col(|ui| {
                    ui.label(format!("{} m", deci_units(r.height_deci)));
                });
                row.col(|ui| {
                    ui.label(format!("{} kg", deci_units(r.weight_deci)));
                });
                row.col(|ui| {
                    ui.label(r.base_experience.map_or("N/A".to_string(), |xp| xp.to_string()));
                });
                row.col(|ui| {
                    let abilities: Vec<String> =
                        r.abilities.iter().map(|a| capitalize_first(&a.name)).collect();
                    ui.label(abilities.join(", "));
                });
            });
        });

    if let Some(id) = clicked {
        state.open_detail(id);
    }
}
