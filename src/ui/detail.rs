use eframe::egui::{self, RichText, Ui};

use creature_dash::data::format::{
    capitalize_first, deci_units, padded_id, stat_bar_fraction, title_case, truncated_moves,
    MOVES_SHOWN,
};
use creature_dash::data::model::Record;
use creature_dash::state::AppState;

// ---------------------------------------------------------------------------
// Detail page for a single record
// ---------------------------------------------------------------------------

pub fn detail_page(ui: &mut Ui, state: &mut AppState) {
    if ui.button("← Back to dashboard").clicked() {
        state.close_detail();
        return;
    }
    ui.separator();

    let Some(record) = state.detail_record() else {
        // The catalogue was replaced underneath the page.
        state.close_detail();
        return;
    };

    let theme = state.category_colors.color_for(record.primary_category());

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            header(ui, record, theme);
            ui.add_space(12.0);
            base_stats(ui, record);
            ui.add_space(12.0);
            physical(ui, record);
            ui.add_space(12.0);
            abilities(ui, record);
            ui.add_space(12.0);
            moves(ui, record);
        });
}

fn header(ui: &mut Ui, record: &Record, theme: egui::Color32) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(RichText::new(capitalize_first(&record.name)).color(theme).strong());
        ui.label(padded_id(record.id));
    });
    ui.horizontal(|ui: &mut Ui| {
        for cat in &record.categories {
            ui.label(RichText::new(cat).strong().background_color(theme.gamma_multiply(0.3)));
        }
    });
}

fn base_stats(ui: &mut Ui, record: &Record) {
    ui.strong("Base Stats");
    egui::Grid::new("base_stats")
        .num_columns(3)
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            for (key, value) in record.metrics.iter() {
                ui.label(key.label());
                ui.label(value.to_string());
                ui.add(
                    egui::ProgressBar::new(stat_bar_fraction(value))
                        .fill(key.color())
                        .desired_width(240.0),
                );
                ui.end_row();
            }
        });
}

fn physical(ui: &mut Ui, record: &Record) {
    ui.strong("Physical Characteristics");
    egui::Grid::new("physical").num_columns(2).show(ui, |ui: &mut Ui| {
        ui.label("Height");
        ui.label(format!("{} m", deci_units(record.height_deci)));
        ui.end_row();
        ui.label("Weight");
        ui.label(format!("{} kg", deci_units(record.weight_deci)));
        ui.end_row();
        ui.label("Base Experience");
        ui.label(record.base_experience.map_or("N/A".to_string(), |xp| xp.to_string()));
        ui.end_row();
    });
}

fn abilities(ui: &mut Ui, record: &Record) {
    ui.strong("Abilities");
    for ability in &record.abilities {
        ui.horizontal(|ui: &mut Ui| {
            ui.label(title_case(&ability.name));
            if ability.hidden {
                ui.label(RichText::new("Hidden").italics().weak());
            }
        });
    }
}

fn moves(ui: &mut Ui, record: &Record) {
    ui.strong("Move Pool");
    let (shown, rest) = truncated_moves(&record.move_names, MOVES_SHOWN);
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for name in shown {
            ui.label(title_case(name));
        }
        if rest > 0 {
            ui.label(RichText::new(format!("+{rest} more")).weak());
        }
    });
}
