use eframe::egui;

use creature_dash::config::DashboardConfig;
use creature_dash::state::{AppState, View};

use crate::ui::{charts, detail, list, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CreatureDashApp {
    pub state: AppState,
    config: DashboardConfig,
}

impl CreatureDashApp {
    /// Build the app, loading the configured catalogue if there is one.
    pub fn new(config: DashboardConfig) -> Self {
        let mut state = AppState::default();
        if let Some(path) = &config.catalogue_path {
            state.load_path(path, config.record_limit);
        }
        Self { state, config }
    }
}

impl eframe::App for CreatureDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state, self.config.record_limit);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: dashboard or detail page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.catalogue.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.heading("Open a catalogue to explore  (File → Open…)");
                });
                return;
            }

            match self.state.view {
                View::List => {
                    panels::stat_cards(ui, &self.state);
                    ui.add_space(12.0);
                    charts::chart_row(ui, &self.state);
                    ui.add_space(12.0);
                    list::record_table(ui, &mut self.state);
                }
                View::Detail(_) => detail::detail_page(ui, &mut self.state),
            }
        });
    }
}
