use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};

use creature_dash::data::charts::ChartEntry;
use creature_dash::data::model::MetricKey;
use creature_dash::state::AppState;

// ---------------------------------------------------------------------------
// Chart row (category distribution + metric averages)
// ---------------------------------------------------------------------------

const CHART_HEIGHT: f32 = 260.0;

/// Render both charts side by side.
pub fn chart_row(ui: &mut Ui, state: &AppState) {
    ui.columns(2, |cols| {
        cols[0].strong("Category Distribution");
        category_chart(&mut cols[0], state);

        cols[1].strong("Average Base Stats");
        metric_chart(&mut cols[1], &state.metric_averages);
    });
}

fn category_chart(ui: &mut Ui, state: &AppState) {
    let entries = &state.category_distribution;
    if entries.is_empty() {
        ui.label("No records in the current selection.");
    }

    let bars = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            Bar::new(i as f64, f64::from(e.value))
                .name(format!("{} ({})", e.label, e.value))
                .fill(state.category_colors.color_for_label(&e.label))
                .width(0.7)
        })
        .collect();

    bar_plot(ui, "category_distribution", entries, BarChart::new(bars).name("Records"));
}

fn metric_chart(ui: &mut Ui, entries: &[ChartEntry]) {
    let bars = entries
        .iter()
        .enumerate()
        .map(|(i, e)| {
            let color = MetricKey::from_label(&e.label).map_or(Color32::GRAY, MetricKey::color);
            Bar::new(i as f64, f64::from(e.value))
                .name(&e.label)
                .fill(color)
                .width(0.6)
        })
        .collect();

    bar_plot(ui, "metric_averages", entries, BarChart::new(bars).name("Average"));
}

/// A fixed (non-interactive) bar plot whose x-axis shows the entry labels.
fn bar_plot(ui: &mut Ui, id: &str, entries: &[ChartEntry], chart: BarChart) {
    let labels: Vec<String> = entries.iter().map(|e| e.label.clone()).collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .include_y(0.0)
        .x_axis_formatter(move |mark: GridMark, _range| axis_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}

fn axis_label(labels: &[String], x: f64) -> String {
    let i = x.round();
    if (x - i).abs() > f64::EPSILON || i < 0.0 {
        return String::new();
    }
    labels.get(i as usize).cloned().unwrap_or_default()
}
