//! Display helpers shared by the stat cards, charts, list and detail view.

/// Upper-case the first character, leaving the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `solar-power` -> `Solar Power`.
pub fn title_case(kebab: &str) -> String {
    kebab
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `7` -> `#007`.
pub fn padded_id(id: u32) -> String {
    format!("#{id:03}")
}

/// Tenths of a unit rendered with exactly one decimal.
pub fn deci_units(deci: u32) -> String {
    format!("{}.{}", deci / 10, deci % 10)
}

/// Base stat at which a detail bar is full.
pub const STAT_BAR_MAX: u32 = 150;

/// Fill fraction of a detail stat bar, capped at 1.
pub fn stat_bar_fraction(value: u32) -> f32 {
    (value as f32 / STAT_BAR_MAX as f32).min(1.0)
}

/// Number of moves shown before collapsing the rest.
pub const MOVES_SHOWN: usize = 15;

/// The first `limit` moves plus how many were left out.
pub fn truncated_moves(moves: &[String], limit: usize) -> (&[String], usize) {
    let shown = moves.len().min(limit);
    (&moves[..shown], moves.len() - shown)
}
