use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

pub const ENV_CATALOGUE: &str = "CREATURE_DASH_CATALOGUE";
pub const ENV_LIMIT: &str = "CREATURE_DASH_LIMIT";

/// Startup settings. Defaults match the stock dashboard (first 30 records).
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Maximum number of records taken from a catalogue file.
    pub record_limit: usize,
    /// Catalogue loaded on startup, if any.
    pub catalogue_path: Option<PathBuf>,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            record_limit: 30,
            catalogue_path: None,
            window_size: [1200.0, 800.0],
            min_window_size: [600.0, 400.0],
        }
    }
}

impl DashboardConfig {
    /// Defaults overridden by `CREATURE_DASH_CATALOGUE` / `CREATURE_DASH_LIMIT`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(ENV_CATALOGUE).filter(|p| !p.trim().is_empty()) {
            config.catalogue_path = Some(PathBuf::from(path));
        }

        if let Some(raw) = lookup(ENV_LIMIT) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.record_limit = n,
                _ => log::warn!(
                    "ignoring {ENV_LIMIT}={raw:?}; using default limit {}",
                    config.record_limit
                ),
            }
        }

        config
    }

    /// A command-line path wins over the environment.
    pub fn with_cli_path(mut self, arg: Option<String>) -> Self {
        if let Some(path) = arg {
            self.catalogue_path = Some(PathBuf::from(path));
        }
        self
    }
}
