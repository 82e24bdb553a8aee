use std::collections::BTreeSet;
use std::fmt;

use eframe::egui::Color32;

// ---------------------------------------------------------------------------
// MetricKey – the six canonical base stats
// ---------------------------------------------------------------------------

/// One of the six fixed metrics every record carries, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MetricKey {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl MetricKey {
    /// All keys in canonical (and chart) order.
    pub const ALL: [MetricKey; 6] = [
        MetricKey::Hp,
        MetricKey::Attack,
        MetricKey::Defense,
        MetricKey::SpecialAttack,
        MetricKey::SpecialDefense,
        MetricKey::Speed,
    ];

    /// Position of this key inside [`MetricKey::ALL`] and [`Metrics`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name used by the catalogue service (`special-attack`, ...).
    pub const fn api_name(self) -> &'static str {
        match self {
            MetricKey::Hp => "hp",
            MetricKey::Attack => "attack",
            MetricKey::Defense => "defense",
            MetricKey::SpecialAttack => "special-attack",
            MetricKey::SpecialDefense => "special-defense",
            MetricKey::Speed => "speed",
        }
    }

    /// Chart / detail label.
    pub const fn label(self) -> &'static str {
        match self {
            MetricKey::Hp => "HP",
            MetricKey::Attack => "Attack",
            MetricKey::Defense => "Defense",
            MetricKey::SpecialAttack => "Sp. Atk",
            MetricKey::SpecialDefense => "Sp. Def",
            MetricKey::Speed => "Speed",
        }
    }

    /// Fixed bar colour.
    pub const fn color(self) -> Color32 {
        match self {
            MetricKey::Hp => Color32::from_rgb(0xff, 0x59, 0x59),
            MetricKey::Attack => Color32::from_rgb(0xf5, 0xac, 0x78),
            MetricKey::Defense => Color32::from_rgb(0xfa, 0xe0, 0x78),
            MetricKey::SpecialAttack => Color32::from_rgb(0x9d, 0xb7, 0xf5),
            MetricKey::SpecialDefense => Color32::from_rgb(0xa7, 0xdb, 0x8d),
            MetricKey::Speed => Color32::from_rgb(0xfa, 0x92, 0xb2),
        }
    }

    pub fn from_api_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.api_name() == name)
    }

    /// Inverse of [`MetricKey::label`].
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.label() == label)
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.api_name())
    }
}

/// Values of the six metrics, indexed by [`MetricKey::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Metrics([u32; 6]);

impl Metrics {
    pub const fn new(values: [u32; 6]) -> Self {
        Metrics(values)
    }

    pub fn get(&self, key: MetricKey) -> u32 {
        self.0[key.index()]
    }

    /// `(key, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, u32)> + '_ {
        MetricKey::ALL.into_iter().map(|k| (k, self.get(k)))
    }
}

// ---------------------------------------------------------------------------
// Record – one creature
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ability {
    pub name: String,
    pub hidden: bool,
}

/// A normalised creature record. Immutable once built by the normaliser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Stable external identifier (> 0).
    pub id: u32,
    /// Lowercase, non-empty.
    pub name: String,
    /// Non-empty; index 0 is the primary category used for theming only.
    pub categories: Vec<String>,
    pub metrics: Metrics,
    /// Tenths of a metre.
    pub height_deci: u32,
    /// Tenths of a kilogram.
    pub weight_deci: u32,
    pub base_experience: Option<u32>,
    pub abilities: Vec<Ability>,
    pub move_names: Vec<String>,
}

impl Record {
    pub fn primary_category(&self) -> &str {
        &self.categories[0]
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }
}

// ---------------------------------------------------------------------------
// Catalogue – the base set plus its category index
// ---------------------------------------------------------------------------

/// The full fetched record set with its pre-computed category index.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    /// All records, in fetch order.
    pub records: Vec<Record>,
    /// Distinct category names across `records`, ascending.
    pub categories: BTreeSet<String>,
}

impl Catalogue {
    /// Build the category index from the base set.
    pub fn from_records(records: Vec<Record>) -> Self {
        let categories = records
            .iter()
            .flat_map(|r| r.categories.iter().cloned())
            .collect();
        Catalogue {
            records,
            categories,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find_by_id(&self, id: u32) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }
}
