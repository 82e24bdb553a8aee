/// Data layer: core types, loading, filtering and derived datasets.
///
/// Architecture:
/// ```text
///   .json / .csv
///        │
///        ▼
///   ┌──────────┐   ┌───────────┐
///   │  loader  │──▶│ normalize │  raw record → Record (whole batch or error)
///   └──────────┘   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ Catalogue │  Vec<Record>, category index
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  search term + category → filtered indices
///   └──────────┘
///        │
///        ├──────────────┐
///        ▼              ▼
///   ┌─────────┐   ┌──────────┐
///   │  stats  │   │  charts  │  summary / chart datasets
///   └─────────┘   └──────────┘
/// ```

pub mod charts;
pub mod filter;
pub mod format;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod stats;
