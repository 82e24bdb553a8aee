//! Creature catalogue dashboard.
//!
//! The [`data`] layer is a pure engine: records in, filtered view, summary
//! statistics and chart datasets out. [`state`] owns the current catalogue and
//! filter criteria and re-derives everything whenever either changes.

pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod state;
