//! Platform-agnostic data core: dataset loading/preparation and the pure
//! filter function the dashboard re-runs on every interaction.

pub mod dataset;
pub mod filter;
pub mod format;
