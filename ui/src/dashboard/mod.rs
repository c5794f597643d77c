mod controls;
pub use controls::FilterChips;
pub use controls::YearRangeSlider;

mod charts;
pub use charts::ReleaseAreaChart;
pub use charts::ScoreScatterChart;

use crate::core::dataset::{self, PreparedTable, MIN_YEAR};

/// Default genre selection when the dataset offers it, mirroring the
/// dashboard's original preset.
pub const DEFAULT_GENRE: &str = "Shooter";
/// Default rating selection when the dataset offers it.
pub const DEFAULT_RATING: &str = "E";

/// Shared state for the dashboard view: the process-wide prepared table, or a
/// user-visible error when it could not be built.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub table: Option<&'static PreparedTable>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn load() -> Self {
        match dataset::prepared() {
            Ok(table) => Self {
                table: Some(table),
                error: None,
            },
            Err(err) => Self {
                table: None,
                error: Some(format!("Couldn't load the games dataset: {err}")),
            },
        }
    }

    pub fn initial_genres(&self) -> Vec<String> {
        preset(self.table.map(PreparedTable::genres), DEFAULT_GENRE)
    }

    pub fn initial_ratings(&self) -> Vec<String> {
        preset(self.table.map(PreparedTable::ratings), DEFAULT_RATING)
    }

    /// Full available year span; the window stays half-open so the initial
    /// view excludes the final year, matching the window semantics everywhere
    /// else.
    pub fn initial_year_range(&self) -> (u16, u16) {
        self.table
            .map(PreparedTable::year_bounds)
            .unwrap_or((MIN_YEAR, MIN_YEAR))
    }
}

fn preset(options: Option<&[String]>, default: &str) -> Vec<String> {
    match options {
        Some(options) if options.iter().any(|option| option == default) => {
            vec![default.to_string()]
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_requires_the_option_to_exist() {
        let options = vec!["Action".to_string(), "Shooter".to_string()];
        assert_eq!(preset(Some(options.as_slice()), "Shooter"), vec!["Shooter"]);
        assert!(preset(Some(options.as_slice()), "Puzzle").is_empty());
        assert!(preset(None, "Shooter").is_empty());
    }
}
