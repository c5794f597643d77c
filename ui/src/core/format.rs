//! Formatting helpers for presenting scores on chart axes and legends.

pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

pub fn format_quantity(value: u32) -> String {
    value.to_string()
}
