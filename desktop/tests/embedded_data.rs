#![cfg(test)]
//! Sanity checks for the bundled sample dataset. Wasm builds embed this file
//! outright and native runs use the repository copy, so a truncated or
//! re-headered CSV breaks every target at once.

const SAMPLE_CSV: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/data/games.csv"
));

#[test]
fn sample_data_has_the_expected_header() {
    let header = SAMPLE_CSV.lines().next().unwrap_or_default();
    for column in [
        "Name",
        "Platform",
        "Year_of_Release",
        "Genre",
        "Critic_Score",
        "User_Score",
        "Rating",
    ] {
        assert!(
            header.split(',').any(|field| field == column),
            "Expected column `{column}` missing from sample data header"
        );
    }
}

#[test]
fn sample_data_is_not_trivially_small() {
    assert!(
        SAMPLE_CSV.lines().count() > 40,
        "Sample dataset looks truncated"
    );
}
