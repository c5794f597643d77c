//! End-to-end checks over the bundled sample dataset: the CSV that wasm
//! builds embed must parse, survive preparation, and satisfy the prepared
//! table's invariants, otherwise the web dashboard ships broken.

use std::collections::HashMap;

use ui::core::dataset::{embedded_sample, parse_csv, prepare, MIN_YEAR};

fn prepared_sample() -> ui::core::dataset::PreparedTable {
    let records = parse_csv(embedded_sample().as_bytes()).expect("sample CSV parses");
    prepare(records).expect("sample CSV prepares")
}

#[test]
fn sample_parses_and_prepares() {
    let table = prepared_sample();
    assert!(table.rows().len() > 40, "sample should retain most rows");
}

#[test]
fn sample_rows_are_complete_and_post_2000() {
    let table = prepared_sample();
    for row in table.rows() {
        assert!(row.year >= MIN_YEAR);
        assert!(!row.name.is_empty());
        assert!(!row.platform.is_empty());
        assert!(!row.genre.is_empty());
        assert!(!row.rating.is_empty());
        assert!(row.critic_score.is_finite());
        assert!(row.user_score.is_finite());
    }
}

#[test]
fn sample_quantity_join_is_consistent() {
    let table = prepared_sample();

    let mut counts: HashMap<(u16, &str), u32> = HashMap::new();
    for row in table.rows() {
        *counts.entry((row.year, row.platform.as_str())).or_insert(0) += 1;
    }

    for row in table.rows() {
        assert_eq!(
            row.games_quantity,
            counts[&(row.year, row.platform.as_str())],
            "games_quantity must equal the (year, platform) row count for {}",
            row.name
        );
    }
}

#[test]
fn sample_rows_are_sorted() {
    let table = prepared_sample();
    for pair in table.rows().windows(2) {
        let key_a = (pair[0].year, pair[0].platform.as_str());
        let key_b = (pair[1].year, pair[1].platform.as_str());
        assert!(key_a <= key_b, "rows must be sorted by (year, platform)");
    }
}

#[test]
fn sample_offers_the_default_selections() {
    let table = prepared_sample();
    assert!(table.genres().iter().any(|genre| genre == "Shooter"));
    assert!(table.ratings().iter().any(|rating| rating == "E"));

    let (min, max) = table.year_bounds();
    assert!(min >= MIN_YEAR);
    assert!(min < max);
}

#[test]
fn sample_incomplete_rows_are_dropped() {
    let table = prepared_sample();
    // These entries are deliberately incomplete in the sample file.
    for dropped in ["Zumba Fitness", "Just Dance 2", "uDraw Studio"] {
        assert!(
            table.rows().iter().all(|row| row.name != dropped),
            "{dropped} should have been dropped as incomplete"
        );
    }
}
