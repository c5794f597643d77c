//! The pure filter step behind every dashboard interaction.
//!
//! `filter_and_summarize` narrows the prepared table by the current genre
//! set, rating set and release-year window and projects the matches into the
//! two chart series plus a summary line. It holds no state between calls; the
//! UI passes the current selection by value on every interaction.

use super::dataset::{GameRow, PreparedTable};

/// The current control values. An empty genre or rating set means "no filter
/// applied", not "match nothing". The year window is half-open:
/// `year_lo <= year < year_hi`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    pub genres: Vec<String>,
    pub ratings: Vec<String>,
    pub year_lo: u16,
    pub year_hi: u16,
}

impl FilterSelection {
    fn in_window(&self, year: u16) -> bool {
        self.year_lo <= year && year < self.year_hi
    }
}

/// One stacked-area point: every matched row contributes its release year,
/// the precomputed per-`(year, platform)` release count, and its platform
/// (one area band per platform).
#[derive(Debug, Clone, PartialEq)]
pub struct AreaPoint {
    pub year: u16,
    pub quantity: u32,
    pub platform: String,
}

/// One scatter point: user score against critic score, colored by genre.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub user_score: f64,
    pub critic_score: f64,
    pub genre: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Number of matched rows.
    pub matched: usize,
    /// Summary line displayed above the charts.
    pub summary: String,
    pub area: Vec<AreaPoint>,
    /// Matched rows sorted ascending by user score.
    pub scatter: Vec<ScatterPoint>,
}

fn selected(values: &[String], value: &str) -> bool {
    values.iter().any(|candidate| candidate == value)
}

/// Applies the selection to the table and shapes the result for rendering.
///
/// The selection policy branches on which of the two label filters are
/// active; the year window always applies. An inverted or degenerate window
/// simply matches nothing.
pub fn filter_and_summarize(table: &PreparedTable, selection: &FilterSelection) -> FilterOutcome {
    let genres = &selection.genres;
    let ratings = &selection.ratings;

    let rows: Vec<&GameRow> = if !genres.is_empty() && !ratings.is_empty() {
        table
            .rows()
            .iter()
            .filter(|row| {
                selection.in_window(row.year)
                    && selected(genres, &row.genre)
                    && selected(ratings, &row.rating)
            })
            .collect()
    } else if !genres.is_empty() {
        table
            .rows()
            .iter()
            .filter(|row| selection.in_window(row.year) && selected(genres, &row.genre))
            .collect()
    } else if !ratings.is_empty() {
        table
            .rows()
            .iter()
            .filter(|row| selection.in_window(row.year) && selected(ratings, &row.rating))
            .collect()
    } else {
        table
            .rows()
            .iter()
            .filter(|row| selection.in_window(row.year))
            .collect()
    };

    let matched = rows.len();

    let area: Vec<AreaPoint> = rows
        .iter()
        .map(|row| AreaPoint {
            year: row.year,
            quantity: row.games_quantity,
            platform: row.platform.clone(),
        })
        .collect();

    let mut scatter: Vec<ScatterPoint> = rows
        .iter()
        .map(|row| ScatterPoint {
            user_score: row.user_score,
            critic_score: row.critic_score,
            genre: row.genre.clone(),
        })
        .collect();
    scatter.sort_by(|a, b| a.user_score.total_cmp(&b.user_score));

    FilterOutcome {
        matched,
        summary: format!("Selected games quantity: {matched}"),
        area,
        scatter,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::dataset::{prepare, RawRecord};

    fn raw(
        name: &str,
        platform: &str,
        year: u16,
        genre: &str,
        rating: &str,
        critic: f64,
        user: f64,
    ) -> RawRecord {
        RawRecord {
            name: Some(name.to_string()),
            platform: Some(platform.to_string()),
            year_of_release: Some(f64::from(year)),
            genre: Some(genre.to_string()),
            critic_score: Some(critic),
            user_score: Some(user.to_string()),
            rating: Some(rating.to_string()),
        }
    }

    fn sample_table() -> PreparedTable {
        prepare(vec![
            raw("First", "PS2", 2001, "Shooter", "M", 8.0, 7.5),
            raw("Second", "PS2", 2001, "Sports", "E", 7.0, 6.0),
            raw("Third", "PC", 2005, "Shooter", "M", 9.0, 8.5),
        ])
        .unwrap()
    }

    fn selection(
        genres: &[&str],
        ratings: &[&str],
        year_lo: u16,
        year_hi: u16,
    ) -> FilterSelection {
        FilterSelection {
            genres: genres.iter().map(|g| g.to_string()).collect(),
            ratings: ratings.iter().map(|r| r.to_string()).collect(),
            year_lo,
            year_hi,
        }
    }

    #[test]
    fn genre_filter_with_quantity_join() {
        let table = sample_table();
        let outcome = filter_and_summarize(&table, &selection(&["Shooter"], &[], 2000, 2010));

        assert_eq!(outcome.matched, 2);
        assert_eq!(outcome.summary, "Selected games quantity: 2");

        let mut area = outcome.area.clone();
        area.sort_by_key(|point| point.year);
        assert_eq!(area[0].year, 2001);
        assert_eq!(area[0].platform, "PS2");
        assert_eq!(area[0].quantity, 2);
        assert_eq!(area[1].year, 2005);
        assert_eq!(area[1].platform, "PC");
        assert_eq!(area[1].quantity, 1);
    }

    #[test]
    fn rating_filter_alone() {
        let table = sample_table();
        let outcome = filter_and_summarize(&table, &selection(&[], &["E"], 2000, 2002));

        assert_eq!(outcome.matched, 1);
        assert_eq!(outcome.scatter.len(), 1);
        assert_eq!(outcome.scatter[0].genre, "Sports");
    }

    #[test]
    fn both_filters_intersect() {
        let table = sample_table();
        let outcome =
            filter_and_summarize(&table, &selection(&["Shooter", "Sports"], &["E"], 2000, 2010));

        assert_eq!(outcome.matched, 1);
        assert_eq!(outcome.scatter[0].genre, "Sports");
    }

    #[test]
    fn empty_selection_means_year_only() {
        let table = sample_table();
        let unfiltered = filter_and_summarize(&table, &selection(&[], &[], 2000, 2010));

        assert_eq!(unfiltered.matched, table.rows().len());
    }

    #[test]
    fn degenerate_window_matches_nothing() {
        let table = sample_table();
        let outcome = filter_and_summarize(&table, &selection(&[], &[], 2001, 2001));

        assert_eq!(outcome.matched, 0);
        assert!(outcome.area.is_empty());
        assert!(outcome.scatter.is_empty());
        assert_eq!(outcome.summary, "Selected games quantity: 0");
    }

    #[test]
    fn inverted_window_matches_nothing() {
        let table = sample_table();
        let outcome = filter_and_summarize(&table, &selection(&[], &[], 2010, 2000));
        assert_eq!(outcome.matched, 0);
    }

    #[test]
    fn window_upper_bound_is_exclusive() {
        let table = sample_table();
        let outcome = filter_and_summarize(&table, &selection(&[], &[], 2001, 2005));

        assert_eq!(outcome.matched, 2);
        assert!(outcome.area.iter().all(|point| point.year == 2001));
    }

    #[test]
    fn scatter_is_sorted_by_user_score() {
        let table = sample_table();
        let outcome = filter_and_summarize(&table, &selection(&[], &[], 2000, 2010));

        let scores: Vec<f64> = outcome
            .scatter
            .iter()
            .map(|point| point.user_score)
            .collect();
        let mut sorted = scores.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(scores, sorted);
    }

    #[test]
    fn outputs_satisfy_the_selection_predicate() {
        let table = sample_table();
        let sel = selection(&["Shooter"], &["M"], 2001, 2006);
        let outcome = filter_and_summarize(&table, &sel);

        assert!(outcome.matched > 0);
        for point in &outcome.area {
            assert!(sel.year_lo <= point.year && point.year < sel.year_hi);
        }
        for point in &outcome.scatter {
            assert!(sel.genres.contains(&point.genre));
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let table = sample_table();
        let sel = selection(&["Shooter"], &[], 2000, 2010);

        let first = filter_and_summarize(&table, &sel);
        let second = filter_and_summarize(&table, &sel);
        assert_eq!(first, second);
    }
}
