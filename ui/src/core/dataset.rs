//! Loading and one-time preparation of the games dataset.
//!
//! The raw CSV (`games.csv`) is parsed once at process start, cleaned
//! (incomplete rows dropped, releases before [`MIN_YEAR`] discarded), sorted
//! by `(year, platform)` and enriched with a per-`(year, platform)` release
//! count. The resulting [`PreparedTable`] is immutable for the rest of the
//! process; the dashboard only ever reads from it.
//!
//! Native targets read the file from the process working directory. Wasm
//! targets have no working directory to read from, so the bundled sample
//! under `assets/data/games.csv` is embedded at compile time instead.

use std::collections::{BTreeSet, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use once_cell::sync::OnceCell;
use serde::Deserialize;
use thiserror::Error;

/// Earliest release year retained in the prepared table.
pub const MIN_YEAR: u16 = 2000;

/// File name resolved against the working directory on native targets.
pub const DATA_FILE: &str = "games.csv";

/// Columns that must be present in the input header.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "Name",
    "Platform",
    "Year_of_Release",
    "Genre",
    "Critic_Score",
    "User_Score",
    "Rating",
];

const EMBEDDED_SAMPLE: &str = include_str!("../../assets/data/games.csv");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("games dataset not found at {}", path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read games dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed games dataset: {0}")]
    Csv(#[from] csv::Error),
    #[error("games dataset is missing required column `{0}`")]
    MissingColumn(String),
    #[error("games dataset has no usable rows after cleaning")]
    Empty,
}

/// One row of the raw CSV. Every field is optional at parse time; rows with
/// any missing field are dropped during preparation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "Name")]
    pub name: Option<String>,
    #[serde(rename = "Platform")]
    pub platform: Option<String>,
    #[serde(rename = "Year_of_Release")]
    pub year_of_release: Option<f64>,
    #[serde(rename = "Genre")]
    pub genre: Option<String>,
    #[serde(rename = "Critic_Score")]
    pub critic_score: Option<f64>,
    #[serde(rename = "User_Score")]
    pub user_score: Option<String>,
    #[serde(rename = "Rating")]
    pub rating: Option<String>,
}

impl RawRecord {
    /// Collapses the record into a fully populated row, or `None` if any
    /// field is missing. A `User_Score` of `tbd` (an artifact of the source
    /// dataset) counts as missing.
    fn into_clean(self) -> Option<CleanRecord> {
        let user_score = parse_user_score(self.user_score.as_deref()?)?;
        Some(CleanRecord {
            name: self.name?,
            platform: self.platform?,
            year: self.year_of_release? as u16,
            genre: self.genre?,
            critic_score: self.critic_score?,
            user_score,
            rating: self.rating?,
        })
    }
}

fn parse_user_score(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("tbd") {
        return None;
    }
    trimmed.parse().ok()
}

struct CleanRecord {
    name: String,
    platform: String,
    year: u16,
    genre: String,
    critic_score: f64,
    user_score: f64,
    rating: String,
}

/// One fully populated row of the prepared table.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRow {
    pub name: String,
    pub platform: String,
    pub year: u16,
    pub genre: String,
    /// Critic score on the 0–100 scale.
    pub critic_score: f64,
    /// User score on the 0–10 scale.
    pub user_score: f64,
    pub rating: String,
    /// Count of retained releases sharing this row's `(year, platform)`.
    pub games_quantity: u32,
}

/// The cleaned, sorted and enriched dataset plus the derived option sets the
/// dashboard controls are populated from. Read-only after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedTable {
    rows: Vec<GameRow>,
    genres: Vec<String>,
    ratings: Vec<String>,
    year_min: u16,
    year_max: u16,
}

impl PreparedTable {
    pub fn rows(&self) -> &[GameRow] {
        &self.rows
    }

    /// Distinct genres, sorted ascending.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Distinct content ratings, sorted ascending.
    pub fn ratings(&self) -> &[String] {
        &self.ratings
    }

    /// `(min, max)` release year present in the table.
    pub fn year_bounds(&self) -> (u16, u16) {
        (self.year_min, self.year_max)
    }
}

/// Parses raw records out of a CSV reader, validating the header first so a
/// renamed or dropped column fails with a named error rather than a
/// deserialization failure on row one.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<RawRecord>, DatasetError> {
    let mut reader = csv::Reader::from_reader(reader);
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|header| header == column) {
            return Err(DatasetError::MissingColumn(column.to_string()));
        }
    }

    let mut records = Vec::new();
    for record in reader.deserialize() {
        records.push(record?);
    }
    Ok(records)
}

/// Cleans, restricts, sorts and enriches the raw records into the table the
/// dashboard filters against.
pub fn prepare(records: Vec<RawRecord>) -> Result<PreparedTable, DatasetError> {
    let raw_count = records.len();

    let mut clean: Vec<CleanRecord> = records
        .into_iter()
        .filter_map(RawRecord::into_clean)
        .filter(|record| record.year >= MIN_YEAR)
        .collect();
    clean.sort_by(|a, b| a.year.cmp(&b.year).then_with(|| a.platform.cmp(&b.platform)));

    if clean.is_empty() {
        return Err(DatasetError::Empty);
    }

    let mut counts: HashMap<(u16, String), u32> = HashMap::new();
    for record in &clean {
        *counts
            .entry((record.year, record.platform.clone()))
            .or_insert(0) += 1;
    }

    let rows: Vec<GameRow> = clean
        .into_iter()
        .map(|record| {
            let games_quantity = counts[&(record.year, record.platform.clone())];
            GameRow {
                name: record.name,
                platform: record.platform,
                year: record.year,
                genre: record.genre,
                critic_score: record.critic_score,
                user_score: record.user_score,
                rating: record.rating,
                games_quantity,
            }
        })
        .collect();

    let genres: BTreeSet<String> = rows.iter().map(|row| row.genre.clone()).collect();
    let ratings: BTreeSet<String> = rows.iter().map(|row| row.rating.clone()).collect();
    let year_min = rows.iter().map(|row| row.year).min().unwrap_or(MIN_YEAR);
    let year_max = rows.iter().map(|row| row.year).max().unwrap_or(MIN_YEAR);

    log::info!(
        "prepared games table: {} of {} raw rows retained, years {}..={}",
        rows.len(),
        raw_count,
        year_min,
        year_max
    );

    Ok(PreparedTable {
        rows,
        genres: genres.into_iter().collect(),
        ratings: ratings.into_iter().collect(),
        year_min,
        year_max,
    })
}

/// Loads and prepares the dataset from a file path. An absent file is
/// reported as [`DatasetError::NotFound`] so callers can fail startup with a
/// useful message.
pub fn load_path(path: &Path) -> Result<PreparedTable, DatasetError> {
    let file = File::open(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            DatasetError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            DatasetError::Io(err)
        }
    })?;
    let records = parse_csv(BufReader::new(file))?;
    log::debug!("read {} raw records from {}", records.len(), path.display());
    prepare(records)
}

/// The CSV text embedded for wasm builds (and asset sanity tests).
pub fn embedded_sample() -> &'static str {
    EMBEDDED_SAMPLE
}

static PREPARED: OnceCell<PreparedTable> = OnceCell::new();

/// The process-wide prepared table, built on first access and shared
/// thereafter. The filter core never touches this; it receives the table as
/// an argument so it stays testable in isolation.
pub fn prepared() -> Result<&'static PreparedTable, DatasetError> {
    PREPARED.get_or_try_init(|| {
        #[cfg(target_arch = "wasm32")]
        {
            prepare(parse_csv(EMBEDDED_SAMPLE.as_bytes())?)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            load_path(&std::env::current_dir()?.join(DATA_FILE))
        }
    })
}
