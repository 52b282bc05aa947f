//! Daily rental table: CSV loading, row validation and the load-time weekend correction.
//!
//! The file layout follows the public daily bike-sharing table. Only five columns are
//! read (`weekday`, `holiday`, `workingday`, `weathersit`, `cnt`); anything else in the
//! header is ignored.

use std::{fs::File, io::Read, path::PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::{Deserialize, Serialize};

use super::error::{DatasetError, Result};

/// Weekday code for Sunday.
pub const SUNDAY: u8 = 0;
/// Weekday code for Saturday.
pub const SATURDAY: u8 = 6;
/// Number of distinct weekday codes (0 = Sunday … 6 = Saturday).
pub const DAYS_PER_WEEK: usize = 7;

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 5] = ["weekday", "holiday", "workingday", "weathersit", "cnt"];

/// Copy of the daily rental table bundled with the crate.
pub const EMBEDDED_CSV: &str = include_str!("../../assets/data/day.csv");

/// Ordinal weather severity, 1 (clearest) to 4 (most severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "u8")]
pub enum WeatherSituation {
    Clear = 1,
    Mist = 2,
    LightPrecipitation = 3,
    HeavyPrecipitation = 4,
}

impl WeatherSituation {
    /// Every code, ascending.
    pub const ALL: [WeatherSituation; 4] = [
        WeatherSituation::Clear,
        WeatherSituation::Mist,
        WeatherSituation::LightPrecipitation,
        WeatherSituation::HeavyPrecipitation,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Clear),
            2 => Some(Self::Mist),
            3 => Some(Self::LightPrecipitation),
            4 => Some(Self::HeavyPrecipitation),
            _ => None,
        }
    }

    /// Zero-based slot, handy for fixed-size per-code arrays.
    pub fn index(self) -> usize {
        self as usize - 1
    }
}

impl From<WeatherSituation> for u8 {
    fn from(value: WeatherSituation) -> Self {
        value.code()
    }
}

/// One validated row of the rental table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RentalRecord {
    pub weekday: u8,
    pub holiday: bool,
    pub workingday: bool,
    pub weathersit: WeatherSituation,
    pub cnt: f64,
}

impl RentalRecord {
    pub fn new(
        weekday: u8,
        holiday: bool,
        workingday: bool,
        weathersit: WeatherSituation,
        cnt: f64,
    ) -> Self {
        Self {
            weekday,
            holiday,
            workingday,
            weathersit,
            cnt,
        }
    }

    pub fn is_weekend(&self) -> bool {
        self.weekday == SUNDAY || self.weekday == SATURDAY
    }

    fn try_from_raw(raw: RawRecord, row: usize) -> Result<Self> {
        let invalid = |column: &'static str, value: String| DatasetError::InvalidValue {
            row,
            column,
            value,
        };

        let weekday = u8::try_from(raw.weekday)
            .ok()
            .filter(|day| usize::from(*day) < DAYS_PER_WEEK)
            .ok_or_else(|| invalid("weekday", raw.weekday.to_string()))?;
        let weathersit = u8::try_from(raw.weathersit)
            .ok()
            .and_then(WeatherSituation::from_code)
            .ok_or_else(|| invalid("weathersit", raw.weathersit.to_string()))?;
        let holiday =
            parse_flag(raw.holiday).ok_or_else(|| invalid("holiday", raw.holiday.to_string()))?;
        let workingday = parse_flag(raw.workingday)
            .ok_or_else(|| invalid("workingday", raw.workingday.to_string()))?;
        if !raw.cnt.is_finite() || raw.cnt < 0.0 {
            return Err(invalid("cnt", raw.cnt.to_string()));
        }

        Ok(Self::new(weekday, holiday, workingday, weathersit, raw.cnt))
    }
}

/// Row shape as it sits in the file, before range checks.
#[derive(Debug, Deserialize)]
struct RawRecord {
    weekday: i64,
    holiday: i64,
    workingday: i64,
    weathersit: i64,
    cnt: f64,
}

fn parse_flag(value: i64) -> Option<bool> {
    match value {
        0 => Some(false),
        1 => Some(true),
        _ => None,
    }
}

/// Parse [`RentalRecord`]s from a reader.
///
/// The header is checked for every column in [`REQUIRED_COLUMNS`] before any row is
/// read, so a malformed file fails with the missing column name rather than a serde
/// message about the first row.
pub fn read_records(reader: impl Read) -> Result<Vec<RentalRecord>> {
    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = reader.headers()?.clone();
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|column| !headers.iter().any(|header| header == **column))
    {
        return Err(DatasetError::MissingColumn(*missing));
    }

    reader
        .deserialize::<RawRecord>()
        .enumerate()
        .map(|(idx, raw)| RentalRecord::try_from_raw(raw?, idx + 1))
        .collect()
}

/// Force `holiday` on for every Sunday and Saturday row, whatever the file said.
/// Running it again changes nothing.
pub fn mark_weekend_holidays(records: &mut [RentalRecord]) {
    for record in records.iter_mut().filter(|record| record.is_weekend()) {
        record.holiday = true;
    }
}

/// Where the rental table is read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DatasetSource {
    #[default]
    Embedded,
    File(PathBuf),
}

impl DatasetSource {
    pub fn label(&self) -> String {
        match self {
            Self::Embedded => "embedded day.csv".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// The corrected, read-only base table every aggregate is derived from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<RentalRecord>,
}

impl Dataset {
    /// Wrap already-parsed rows, applying the weekend-holiday correction.
    pub fn from_records(mut records: Vec<RentalRecord>) -> Self {
        mark_weekend_holidays(&mut records);
        Self { records }
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        read_records(reader).map(Self::from_records)
    }

    pub fn load(source: &DatasetSource) -> Result<Self> {
        match source {
            DatasetSource::Embedded => Self::from_reader(EMBEDDED_CSV.as_bytes()),
            DatasetSource::File(path) => Self::from_reader(File::open(path)?),
        }
    }

    pub fn records(&self) -> &[RentalRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn total_rentals(&self) -> f64 {
        self.records.iter().map(|record| record.cnt).sum()
    }
}
