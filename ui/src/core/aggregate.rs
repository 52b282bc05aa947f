//! The three report aggregates. Each one is a pure function of the base table and
//! none depends on another's output.

use std::collections::BTreeMap;

use serde::Serialize;

use super::dataset::{RentalRecord, WeatherSituation};

/// Rentals summed for one weather code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherTotal {
    #[serde(rename = "weathersit")]
    pub situation: WeatherSituation,
    pub cnt_sum: f64,
}

/// Mean rentals for one weekday code.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeekdayMean {
    pub weekday: u8,
    pub mean: f64,
    /// Rows that went into the mean.
    pub days: usize,
}

/// Rentals on working days versus everything else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct WorkingHolidaySplit {
    pub working_day: f64,
    pub holiday: f64,
}

impl WorkingHolidaySplit {
    pub fn total(&self) -> f64 {
        self.working_day + self.holiday
    }
}

/// Sum `cnt` per weather code.
///
/// Always returns four rows, codes 1 through 4 ascending. A code with no rows is
/// filled with a zero sum instead of being dropped.
pub fn weather_totals(records: &[RentalRecord]) -> Vec<WeatherTotal> {
    let mut sums = [0.0_f64; WeatherSituation::ALL.len()];
    for record in records {
        sums[record.weathersit.index()] += record.cnt;
    }

    WeatherSituation::ALL
        .iter()
        .map(|&situation| WeatherTotal {
            situation,
            cnt_sum: sums[situation.index()],
        })
        .collect()
}

/// Mean `cnt` per weekday code, one row per weekday present, ascending by code.
/// Weekdays without rows are absent.
pub fn weekday_means(records: &[RentalRecord]) -> Vec<WeekdayMean> {
    let mut groups: BTreeMap<u8, (f64, usize)> = BTreeMap::new();
    for record in records {
        let entry = groups.entry(record.weekday).or_insert((0.0, 0));
        entry.0 += record.cnt;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(weekday, (sum, days))| WeekdayMean {
            weekday,
            mean: sum / days as f64,
            days,
        })
        .collect()
}

/// `cnt` summed per `(workingday, holiday)` pair. Only pairs that occur are present.
pub fn day_type_totals(records: &[RentalRecord]) -> BTreeMap<(bool, bool), f64> {
    let mut totals = BTreeMap::new();
    for record in records {
        *totals
            .entry((record.workingday, record.holiday))
            .or_insert(0.0) += record.cnt;
    }
    totals
}

/// Collapse [`day_type_totals`] to working-day and non-working-day totals.
///
/// Only the `workingday` half of the key decides the bucket; the `holiday` flag
/// has no effect on either total.
pub fn working_holiday_split(records: &[RentalRecord]) -> WorkingHolidaySplit {
    day_type_totals(records).into_iter().fold(
        WorkingHolidaySplit::default(),
        |mut split, ((workingday, _holiday), cnt_sum)| {
            if workingday {
                split.working_day += cnt_sum;
            } else {
                split.holiday += cnt_sum;
            }
            split
        },
    )
}
