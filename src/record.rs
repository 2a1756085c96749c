//! Trip records and the in-memory record set they are collected into.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use serde::Deserialize;

use crate::filter::Month;

/// Start-time format used by all three city datasets.
const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single row as it appears in a city CSV file, before the start time is
/// parsed. Columns absent from a city's schema (Gender, Birth Year in
/// Washington) deserialize to `None`, as do empty cells.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrip {
    #[serde(rename = "Start Time")]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: Option<String>,
    #[serde(rename = "Trip Duration")]
    pub trip_duration: f64,
    #[serde(rename = "Start Station")]
    pub start_station: String,
    #[serde(rename = "End Station")]
    pub end_station: String,
    #[serde(rename = "User Type", default)]
    pub user_type: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "Birth Year", default)]
    pub birth_year: Option<f64>,
}

/// A fully parsed trip with its derived time fields attached.
#[derive(Debug, Clone, PartialEq)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,
    pub end_time: Option<String>,
    pub duration_secs: f64,
    pub start_station: String,
    pub end_station: String,
    pub user_type: String,
    pub gender: Option<String>,
    pub birth_year: Option<i32>,

    // derived once at load time from start_time
    pub month: u32,
    pub weekday: Weekday,
    pub hour: u32,
}

impl TripRecord {
    /// Parses the raw start time and derives month, weekday, and hour.
    pub fn from_raw(raw: RawTrip) -> Result<TripRecord, chrono::ParseError> {
        let start_time = NaiveDateTime::parse_from_str(&raw.start_time, START_TIME_FORMAT)?;
        Ok(TripRecord {
            month: start_time.month(),
            weekday: start_time.weekday(),
            hour: start_time.hour(),
            start_time,
            end_time: raw.end_time,
            duration_secs: raw.trip_duration,
            start_station: raw.start_station,
            end_station: raw.end_station,
            user_type: raw.user_type.unwrap_or_default(),
            gender: raw.gender,
            birth_year: raw.birth_year.map(|y| y as i32),
        })
    }

    /// One-line rendering used by the raw data browser.
    pub fn summary_line(&self) -> String {
        format!(
            "{} | {} -> {} | {}s | {}",
            self.start_time.format(START_TIME_FORMAT),
            self.start_station,
            self.end_station,
            self.duration_secs,
            self.user_type,
        )
    }
}

/// The ordered collection of trips being analyzed, plus schema capability
/// flags detected from the CSV header row. Never mutated after load;
/// filtering produces a new set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordSet {
    pub records: Vec<TripRecord>,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl RecordSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns a new set retaining only rows matching both filters.
    /// The filters test independent derived fields, so they compose with
    /// logical AND in either order. Row order is preserved.
    pub fn filtered(&self, month: Option<Month>, day: Option<Weekday>) -> RecordSet {
        let records = self
            .records
            .iter()
            .filter(|r| month.is_none_or(|m| r.month == m.number()))
            .filter(|r| day.is_none_or(|d| r.weekday == d))
            .cloned()
            .collect();
        RecordSet {
            records,
            has_gender: self.has_gender,
            has_birth_year: self.has_birth_year,
        }
    }

    /// Slice of up to `len` records starting at `start`; empty once the
    /// cursor is past the end.
    pub fn page(&self, start: usize, len: usize) -> &[TripRecord] {
        if start >= self.records.len() {
            return &[];
        }
        let end = (start + len).min(self.records.len());
        &self.records[start..end]
    }
}
