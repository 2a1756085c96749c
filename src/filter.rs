//! Filter values supplied by the user: city, month, and day of week.
//!
//! The statistics core only ever sees validated enum values; free-form
//! input parsing lives here and in the prompt module.

use chrono::Weekday;
use clap::ValueEnum;

use crate::city::City;

/// Months covered by the reference datasets (first half of the year).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar month number.
    pub fn number(self) -> u32 {
        self as u32 + 1
    }

    pub fn from_number(n: u32) -> Option<Month> {
        Month::ALL.get(n.checked_sub(1)? as usize).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
        }
    }

    pub fn parse(input: &str) -> Option<Month> {
        let input = input.trim();
        Month::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(input))
    }
}

/// Parses a full English day name, case-insensitively.
pub fn parse_weekday(input: &str) -> Option<Weekday> {
    let input = input.trim();
    [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ]
    .into_iter()
    .find(|d| weekday_name(*d).eq_ignore_ascii_case(input))
}

/// Full English name for a weekday, matching the day names stored as
/// derived fields.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// The validated (city, month, day) triple restricting one session
/// iteration. `None` means "all".
#[derive(Debug, Clone, Copy)]
pub struct Filter {
    pub city: City,
    pub month: Option<Month>,
    pub day: Option<Weekday>,
}

impl Filter {
    pub fn unfiltered(city: City) -> Self {
        Filter {
            city,
            month: None,
            day: None,
        }
    }
}
