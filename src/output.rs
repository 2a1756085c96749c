//! Console rendering for the four reports.
//!
//! The printed lines are part of the observable contract: blank line,
//! section header, value lines with fixed labels, a timing line, and a
//! separator. Empty record sets render a "no data" message instead of the
//! value lines.

use std::io::{self, Write};
use std::time::Duration;

use crate::filter::{Month, weekday_name};
use crate::reports::{DurationStats, StationStats, TimeStats, UserStats};

pub const SEPARATOR: &str = "----------------------------------------";

const NO_DATA: &str = "No data available for this filter.";

fn header(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out, "\n{title}\n")
}

fn footer(out: &mut impl Write, elapsed: Duration) -> io::Result<()> {
    writeln!(out, "\nThis took {:.2} seconds.", elapsed.as_secs_f64())?;
    writeln!(out, "{SEPARATOR}")
}

pub fn time_report(
    out: &mut impl Write,
    stats: Option<&TimeStats>,
    elapsed: Duration,
) -> io::Result<()> {
    header(out, "Calculating The Most Frequent Times of Travel...")?;
    match stats {
        Some(stats) => {
            let month_label = Month::from_number(stats.common_month)
                .map_or_else(|| stats.common_month.to_string(), |m| m.name().to_string());
            writeln!(out, "Most Common Month: {month_label}")?;
            writeln!(out, "Most Common Day: {}", weekday_name(stats.common_day))?;
            writeln!(out, "Most Common Start Hour: {}", stats.common_hour)?;
        }
        None => writeln!(out, "{NO_DATA}")?,
    }
    footer(out, elapsed)
}

pub fn station_report(
    out: &mut impl Write,
    stats: Option<&StationStats>,
    elapsed: Duration,
) -> io::Result<()> {
    header(out, "Calculating The Most Popular Stations and Trip...")?;
    match stats {
        Some(stats) => {
            writeln!(out, "Most Common Start Station: {}", stats.common_start)?;
            writeln!(out, "Most Common End Station: {}", stats.common_end)?;
            let (from, to) = &stats.common_trip;
            writeln!(out, "Most Common Trip: {from} -> {to}")?;
        }
        None => writeln!(out, "{NO_DATA}")?,
    }
    footer(out, elapsed)
}

pub fn duration_report(
    out: &mut impl Write,
    stats: Option<&DurationStats>,
    elapsed: Duration,
) -> io::Result<()> {
    header(out, "Calculating Trip Duration...")?;
    match stats {
        Some(stats) => {
            writeln!(out, "Total Travel Time: {} seconds", stats.total_secs)?;
            writeln!(out, "Average Travel Time: {} seconds", stats.mean_secs)?;
        }
        None => writeln!(out, "{NO_DATA}")?,
    }
    footer(out, elapsed)
}

pub fn user_report(
    out: &mut impl Write,
    stats: Option<&UserStats>,
    elapsed: Duration,
) -> io::Result<()> {
    header(out, "Calculating User Stats...")?;
    match stats {
        Some(stats) => {
            writeln!(out, "User Types:")?;
            for (user_type, count) in &stats.user_types {
                writeln!(out, "  {user_type}: {count}")?;
            }
            if let Some(genders) = &stats.genders {
                writeln!(out, "\nGender Count:")?;
                for (gender, count) in genders {
                    writeln!(out, "  {gender}: {count}")?;
                }
            }
            if let Some(years) = &stats.birth_years {
                writeln!(out, "\nEarliest Year: {}", years.earliest)?;
                writeln!(out, "Most Recent Year: {}", years.most_recent)?;
                writeln!(out, "Most Common Year: {}", years.most_common)?;
            }
        }
        None => writeln!(out, "{NO_DATA}")?,
    }
    footer(out, elapsed)
}
