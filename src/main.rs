//! CLI entry point for the bikestats explorer.
//!
//! Runs an interactive session by default: prompt for filters, load the
//! city dataset, print the four reports, offer raw-record browsing, and
//! loop until the user declines a restart. Passing `--city` runs a single
//! non-interactive pass instead.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use bikestats::browser::{self, StdinConfirm};
use bikestats::city::City;
use bikestats::filter::{Filter, Month, parse_weekday};
use bikestats::record::RecordSet;
use bikestats::reports::{DurationStats, StationStats, TimeStats, UserStats};
use bikestats::{loader, output, prompt};
use chrono::Weekday;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "bikestats")]
#[command(about = "Explore US bikeshare trip data", long_about = None)]
struct Cli {
    /// Directory containing the city CSV files
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// City to analyze; runs one non-interactive pass when given
    #[arg(long, value_enum)]
    city: Option<City>,

    /// Month filter for the non-interactive pass
    #[arg(long, value_enum)]
    month: Option<Month>,

    /// Day-of-week filter for the non-interactive pass
    #[arg(long, value_parser = parse_day_arg)]
    day: Option<Weekday>,
}

fn parse_day_arg(input: &str) -> Result<Weekday, String> {
    parse_weekday(input).ok_or_else(|| format!("'{input}' is not a day name (monday..sunday)"))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.city {
        Some(city) => run_once(&cli.data_dir, city, cli.month, cli.day),
        None => run_session(&cli.data_dir),
    }
}

/// Single load-and-report pass with filters taken from the command line.
fn run_once(
    data_dir: &Path,
    city: City,
    month: Option<Month>,
    day: Option<Weekday>,
) -> Result<()> {
    let filter = Filter { city, month, day };
    let set = loader::load(data_dir, &filter)?;
    run_reports(&set, &mut std::io::stdout())?;
    Ok(())
}

/// Interactive loop: prompt, load, report, browse, repeat until declined.
fn run_session(data_dir: &Path) -> Result<()> {
    prompt::greet();
    loop {
        let filter = prompt::get_filter()?;
        match loader::load(data_dir, &filter) {
            Ok(set) => {
                let mut stdout = std::io::stdout();
                run_reports(&set, &mut stdout)?;
                browser::browse(&set, &mut StdinConfirm, &mut stdout)?;
            }
            Err(e) => {
                error!(error = %e, "Failed to load dataset");
                println!("Could not load data: {e}");
            }
        }

        if !prompt::confirm_restart()? {
            println!("Goodbye!");
            break;
        }
    }
    Ok(())
}

/// Computes and renders the four reports, timing each one.
fn run_reports(set: &RecordSet, out: &mut impl Write) -> Result<()> {
    let started = Instant::now();
    let time = TimeStats::from_records(set);
    output::time_report(out, time.as_ref(), started.elapsed())?;

    let started = Instant::now();
    let station = StationStats::from_records(set);
    output::station_report(out, station.as_ref(), started.elapsed())?;

    let started = Instant::now();
    let duration = DurationStats::from_records(set);
    output::duration_report(out, duration.as_ref(), started.elapsed())?;

    let started = Instant::now();
    let user = UserStats::from_records(set);
    output::user_report(out, user.as_ref(), started.elapsed())?;

    Ok(())
}
