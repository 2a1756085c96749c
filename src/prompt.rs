//! Interactive filter prompts.
//!
//! Every prompt loops until the answer is valid, so the rest of the tool
//! only ever sees validated enum values.

use std::io::{self, Write};

use chrono::Weekday;

use crate::city::City;
use crate::filter::{Filter, Month, parse_weekday};
use crate::output::SEPARATOR;

pub fn greet() {
    println!("Hello! Let's explore some US bikeshare data!");
}

fn ask(question: &str) -> io::Result<String> {
    print!("{question} ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(answer.trim().to_lowercase())
}

fn ask_city() -> io::Result<City> {
    loop {
        let answer = ask("Would you like to see data for Chicago, New York, or Washington?")?;
        match City::parse(&answer) {
            Some(city) => return Ok(city),
            None => {
                println!("Invalid input. Please choose from Chicago, New York, or Washington.");
            }
        }
    }
}

fn ask_month() -> io::Result<Month> {
    loop {
        let answer = ask("Which month - January, February, March, April, May, or June?")?;
        match Month::parse(&answer) {
            Some(month) => return Ok(month),
            None => println!("Invalid month. Please try again."),
        }
    }
}

fn ask_day() -> io::Result<Weekday> {
    loop {
        let answer = ask(
            "Which day - Monday, Tuesday, Wednesday, Thursday, Friday, Saturday, or Sunday?",
        )?;
        match parse_weekday(&answer) {
            Some(day) => return Ok(day),
            None => println!("Invalid day. Please try again."),
        }
    }
}

/// Collects a validated (city, month, day) filter from the console.
pub fn get_filter() -> io::Result<Filter> {
    let city = ask_city()?;

    let filter_type = loop {
        let answer = ask(
            "Would you like to filter the data by month, day, both, or not at all? \
             Type 'none' for no filter:",
        )?;
        match answer.as_str() {
            "month" | "day" | "both" | "none" => break answer,
            _ => println!("Invalid input. Please type 'month', 'day', 'both', or 'none'."),
        }
    };

    let month = if filter_type == "month" || filter_type == "both" {
        Some(ask_month()?)
    } else {
        None
    };
    let day = if filter_type == "day" || filter_type == "both" {
        Some(ask_day()?)
    } else {
        None
    };

    println!("{SEPARATOR}");
    Ok(Filter { city, month, day })
}

/// Asks whether to run another session iteration.
pub fn confirm_restart() -> io::Result<bool> {
    let answer = ask("\nWould you like to restart? Enter yes or no.")?;
    Ok(answer == "yes")
}
