//! Raw-record browser: pages through the filtered set 5 rows at a time.

use std::io::{self, Write};

use crate::record::RecordSet;

pub const PAGE_SIZE: usize = 5;

/// Yes/no confirmation source. Pulling answers through a trait keeps the
/// pager independent of the console so tests can script the session.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Reads answers from stdin; anything other than "yes" declines.
pub struct StdinConfirm;

impl Confirm for StdinConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{prompt} ");
        let _ = io::stdout().flush();
        let mut answer = String::new();
        if io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        answer.trim().eq_ignore_ascii_case("yes")
    }
}

/// Pages through `set` on repeated confirmation. Prints fewer than
/// [`PAGE_SIZE`] rows when the set is nearly exhausted and nothing once the
/// cursor is past the end, but keeps prompting until the user declines.
pub fn browse(set: &RecordSet, confirm: &mut impl Confirm, out: &mut impl Write) -> io::Result<()> {
    let mut cursor = 0;
    let mut prompt = "Would you like to see 5 lines of raw data? (yes/no):";
    while confirm.confirm(prompt) {
        for record in set.page(cursor, PAGE_SIZE) {
            writeln!(out, "{}", record.summary_line())?;
        }
        cursor += PAGE_SIZE;
        prompt = "Would you like to see 5 more rows? (yes/no):";
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RawTrip, TripRecord};

    /// Scripted confirmation source answering yes a fixed number of times.
    struct YesTimes(usize);

    impl Confirm for YesTimes {
        fn confirm(&mut self, _prompt: &str) -> bool {
            if self.0 == 0 {
                return false;
            }
            self.0 -= 1;
            true
        }
    }

    fn seven_records() -> RecordSet {
        let records = (1..=7)
            .map(|d| {
                TripRecord::from_raw(RawTrip {
                    start_time: format!("2017-04-0{d} 10:00:00"),
                    end_time: None,
                    trip_duration: 60.0,
                    start_station: format!("start-{d}"),
                    end_station: "B".to_string(),
                    user_type: Some("Subscriber".to_string()),
                    gender: None,
                    birth_year: None,
                })
                .unwrap()
            })
            .collect();
        RecordSet {
            records,
            ..Default::default()
        }
    }

    fn lines_shown(set: &RecordSet, confirmations: usize) -> Vec<String> {
        let mut out = Vec::new();
        browse(set, &mut YesTimes(confirmations), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_first_page_shows_five_rows() {
        let set = seven_records();
        let lines = lines_shown(&set, 1);
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("start-1"));
        assert!(lines[4].contains("start-5"));
    }

    #[test]
    fn test_second_page_shows_remainder() {
        let set = seven_records();
        let lines = lines_shown(&set, 2);
        assert_eq!(lines.len(), 7);
        assert!(lines[5].contains("start-6"));
        assert!(lines[6].contains("start-7"));
    }

    #[test]
    fn test_exhausted_set_keeps_prompting_without_panicking() {
        let set = seven_records();
        // Third and fourth confirmations land past the end: no rows, no panic.
        let lines = lines_shown(&set, 4);
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn test_declining_immediately_shows_nothing() {
        let set = seven_records();
        assert!(lines_shown(&set, 0).is_empty());
    }
}
