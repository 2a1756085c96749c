use chrono::Weekday;

use super::mode;
use crate::record::RecordSet;

/// Most frequent travel times: month, day of week, and start hour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeStats {
    pub common_month: u32,
    pub common_day: Weekday,
    pub common_hour: u32,
}

impl TimeStats {
    /// Returns `None` for an empty record set.
    pub fn from_records(set: &RecordSet) -> Option<TimeStats> {
        Some(TimeStats {
            common_month: mode(set.records.iter().map(|r| r.month))?,
            common_day: mode(set.records.iter().map(|r| r.weekday))?,
            common_hour: mode(set.records.iter().map(|r| r.hour))?,
        })
    }
}
