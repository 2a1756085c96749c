use super::mode;
use crate::record::RecordSet;

/// Most popular start station, end station, and (start, end) trip.
///
/// The trip key is a structured pair rather than a concatenated string, so
/// station names containing any separator text cannot collide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationStats {
    pub common_start: String,
    pub common_end: String,
    pub common_trip: (String, String),
}

impl StationStats {
    /// Returns `None` for an empty record set.
    pub fn from_records(set: &RecordSet) -> Option<StationStats> {
        let common_start = mode(set.records.iter().map(|r| r.start_station.as_str()))?;
        let common_end = mode(set.records.iter().map(|r| r.end_station.as_str()))?;
        let (trip_start, trip_end) = mode(
            set.records
                .iter()
                .map(|r| (r.start_station.as_str(), r.end_station.as_str())),
        )?;
        Some(StationStats {
            common_start: common_start.to_string(),
            common_end: common_end.to_string(),
            common_trip: (trip_start.to_string(), trip_end.to_string()),
        })
    }
}
