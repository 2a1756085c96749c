use crate::record::RecordSet;

/// Total and mean trip duration in seconds. Durations pass through as
/// stored; negative or zero values are not filtered.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationStats {
    pub total_secs: f64,
    pub mean_secs: f64,
}

impl DurationStats {
    /// Returns `None` for an empty record set (the mean would be 0/0).
    pub fn from_records(set: &RecordSet) -> Option<DurationStats> {
        if set.is_empty() {
            return None;
        }
        let total_secs: f64 = set.records.iter().map(|r| r.duration_secs).sum();
        Some(DurationStats {
            total_secs,
            mean_secs: total_secs / set.len() as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RawTrip, TripRecord};

    fn trip(duration: f64) -> TripRecord {
        TripRecord::from_raw(RawTrip {
            start_time: "2017-02-14 07:45:00".to_string(),
            end_time: None,
            trip_duration: duration,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: Some("Subscriber".to_string()),
            gender: None,
            birth_year: None,
        })
        .unwrap()
    }

    #[test]
    fn test_empty_set_yields_none() {
        assert_eq!(DurationStats::from_records(&RecordSet::default()), None);
    }

    #[test]
    fn test_total_and_mean() {
        let set = RecordSet {
            records: vec![trip(100.0), trip(200.0), trip(300.0)],
            ..Default::default()
        };
        let stats = DurationStats::from_records(&set).unwrap();
        assert_eq!(stats.total_secs, 600.0);
        assert_eq!(stats.mean_secs, 200.0);
    }

    #[test]
    fn test_negative_durations_pass_through() {
        let set = RecordSet {
            records: vec![trip(-50.0), trip(150.0)],
            ..Default::default()
        };
        let stats = DurationStats::from_records(&set).unwrap();
        assert_eq!(stats.total_secs, 100.0);
        assert_eq!(stats.mean_secs, 50.0);
    }
}
