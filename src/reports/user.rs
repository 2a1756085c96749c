use super::{mode, value_counts};
use crate::record::RecordSet;

/// Earliest, most recent, and most common birth year over non-missing
/// values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthYearStats {
    pub earliest: i32,
    pub most_recent: i32,
    pub most_common: i32,
}

/// User demographics: user-type counts plus gender and birth-year
/// breakdowns when the loaded schema carries those columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub user_types: Vec<(String, usize)>,
    pub genders: Option<Vec<(String, usize)>>,
    pub birth_years: Option<BirthYearStats>,
}

impl UserStats {
    /// Returns `None` for an empty record set. Demographic sections are
    /// `None` when the schema lacks the column or every value is missing.
    pub fn from_records(set: &RecordSet) -> Option<UserStats> {
        if set.is_empty() {
            return None;
        }

        let user_types = value_counts(set.records.iter().map(|r| r.user_type.clone()));

        let genders = set.has_gender.then(|| {
            value_counts(set.records.iter().filter_map(|r| r.gender.clone()))
        });

        let birth_years = if set.has_birth_year {
            let years: Vec<i32> = set.records.iter().filter_map(|r| r.birth_year).collect();
            match (years.iter().min(), years.iter().max()) {
                (Some(&earliest), Some(&most_recent)) => Some(BirthYearStats {
                    earliest,
                    most_recent,
                    most_common: mode(years.iter().copied())?,
                }),
                _ => None,
            }
        } else {
            None
        };

        Some(UserStats {
            user_types,
            genders,
            birth_years,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{RawTrip, TripRecord};

    fn rider(user_type: &str, gender: Option<&str>, birth_year: Option<f64>) -> TripRecord {
        TripRecord::from_raw(RawTrip {
            start_time: "2017-05-01 18:00:00".to_string(),
            end_time: None,
            trip_duration: 60.0,
            start_station: "A".to_string(),
            end_station: "B".to_string(),
            user_type: Some(user_type.to_string()),
            gender: gender.map(str::to_string),
            birth_year,
        })
        .unwrap()
    }

    #[test]
    fn test_empty_set_yields_none() {
        assert_eq!(UserStats::from_records(&RecordSet::default()), None);
    }

    #[test]
    fn test_user_types_only_when_schema_lacks_demographics() {
        let set = RecordSet {
            records: vec![rider("Subscriber", None, None), rider("Subscriber", None, None)],
            has_gender: false,
            has_birth_year: false,
        };
        let stats = UserStats::from_records(&set).unwrap();
        assert_eq!(stats.user_types, vec![("Subscriber".to_string(), 2)]);
        assert_eq!(stats.genders, None);
        assert_eq!(stats.birth_years, None);
    }

    #[test]
    fn test_full_demographics() {
        let set = RecordSet {
            records: vec![
                rider("Subscriber", Some("Male"), Some(1985.0)),
                rider("Subscriber", Some("Female"), Some(1992.0)),
                rider("Customer", None, None),
                rider("Subscriber", Some("Female"), Some(1992.0)),
            ],
            has_gender: true,
            has_birth_year: true,
        };
        let stats = UserStats::from_records(&set).unwrap();
        assert_eq!(
            stats.user_types,
            vec![("Subscriber".to_string(), 3), ("Customer".to_string(), 1)]
        );
        // Missing values are skipped, not counted
        assert_eq!(
            stats.genders,
            Some(vec![("Female".to_string(), 2), ("Male".to_string(), 1)])
        );
        assert_eq!(
            stats.birth_years,
            Some(BirthYearStats {
                earliest: 1985,
                most_recent: 1992,
                most_common: 1992,
            })
        );
    }

    #[test]
    fn test_birth_year_column_with_all_values_missing() {
        let set = RecordSet {
            records: vec![rider("Customer", None, None)],
            has_gender: true,
            has_birth_year: true,
        };
        let stats = UserStats::from_records(&set).unwrap();
        assert_eq!(stats.genders, Some(vec![]));
        assert_eq!(stats.birth_years, None);
    }
}
