//! Loads a city dataset from CSV and applies the month/day filters.

use std::fs::File;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Error;
use crate::filter::Filter;
use crate::record::{RawTrip, RecordSet, TripRecord};

/// Reads the full record set for the filter's city, attaches the derived
/// time fields, and returns the subset matching the month/day filters in
/// source order.
///
/// # Errors
///
/// Returns [`Error::DataSource`] if the city's CSV cannot be opened, and
/// [`Error::Parse`] on the first malformed row (strict policy: no
/// skip-and-continue).
pub fn load(data_dir: &Path, filter: &Filter) -> Result<RecordSet, Error> {
    let path = filter.city.data_path(data_dir);
    debug!(path = %path.display(), "Opening city dataset");

    let file = File::open(&path).map_err(|source| Error::DataSource {
        city: filter.city.display_name().to_string(),
        path: path.clone(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);

    // Schema is a property of the data, not the city name: detect the
    // optional demographic columns from the header row.
    let headers = reader.headers().map_err(|e| Error::Parse {
        record: 0,
        detail: e.to_string(),
    })?;
    let has_gender = headers.iter().any(|h| h == "Gender");
    let has_birth_year = headers.iter().any(|h| h == "Birth Year");

    let mut records = Vec::new();
    for (i, row) in reader.deserialize().enumerate() {
        let record_no = i as u64 + 1;
        let raw: RawTrip = row.map_err(|e| Error::Parse {
            record: record_no,
            detail: e.to_string(),
        })?;
        let record = TripRecord::from_raw(raw).map_err(|e| Error::Parse {
            record: record_no,
            detail: format!("bad start time: {e}"),
        })?;
        records.push(record);
    }

    let total = records.len();
    let set = RecordSet {
        records,
        has_gender,
        has_birth_year,
    }
    .filtered(filter.month, filter.day);

    info!(
        city = filter.city.display_name(),
        total,
        matched = set.len(),
        "Dataset loaded"
    );
    Ok(set)
}
